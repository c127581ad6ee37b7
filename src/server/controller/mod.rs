//! HTTP request handlers for the fleet API.
//!
//! Controllers extract path, query and body input, convert DTOs to parameter types
//! (running request validation on the way), call the matching service and convert the
//! returned domain models back to DTOs.

pub mod beam;
pub mod root;
pub mod satellite;
pub mod transponder;

#[cfg(test)]
mod test;

use serde::Deserialize;
use utoipa::IntoParams;

/// Projection toggle accepted by every read endpoint.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DetailQuery {
    /// Return every field instead of the summary field set.
    #[serde(default)]
    pub detailed: bool,
}
