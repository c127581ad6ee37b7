//! Request and response DTOs exchanged over the REST API.
//!
//! Field names follow the public JSON contract (`camelCase`, with the transponder's
//! `UL_`/`DL_` prefixed fields kept verbatim). Every DTO derives `ToSchema` so the
//! OpenAPI document can reference it.

pub mod api;
pub mod beam;
pub mod common;
pub mod satellite;
pub mod transponder;
