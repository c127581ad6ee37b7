use uuid::Uuid;

use crate::server::error::{validation::ValidationError, AppError};

/// Parses a record identifier taken from the request path.
///
/// # Arguments
/// - `value` - The path segment to parse as a UUID
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed identifier
/// - `Err(AppError::Validation(InvalidId))` - The segment is not a UUID
pub fn parse_id(value: &str) -> Result<Uuid, AppError> {
    let id = Uuid::parse_str(value).map_err(|_| ValidationError::InvalidId(value.to_string()))?;

    Ok(id)
}
