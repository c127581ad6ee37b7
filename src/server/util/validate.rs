//! Field-level validation rules shared by the satellite, beam and transponder params.
//!
//! Each check returns the first violated rule; callers run them in order and bail out
//! with `?`.

use crate::server::error::validation::ValidationError;

/// Constraints and defaults applied to incoming fleet records.
pub struct FieldRules {
    /// Minimum number of characters in a name or slug, after trimming.
    pub min_name_length: usize,
    /// Inclusive latitude bounds in degrees.
    pub latitude: (f64, f64),
    /// Inclusive longitude bounds in degrees.
    pub longitude: (f64, f64),
    pub default_latitude: f64,
    pub default_inclination: f64,
    /// Geostationary orbit height in km.
    pub default_height: f64,
}

pub const FIELD_RULES: FieldRules = FieldRules {
    min_name_length: 2,
    latitude: (-90.0, 90.0),
    longitude: (-180.0, 180.0),
    default_latitude: 0.0,
    default_inclination: 0.0,
    default_height: 35786.063,
};

/// Returns `true` when a text field is present and non-empty.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Checks length and charset of a name-like field.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw value as submitted
///
/// # Returns
/// - `Ok(())` - At least `min_name_length` characters after trimming, made only of
///   letters, digits, hyphens and spaces
/// - `Err(ValidationError)` - The first rule the value violates
pub fn check_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.chars().count() < FIELD_RULES.min_name_length {
        return Err(ValidationError::TooShort {
            field,
            min: FIELD_RULES.min_name_length,
        });
    }

    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == ' ')
    {
        return Err(ValidationError::InvalidCharacters { field });
    }

    Ok(())
}

/// Checks orbit coordinates against their bounds and the height for positivity.
pub fn check_orbit(longitude: f64, latitude: f64, height: f64) -> Result<(), ValidationError> {
    let (min_lon, max_lon) = FIELD_RULES.longitude;
    if !(min_lon..=max_lon).contains(&longitude) {
        return Err(ValidationError::OrbitOutOfRange(format!(
            "longitude {} not within [{}, {}]",
            longitude, min_lon, max_lon
        )));
    }

    let (min_lat, max_lat) = FIELD_RULES.latitude;
    if !(min_lat..=max_lat).contains(&latitude) {
        return Err(ValidationError::OrbitOutOfRange(format!(
            "latitude {} not within [{}, {}]",
            latitude, min_lat, max_lat
        )));
    }

    if height.is_nan() || height <= 0.0 {
        return Err(ValidationError::OrbitOutOfRange(format!(
            "height {} must be greater than 0",
            height
        )));
    }

    Ok(())
}

/// Checks that a frequency or bandwidth is a finite value above zero.
pub fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}
