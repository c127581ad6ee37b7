use thiserror::Error;

/// Input rejected before it reaches storage.
///
/// Validation stops at the first violated rule, so a request only ever reports one of
/// these. All variants map to 400 Bad Request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more mandatory fields are absent or empty.
    ///
    /// Carries the human readable list of the entity's required fields.
    #[error("The fields {0} are required.")]
    MissingFields(&'static str),

    /// A text field is shorter than the minimum once surrounding whitespace is trimmed.
    #[error("The field '{field}' must be at least {min} characters long.")]
    TooShort { field: &'static str, min: usize },

    #[error("The field '{field}' may only contain letters, digits, hyphens and spaces.")]
    InvalidCharacters { field: &'static str },

    /// Orbit coordinates or height outside their physical range.
    #[error("Orbital information out of range: {0}.")]
    OrbitOutOfRange(String),

    /// A frequency or bandwidth that is zero, negative or not finite.
    #[error("{value} is not a valid value for '{field}'. It must be greater than 0.")]
    NotPositive { field: &'static str, value: f64 },

    /// Path identifier that is not a UUID.
    #[error("'{0}' is not a valid identifier.")]
    InvalidId(String),

    /// JSON body that could not be parsed into the expected shape or types.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Malformed query string: {0}")]
    MalformedQuery(String),
}
