use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,
    /// Socket address the HTTP server listens on.
    pub bind_address: String,
    /// Rejects API requests without an `Authorization` header when set.
    pub require_auth: bool,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `BIND_ADDRESS` defaults to `0.0.0.0:3000` and
    /// `REQUIRE_AUTH` to `false`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present or defaulted, and parseable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            require_auth: match std::env::var("REQUIRE_AUTH") {
                Ok(value) => parse_flag("REQUIRE_AUTH", &value)?,
                Err(_) => false,
            },
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            expected: "a boolean (true/false)",
        }),
    }
}
