use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization` header.
    ///
    /// Only raised when the authorization stub is enabled. Results in a 403 Forbidden
    /// response.
    #[error("Request rejected: missing Authorization header")]
    MissingAuthorization,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 403 Forbidden - For a missing `Authorization` header
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingAuthorization => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
