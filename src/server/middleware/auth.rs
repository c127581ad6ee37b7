//! Authorization stub.
//!
//! The service has no identity provider. When enabled, this middleware only checks that
//! an `Authorization` header is present and does not inspect its value.

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::server::error::{auth::AuthError, AppError};

/// Rejects requests that carry no `Authorization` header.
///
/// # Returns
/// - `Ok(Response)` - Response from the inner handler
/// - `Err(AppError::AuthErr)` - Header missing, rendered as 403 Forbidden
pub async fn require_authorization(request: Request, next: Next) -> Result<Response, AppError> {
    if !request.headers().contains_key(AUTHORIZATION) {
        return Err(AuthError::MissingAuthorization.into());
    }

    Ok(next.run(request).await)
}
