//! Extractors that report malformed input as `AppError` instead of axum's plain-text
//! rejections, so every 400 carries the usual `{ "error": ... }` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor. Type mismatches and syntax errors become 400 validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor with the same rejection mapping as `AppJson`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
