use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request, StatusCode},
};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};
