/// Welcome message served at the root path.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
)]
pub async fn welcome() -> &'static str {
    "Welcome to the Fleet Service API"
}
