use super::*;

/// Tests the welcome route.
///
/// Expected: 200 with the welcome text
#[tokio::test]
async fn serves_welcome_message() {
    let (_test, app) = setup().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Welcome to the Fleet Service API");
}

/// Tests that the OpenAPI document lists the fleet routes.
///
/// Expected: 200 with satellite, beam and transponder paths
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Fleet Service API");
    assert!(doc["paths"]["/api/satellites"].is_object());
    assert!(doc["paths"]["/api/beams/id/{id}"].is_object());
    assert!(doc["paths"]["/api/transponders/id/{id}"].is_object());
}
