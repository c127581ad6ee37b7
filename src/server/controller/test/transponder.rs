use super::*;
use crate::server::data::transponder::TransponderRepository;

fn transponder_body() -> Value {
    json!({
        "name": "Transponder X",
        "UL_polarization": "H",
        "DL_polarization": "V",
        "UL_frequency": 14000.0,
        "DL_frequency": 11700.0,
        "bandwidth": 36.0
    })
}

/// Tests creating a transponder with the public field names.
///
/// Expected: 201 with polarizations and frequencies echoed back
#[tokio::test]
async fn creates_transponder() {
    let (_test, app) = setup().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/transponders",
        Some(transponder_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["UL_polarization"], "H");
    assert_eq!(created["DL_polarization"], "V");
    assert_eq!(created["UL_frequency"], 14000.0);
    assert_eq!(created["status"], "active");
}

/// Tests rejecting a non-positive bandwidth.
///
/// Expected: 400
#[tokio::test]
async fn rejects_zero_bandwidth() {
    let (_test, app) = setup().await;
    let mut body = transponder_body();
    body["bandwidth"] = json!(0);

    let (status, _) = send(&app, Method::POST, "/api/transponders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests that polarizations are immutable as a pair.
///
/// Expected: 409 when DL changes, 200 when both are resent unchanged
#[tokio::test]
async fn rejects_polarization_change() {
    let (_test, app) = setup().await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/transponders",
        Some(transponder_body()),
    )
    .await;
    let uri = format!("/api/transponders/id/{}", created["id"].as_str().unwrap());

    let (status, error) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "UL_polarization": "H", "DL_polarization": "RHCP" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        error["error"],
        "Transponder polarizations cannot be modified. They are immutable."
    );

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "UL_polarization": "H", "DL_polarization": "V", "bandwidth": 72 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["bandwidth"], 72.0);
}

/// Tests soft deleting a transponder.
///
/// Verifies that a later fetch returns 404 while the row is still stored with its
/// deletion metadata.
///
/// Expected: 200, then 404 on fetch
#[tokio::test]
async fn soft_deleted_transponder_is_retained() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/transponders",
        Some(transponder_body()),
    )
    .await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/api/transponders/id/{}", id);

    let (status, deleted) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Transponder has been soft deleted");

    let (status, error) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "Transponder not found");

    let retained = TransponderRepository::new(db)
        .find_one_including_deleted(id.parse().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert!(retained.deleted);
    assert!(retained.deleted_at.is_some());
}

/// Tests the detailed projection of a transponder.
///
/// Expected: 200 with timestamps; the summary only has id and name
#[tokio::test]
async fn projects_transponder_by_detail_level() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let created = factory::create_transponder(db).await.unwrap();
    let uri = format!("/api/transponders/id/{}", created.id);

    let (_, summary) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(summary, json!({ "id": created.id, "name": created.name }));

    let (_, detailed) = send(&app, Method::GET, &format!("{}?detailed=true", uri), None).await;
    assert!(detailed["createdAt"].is_string());
    assert_eq!(detailed["deleted"], false);
}
