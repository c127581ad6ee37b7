use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        beam::{create_beam, delete_beam_by_id, get_beam_by_id, update_beam_by_id},
        root::welcome,
        satellite::{
            create_satellite, delete_satellite_by_id, get_satellite_by_id,
            get_satellite_by_name, get_satellite_id_by_name, get_satellites,
            update_satellite_by_id, update_satellite_by_name,
        },
        transponder::{
            create_transponder, delete_transponder_by_id, get_transponder_by_id,
            update_transponder_by_id,
        },
    },
    middleware::auth::require_authorization,
    state::AppState,
};

/// OpenAPI document assembled from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet Service API",
        version = "1.0.0",
        description = "CRUD operations over satellites, beams and transponders with soft deletion"
    ),
    paths(
        crate::server::controller::root::welcome,
        crate::server::controller::satellite::create_satellite,
        crate::server::controller::satellite::get_satellites,
        crate::server::controller::satellite::get_satellite_by_id,
        crate::server::controller::satellite::get_satellite_by_name,
        crate::server::controller::satellite::get_satellite_id_by_name,
        crate::server::controller::satellite::update_satellite_by_id,
        crate::server::controller::satellite::update_satellite_by_name,
        crate::server::controller::satellite::delete_satellite_by_id,
        crate::server::controller::beam::create_beam,
        crate::server::controller::beam::get_beam_by_id,
        crate::server::controller::beam::update_beam_by_id,
        crate::server::controller::beam::delete_beam_by_id,
        crate::server::controller::transponder::create_transponder,
        crate::server::controller::transponder::get_transponder_by_id,
        crate::server::controller::transponder::update_transponder_by_id,
        crate::server::controller::transponder::delete_transponder_by_id,
    ),
    tags(
        (name = "satellite", description = "Satellites and their orbits"),
        (name = "beam", description = "Satellite beams"),
        (name = "transponder", description = "Transponders and their radio parameters")
    )
)]
pub struct ApiDoc;

/// Builds the application routes.
///
/// The welcome page and the OpenAPI document are always public. When `require_auth` is
/// set, every `/api` route is guarded by the authorization stub.
pub fn router(require_auth: bool) -> Router<AppState> {
    let mut api = Router::new()
        .route("/api/satellites", post(create_satellite).get(get_satellites))
        .route(
            "/api/satellites/id/{id}",
            get(get_satellite_by_id)
                .put(update_satellite_by_id)
                .delete(delete_satellite_by_id),
        )
        .route(
            "/api/satellites/name/{name}",
            get(get_satellite_by_name).put(update_satellite_by_name),
        )
        .route(
            "/api/satellites/name/{name}/id",
            get(get_satellite_id_by_name),
        )
        .route("/api/beams", post(create_beam))
        .route(
            "/api/beams/id/{id}",
            get(get_beam_by_id)
                .put(update_beam_by_id)
                .delete(delete_beam_by_id),
        )
        .route("/api/transponders", post(create_transponder))
        .route(
            "/api/transponders/id/{id}",
            get(get_transponder_by_id)
                .put(update_transponder_by_id)
                .delete(delete_transponder_by_id),
        );

    if require_auth {
        api = api.route_layer(middleware::from_fn(require_authorization));
    }

    Router::new()
        .route("/", get(welcome))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
