use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto},
        satellite::{
            CreateSatelliteDto, DeletedSatelliteDto, SatelliteDto, SatelliteViewDto,
            UpdateSatelliteDto,
        },
    },
    server::{
        controller::DetailQuery,
        error::AppError,
        model::{
            common::DetailLevel,
            satellite::{CreateSatelliteParams, SatelliteFilter, UpdateSatelliteParams},
        },
        service::satellite::SatelliteService,
        state::AppState,
        util::{
            extract::{AppJson, AppQuery},
            parse::parse_id,
        },
    },
};

/// Tag for grouping satellite endpoints in OpenAPI documentation
pub static SATELLITE_TAG: &str = "satellite";

/// Create a new satellite.
///
/// Validates the request, checks that no non-deleted satellite already uses the name
/// or slug, and stores the satellite with its defaults applied.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Satellite creation data
///
/// # Returns
/// - `201 Created` - The created satellite with every field
/// - `400 Bad Request` - Missing, malformed or out-of-range fields
/// - `409 Conflict` - Name or slug already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/satellites",
    tag = SATELLITE_TAG,
    request_body = CreateSatelliteDto,
    responses(
        (status = 201, description = "Successfully created satellite", body = SatelliteDto),
        (status = 400, description = "Invalid satellite data", body = ErrorDto),
        (status = 409, description = "Name or slug already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_satellite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSatelliteDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateSatelliteParams::from_dto(payload)?;
    let satellite = SatelliteService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(satellite.into_dto())))
}

/// List every non-deleted satellite.
///
/// # Returns
/// - `200 OK` - Satellites ordered by name, summarized unless `detailed=true`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/satellites",
    tag = SATELLITE_TAG,
    params(DetailQuery),
    responses(
        (status = 200, description = "Successfully retrieved satellites", body = Vec<SatelliteViewDto>),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_satellites(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DetailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detail = DetailLevel::from_detailed(query.detailed);
    let satellites = SatelliteService::new(&state.db).get_all().await?;

    let satellites: Vec<SatelliteViewDto> = satellites
        .into_iter()
        .map(|satellite| satellite.into_view_dto(detail))
        .collect();

    Ok((StatusCode::OK, Json(satellites)))
}

/// Get a satellite by id.
///
/// # Returns
/// - `200 OK` - The satellite, summarized unless `detailed=true`
/// - `400 Bad Request` - The id is not a UUID
/// - `404 Not Found` - No non-deleted satellite has this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/satellites/id/{id}",
    tag = SATELLITE_TAG,
    params(
        ("id" = String, Path, description = "Satellite UUID"),
        DetailQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved satellite", body = SatelliteViewDto),
        (status = 400, description = "Invalid identifier", body = ErrorDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_satellite_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppQuery(query): AppQuery<DetailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = SatelliteFilter::ById(parse_id(&id)?);
    let satellite = SatelliteService::new(&state.db).get(&filter).await?;

    Ok((
        StatusCode::OK,
        Json(satellite.into_view_dto(DetailLevel::from_detailed(query.detailed))),
    ))
}

/// Get a satellite by name.
///
/// # Returns
/// - `200 OK` - The satellite, summarized unless `detailed=true`
/// - `404 Not Found` - No non-deleted satellite has this name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/satellites/name/{name}",
    tag = SATELLITE_TAG,
    params(
        ("name" = String, Path, description = "Satellite name"),
        DetailQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved satellite", body = SatelliteViewDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_satellite_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    AppQuery(query): AppQuery<DetailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let satellite = SatelliteService::new(&state.db)
        .get(&SatelliteFilter::ByName(name))
        .await?;

    Ok((
        StatusCode::OK,
        Json(satellite.into_view_dto(DetailLevel::from_detailed(query.detailed))),
    ))
}

/// Get the id of a satellite by name.
///
/// # Returns
/// - `200 OK` - `{ "id": ... }` of the non-deleted satellite with this name
/// - `404 Not Found` - No non-deleted satellite has this name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/satellites/name/{name}/id",
    tag = SATELLITE_TAG,
    params(
        ("name" = String, Path, description = "Satellite name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved satellite id", body = IdDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_satellite_id_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let satellite = SatelliteService::new(&state.db)
        .get(&SatelliteFilter::ByName(name))
        .await?;

    Ok((StatusCode::OK, Json(IdDto { id: satellite.id })))
}

/// Update a satellite by id.
///
/// Applies a partial update. `id`, `name` and `slug` may be sent but must match the
/// stored values; a partial `orbit` is merged with the stored orbit before validation.
///
/// # Returns
/// - `200 OK` - The updated satellite with every field
/// - `400 Bad Request` - Invalid identifier or invalid merged record
/// - `404 Not Found` - No non-deleted satellite has this id
/// - `409 Conflict` - The update changes an immutable field
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/satellites/id/{id}",
    tag = SATELLITE_TAG,
    params(
        ("id" = String, Path, description = "Satellite UUID")
    ),
    request_body = UpdateSatelliteDto,
    responses(
        (status = 200, description = "Successfully updated satellite", body = SatelliteDto),
        (status = 400, description = "Invalid satellite data", body = ErrorDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 409, description = "Immutable field changed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_satellite_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateSatelliteDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = SatelliteFilter::ById(parse_id(&id)?);
    let satellite = SatelliteService::new(&state.db)
        .update(&filter, UpdateSatelliteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(satellite.into_dto())))
}

/// Update a satellite by name.
///
/// Same rules as the update by id; the path name selects the satellite.
#[utoipa::path(
    put,
    path = "/api/satellites/name/{name}",
    tag = SATELLITE_TAG,
    params(
        ("name" = String, Path, description = "Satellite name")
    ),
    request_body = UpdateSatelliteDto,
    responses(
        (status = 200, description = "Successfully updated satellite", body = SatelliteDto),
        (status = 400, description = "Invalid satellite data", body = ErrorDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 409, description = "Immutable field changed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_satellite_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    AppJson(payload): AppJson<UpdateSatelliteDto>,
) -> Result<impl IntoResponse, AppError> {
    let satellite = SatelliteService::new(&state.db)
        .update(
            &SatelliteFilter::ByName(name),
            UpdateSatelliteParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(satellite.into_dto())))
}

/// Soft delete a satellite by id.
///
/// The record is kept in storage with its deletion metadata and stops appearing in
/// every read and update. Its name and slug become available again.
///
/// # Returns
/// - `200 OK` - Confirmation message with the deleted satellite
/// - `400 Bad Request` - The id is not a UUID
/// - `404 Not Found` - No non-deleted satellite has this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/satellites/id/{id}",
    tag = SATELLITE_TAG,
    params(
        ("id" = String, Path, description = "Satellite UUID")
    ),
    responses(
        (status = 200, description = "Successfully soft deleted satellite", body = DeletedSatelliteDto),
        (status = 400, description = "Invalid identifier", body = ErrorDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_satellite_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let filter = SatelliteFilter::ById(parse_id(&id)?);
    let satellite = SatelliteService::new(&state.db).soft_delete(&filter).await?;

    Ok((
        StatusCode::OK,
        Json(DeletedSatelliteDto {
            message: "Satellite has been soft deleted".to_string(),
            satellite: satellite.into_dto(),
        }),
    ))
}
