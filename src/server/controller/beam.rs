use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        beam::{BeamDto, BeamViewDto, CreateBeamDto, DeletedBeamDto, UpdateBeamDto},
    },
    server::{
        controller::DetailQuery,
        error::AppError,
        model::{
            beam::{BeamFilter, CreateBeamParams, UpdateBeamParams},
            common::DetailLevel,
        },
        service::beam::BeamService,
        state::AppState,
        util::{
            extract::{AppJson, AppQuery},
            parse::parse_id,
        },
    },
};

/// Tag for grouping beam endpoints in OpenAPI documentation
pub static BEAM_TAG: &str = "beam";

/// Create a new beam.
///
/// # Returns
/// - `201 Created` - The created beam with every field
/// - `400 Bad Request` - Missing or malformed fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/beams",
    tag = BEAM_TAG,
    request_body = CreateBeamDto,
    responses(
        (status = 201, description = "Successfully created beam", body = BeamDto),
        (status = 400, description = "Invalid beam data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_beam(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBeamParams::from_dto(payload)?;
    let beam = BeamService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(beam.into_dto())))
}

/// Get a beam by id.
#[utoipa::path(
    get,
    path = "/api/beams/id/{id}",
    tag = BEAM_TAG,
    params(
        ("id" = String, Path, description = "Beam UUID"),
        DetailQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved beam", body = BeamViewDto),
        (status = 400, description = "Invalid identifier", body = ErrorDto),
        (status = 404, description = "Beam not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_beam_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppQuery(query): AppQuery<DetailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BeamFilter::ById(parse_id(&id)?);
    let beam = BeamService::new(&state.db).get(&filter).await?;

    Ok((
        StatusCode::OK,
        Json(beam.into_view_dto(DetailLevel::from_detailed(query.detailed))),
    ))
}

/// Update a beam by id.
///
/// Only `pattern` and `updatedBy` can change. `id`, `name` and `linkDirection` may be
/// sent but must match the stored values.
///
/// # Returns
/// - `200 OK` - The updated beam with every field
/// - `400 Bad Request` - Invalid identifier or malformed fields
/// - `404 Not Found` - No non-deleted beam has this id
/// - `409 Conflict` - The update changes an immutable field
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/beams/id/{id}",
    tag = BEAM_TAG,
    params(
        ("id" = String, Path, description = "Beam UUID")
    ),
    request_body = UpdateBeamDto,
    responses(
        (status = 200, description = "Successfully updated beam", body = BeamDto),
        (status = 400, description = "Invalid beam data", body = ErrorDto),
        (status = 404, description = "Beam not found", body = ErrorDto),
        (status = 409, description = "Immutable field changed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_beam_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateBeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BeamFilter::ById(parse_id(&id)?);
    let beam = BeamService::new(&state.db)
        .update(&filter, UpdateBeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(beam.into_dto())))
}

/// Soft delete a beam by id.
#[utoipa::path(
    delete,
    path = "/api/beams/id/{id}",
    tag = BEAM_TAG,
    params(
        ("id" = String, Path, description = "Beam UUID")
    ),
    responses(
        (status = 200, description = "Successfully soft deleted beam", body = DeletedBeamDto),
        (status = 400, description = "Invalid identifier", body = ErrorDto),
        (status = 404, description = "Beam not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_beam_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BeamFilter::ById(parse_id(&id)?);
    let beam = BeamService::new(&state.db).soft_delete(&filter).await?;

    Ok((
        StatusCode::OK,
        Json(DeletedBeamDto {
            message: "Beam has been soft deleted".to_string(),
            beam: beam.into_dto(),
        }),
    ))
}
