use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        transponder::{
            CreateTransponderDto, DeletedTransponderDto, TransponderDto, TransponderViewDto,
            UpdateTransponderDto,
        },
    },
    server::{
        controller::DetailQuery,
        error::AppError,
        model::{
            common::DetailLevel,
            transponder::{CreateTransponderParams, TransponderFilter, UpdateTransponderParams},
        },
        service::transponder::TransponderService,
        state::AppState,
        util::{
            extract::{AppJson, AppQuery},
            parse::parse_id,
        },
    },
};

/// Tag for grouping transponder endpoints in OpenAPI documentation
pub static TRANSPONDER_TAG: &str = "transponder";

/// Create a new transponder.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Transponder creation data
///
/// # Returns
/// - `201 Created` - The created transponder with every field
/// - `400 Bad Request` - Missing fields, or a frequency or bandwidth not above 0
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/transponders",
    tag = TRANSPONDER_TAG,
    request_body = CreateTransponderDto,
    responses(
        (status = 201, description = "Successfully created transponder", body = TransponderDto),
        (status = 400, description = "Invalid transponder data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transponder(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateTransponderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTransponderParams::from_dto(payload)?;
    let transponder = TransponderService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(transponder.into_dto())))
}

/// Get a transponder by id.
///
/// # Returns
/// - `200 OK` - The transponder, summarized unless `detailed=true`
/// - `400 Bad Request` - The id is not a UUID
/// - `404 Not Found` - No non-deleted transponder has this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/transponders/id/{id}",
    tag = TRANSPONDER_TAG,
    params(
        ("id" = String, Path, description = "Transponder UUID"),
        DetailQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved transponder", body = TransponderViewDto),
        (status = 400, description = "Invalid identifier", body = ErrorDto),
        (status = 404, description = "Transponder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transponder_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppQuery(query): AppQuery<DetailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = TransponderFilter::ById(parse_id(&id)?);
    let transponder = TransponderService::new(&state.db).get(&filter).await?;

    Ok((
        StatusCode::OK,
        Json(transponder.into_view_dto(DetailLevel::from_detailed(query.detailed))),
    ))
}

/// Update a transponder by id.
///
/// Polarizations are fixed as a pair; sending either with a different value is a
/// conflict.
#[utoipa::path(
    put,
    path = "/api/transponders/id/{id}",
    tag = TRANSPONDER_TAG,
    params(
        ("id" = String, Path, description = "Transponder UUID")
    ),
    request_body = UpdateTransponderDto,
    responses(
        (status = 200, description = "Successfully updated transponder", body = TransponderDto),
        (status = 400, description = "Invalid transponder data", body = ErrorDto),
        (status = 404, description = "Transponder not found", body = ErrorDto),
        (status = 409, description = "Immutable field changed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_transponder_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateTransponderDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = TransponderFilter::ById(parse_id(&id)?);
    let transponder = TransponderService::new(&state.db)
        .update(&filter, UpdateTransponderParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(transponder.into_dto())))
}

/// Soft delete a transponder by id.
///
/// # Returns
/// - `200 OK` - Confirmation message with the deleted transponder
/// - `400 Bad Request` - The id is not a UUID
/// - `404 Not Found` - No non-deleted transponder has this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/transponders/id/{id}",
    tag = TRANSPONDER_TAG,
    params(
        ("id" = String, Path, description = "Transponder UUID")
    ),
    responses(
        (status = 200, description = "Successfully soft deleted transponder", body = DeletedTransponderDto),
        (status = 400, description = "Invalid identifier", body = ErrorDto),
        (status = 404, description = "Transponder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transponder_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let filter = TransponderFilter::ById(parse_id(&id)?);
    let transponder = TransponderService::new(&state.db)
        .soft_delete(&filter)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DeletedTransponderDto {
            message: "Transponder has been soft deleted".to_string(),
            transponder: transponder.into_dto(),
        }),
    ))
}
