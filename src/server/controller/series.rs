use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        series::{SeriesDraftDto, SeriesDto, StatusUpdateDto},
    },
    server::{
        error::AppError,
        model::series::{SeriesDraft, StatusUpdate},
        service::series::SeriesService,
        state::AppState,
        util::parse::parse_series_id,
    },
};

/// Tag for grouping series endpoints in OpenAPI documentation
pub static SERIES_TAG: &str = "series";

/// Unwraps the body of a request that targets an existing series.
///
/// A rejected body is only reported once the series is known to exist, so an unknown
/// ID answers `404 Not Found` whatever the body contains.
async fn body_for_existing<T>(
    service: &SeriesService<'_>,
    id: i32,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, AppError> {
    match payload {
        Ok(body) => Ok(body),
        Err(rejection) => {
            service.get(id).await?;
            Err(rejection.into())
        }
    }
}

/// Series routes with their OpenAPI metadata.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_series, create_series))
        .routes(routes!(get_series, replace_series, delete_series))
        .routes(routes!(set_series_status))
        .routes(routes!(advance_episode))
        .routes(routes!(upvote_series))
        .routes(routes!(downvote_series))
}

/// List all tracked series.
///
/// # Returns
/// - `200 OK` - Every series, ordered by ID
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    get,
    path = "/api/series",
    tag = SERIES_TAG,
    responses(
        (status = 200, description = "Successfully retrieved series", body = Vec<SeriesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_series(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let series = SeriesService::new(state.store.as_ref()).list().await?;

    let dtos: Vec<SeriesDto> = series.into_iter().map(|s| s.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a single series by ID.
///
/// # Arguments
/// - `state` - Application state containing the series store
/// - `id` - Raw path segment, parsed as an integer series ID
///
/// # Returns
/// - `200 OK` - The series
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No series with this ID
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    get,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved series", body = SeriesDto),
        (status = 400, description = "Invalid series ID", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_series_id(&id)?;

    let series = SeriesService::new(state.store.as_ref()).get(id).await?;

    Ok(Json(series.into_dto()))
}

/// Create a new series.
///
/// Any `id` in the body is ignored. Omitted fields default to empty strings and zero.
///
/// # Arguments
/// - `state` - Application state containing the series store
/// - `payload` - Series fields; `title` must be non-empty
///
/// # Returns
/// - `201 Created` - The created series with its assigned ID
/// - `400 Bad Request` - Malformed body or missing title
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    post,
    path = "/api/series",
    tag = SERIES_TAG,
    request_body = SeriesDraftDto,
    responses(
        (status = 201, description = "Successfully created series", body = SeriesDto),
        (status = 400, description = "Invalid series data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_series(
    State(state): State<AppState>,
    payload: Result<Json<SeriesDraftDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let series = SeriesService::new(state.store.as_ref())
        .create(SeriesDraft::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(series.into_dto())))
}

/// Replace every mutable field of a series.
///
/// # Arguments
/// - `state` - Application state containing the series store
/// - `id` - Raw path segment, parsed as an integer series ID
/// - `payload` - New values; omitted fields are reset to empty strings and zero
///
/// # Returns
/// - `200 OK` - The replaced series
/// - `400 Bad Request` - Invalid ID, or malformed body for an existing series
/// - `404 Not Found` - No series with this ID, whatever the body
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    put,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    request_body = SeriesDraftDto,
    responses(
        (status = 200, description = "Successfully replaced series", body = SeriesDto),
        (status = 400, description = "Invalid series ID or data", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SeriesDraftDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_series_id(&id)?;
    let service = SeriesService::new(state.store.as_ref());
    let Json(payload) = body_for_existing(&service, id, payload).await?;

    let series = service.replace(id, SeriesDraft::from_dto(payload)).await?;

    Ok(Json(series.into_dto()))
}

/// Delete a series permanently.
///
/// # Returns
/// - `204 No Content` - Series deleted
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No series with this ID
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    delete,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted series"),
        (status = 400, description = "Invalid series ID", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_series_id(&id)?;

    SeriesService::new(state.store.as_ref()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change only the status of a series.
///
/// Any non-empty status is accepted.
///
/// # Returns
/// - `200 OK` - The updated series
/// - `400 Bad Request` - Invalid ID, or malformed body or empty status for an existing series
/// - `404 Not Found` - No series with this ID, whatever the body
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    patch,
    path = "/api/series/{id}/status",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Successfully updated status", body = SeriesDto),
        (status = 400, description = "Invalid series ID or status", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_series_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_series_id(&id)?;
    let service = SeriesService::new(state.store.as_ref());
    let Json(payload) = body_for_existing(&service, id, payload).await?;

    let series = service
        .set_status(id, StatusUpdate::from_dto(payload))
        .await?;

    Ok(Json(series.into_dto()))
}

/// Record one more watched episode.
///
/// Stops at `totalEpisodes` when it is known; a call at the cap succeeds without
/// changing anything.
///
/// # Returns
/// - `200 OK` - The series after the increment
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No series with this ID
/// - `500 Internal Server Error` - Storage failure
#[utoipa::path(
    patch,
    path = "/api/series/{id}/episode",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully advanced episode", body = SeriesDto),
        (status = 400, description = "Invalid series ID", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn advance_episode(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_series_id(&id)?;

    let series = SeriesService::new(state.store.as_ref())
        .advance_episode(id)
        .await?;

    Ok(Json(series.into_dto()))
}

/// Raise the ranking of a series by one.
#[utoipa::path(
    patch,
    path = "/api/series/{id}/upvote",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully upvoted series", body = SeriesDto),
        (status = 400, description = "Invalid series ID", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upvote_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_series_id(&id)?;

    let series = SeriesService::new(state.store.as_ref()).upvote(id).await?;

    Ok(Json(series.into_dto()))
}

/// Lower the ranking of a series by one. Rankings may become negative.
#[utoipa::path(
    patch,
    path = "/api/series/{id}/downvote",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully downvoted series", body = SeriesDto),
        (status = 400, description = "Invalid series ID", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn downvote_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_series_id(&id)?;

    let series = SeriesService::new(state.store.as_ref()).downvote(id).await?;

    Ok(Json(series.into_dto()))
}
