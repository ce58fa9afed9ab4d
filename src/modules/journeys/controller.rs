use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use choptop_core::AppError;
use choptop_models::Journey;
use choptop_models::journeys::{
    CreateJourneyDto, JourneyFilterParams, JourneyTestResponse, UpdateJourneyDto,
};

use crate::modules::journeys::service::JourneyService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/journeys",
    params(
        ("status" = Option<String>, Query, description = "draft or active")
    ),
    responses(
        (status = 200, description = "Journeys in creation order", body = Vec<Journey>)
    ),
    tag = "Journeys"
)]
#[instrument(skip(state))]
pub async fn get_journeys(
    State(state): State<AppState>,
    Query(filters): Query<JourneyFilterParams>,
) -> Json<Vec<Journey>> {
    Json(JourneyService::list(&state, filters).await)
}

#[utoipa::path(
    post,
    path = "/api/journeys",
    request_body = CreateJourneyDto,
    responses(
        (status = 201, description = "Draft journey created", body = Journey),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Journeys"
)]
#[instrument(skip(state))]
pub async fn create_journey(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateJourneyDto>,
) -> Result<(StatusCode, Json<Journey>), AppError> {
    let journey = JourneyService::create(&state, dto).await;
    Ok((StatusCode::CREATED, Json(journey)))
}

#[utoipa::path(
    get,
    path = "/api/journeys/{id}",
    params(("id" = Uuid, Path, description = "Journey ID")),
    responses(
        (status = 200, description = "Journey", body = Journey),
        (status = 404, description = "Journey not found")
    ),
    tag = "Journeys"
)]
#[instrument(skip(state))]
pub async fn get_journey(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Journey>, AppError> {
    let journey = JourneyService::get(&state, id).await?;
    Ok(Json(journey))
}

#[utoipa::path(
    put,
    path = "/api/journeys/{id}",
    params(("id" = Uuid, Path, description = "Journey ID")),
    request_body = UpdateJourneyDto,
    responses(
        (status = 200, description = "Journey saved", body = Journey),
        (status = 404, description = "Journey not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Journeys"
)]
#[instrument(skip(state))]
pub async fn update_journey(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateJourneyDto>,
) -> Result<Json<Journey>, AppError> {
    let journey = JourneyService::update(&state, id, dto).await?;
    Ok(Json(journey))
}

#[utoipa::path(
    post,
    path = "/api/journeys/{id}/test",
    params(("id" = Uuid, Path, description = "Journey ID")),
    responses(
        (status = 200, description = "Test message sent", body = JourneyTestResponse),
        (status = 404, description = "Journey not found")
    ),
    tag = "Journeys"
)]
#[instrument(skip(state))]
pub async fn test_journey(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JourneyTestResponse>, AppError> {
    let result = JourneyService::send_test(&state, id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/journeys/{id}/activate",
    params(("id" = Uuid, Path, description = "Journey ID")),
    responses(
        (status = 200, description = "Journey activated", body = Journey),
        (status = 404, description = "Journey not found")
    ),
    tag = "Journeys"
)]
#[instrument(skip(state))]
pub async fn activate_journey(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Journey>, AppError> {
    let journey = JourneyService::activate(&state, id).await?;
    Ok(Json(journey))
}
