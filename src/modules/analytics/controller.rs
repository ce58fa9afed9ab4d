use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use choptop_core::AppError;
use choptop_models::{AnalyticsEvent, AnalyticsSnapshot};

use crate::modules::analytics::service::AnalyticsService;
use crate::state::AppState;
use crate::validator::JsonBody;

#[utoipa::path(
    get,
    path = "/api/analytics",
    responses(
        (status = 200, description = "Current analytics counters", body = AnalyticsSnapshot)
    ),
    tag = "Analytics"
)]
#[instrument(skip(state))]
pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsSnapshot> {
    Json(AnalyticsService::snapshot(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/analytics/events",
    request_body = AnalyticsEvent,
    responses(
        (status = 202, description = "Event recorded", body = AnalyticsSnapshot),
        (status = 400, description = "Unknown event type or malformed body")
    ),
    tag = "Analytics"
)]
#[instrument(skip(state))]
pub async fn record_event(
    State(state): State<AppState>,
    JsonBody(event): JsonBody<AnalyticsEvent>,
) -> Result<(StatusCode, Json<AnalyticsSnapshot>), AppError> {
    let snapshot = AnalyticsService::record(&state, event).await;
    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}
