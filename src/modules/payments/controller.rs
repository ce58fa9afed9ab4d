use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use choptop_core::AppError;
use choptop_models::payments::{
    BalanceSummary, PaginatedPaymentsResponse, PaginatedPayoutsResponse, PaymentFilterParams,
    PayoutFilterParams, RecordPaymentDto, SchedulePayoutDto,
};
use choptop_models::{Payment, Payout, PayoutGroupBy};

use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    pub group_by: Option<PayoutGroupBy>,
}

#[utoipa::path(
    get,
    path = "/api/payments",
    params(
        ("q" = Option<String>, Query, description = "Search over id, type, method, status and event"),
        ("status" = Option<String>, Query, description = "succeeded, pending or failed"),
        ("method" = Option<String>, Query, description = "card, mpesa, airtel_money or mtn_momo"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<i64>, Query, description = "Items per page (1-100)"),
        ("viewport_height" = Option<f64>, Query, description = "Derive the page size from this height")
    ),
    responses(
        (status = 200, description = "Payments in recording order", body = PaginatedPaymentsResponse)
    ),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_payments(
    State(state): State<AppState>,
    Query(filters): Query<PaymentFilterParams>,
) -> Json<PaginatedPaymentsResponse> {
    Json(PaymentService::list_payments(&state, filters).await)
}

#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = RecordPaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn record_payment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RecordPaymentDto>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    let payment = PaymentService::record_payment(&state, dto).await;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    get,
    path = "/api/payments/summary",
    params(
        ("group_by" = Option<String>, Query, description = "Payout grouping for the next payout: event (default) or organizer")
    ),
    responses(
        (status = 200, description = "Balances and payment health", body = BalanceSummary)
    ),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Json<BalanceSummary> {
    let settlement = Utc::now().date_naive();
    let group_by = query.group_by.unwrap_or_default();
    Json(PaymentService::summary(&state, group_by, settlement).await)
}

#[utoipa::path(
    get,
    path = "/api/payouts",
    params(
        ("group_by" = Option<String>, Query, description = "event (default) or organizer"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<i64>, Query, description = "Items per page (1-100)"),
        ("viewport_height" = Option<f64>, Query, description = "Derive the page size from this height")
    ),
    responses(
        (status = 200, description = "Payout rows for the grouping", body = PaginatedPayoutsResponse)
    ),
    tag = "Payouts"
)]
#[instrument(skip(state))]
pub async fn get_payouts(
    State(state): State<AppState>,
    Query(filters): Query<PayoutFilterParams>,
) -> Json<PaginatedPayoutsResponse> {
    let settlement = Utc::now().date_naive();
    Json(PaymentService::list_payouts(&state, filters, settlement).await)
}

#[utoipa::path(
    post,
    path = "/api/payouts",
    request_body = SchedulePayoutDto,
    responses(
        (status = 201, description = "Payout scheduled", body = Payout),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Payouts"
)]
#[instrument(skip(state))]
pub async fn schedule_payout(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SchedulePayoutDto>,
) -> Result<(StatusCode, Json<Payout>), AppError> {
    let payout = PaymentService::schedule_payout(&state, dto).await;
    Ok((StatusCode::CREATED, Json(payout)))
}
