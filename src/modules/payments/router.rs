use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_payments, get_payouts, get_summary, record_payment, schedule_payout};

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_payments).post(record_payment))
        .route("/summary", get(get_summary))
}

pub fn init_payouts_router() -> Router<AppState> {
    Router::new().route("/", get(get_payouts).post(schedule_payout))
}
