use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_analytics, record_event};

pub fn init_analytics_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_analytics))
        .route("/events", post(record_event))
}
