use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_rows;

pub fn init_layout_router() -> Router<AppState> {
    Router::new().route("/rows", get(get_rows))
}
