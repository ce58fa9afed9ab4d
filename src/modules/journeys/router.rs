use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    activate_journey, create_journey, get_journey, get_journeys, test_journey, update_journey,
};

pub fn init_journeys_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_journeys).post(create_journey))
        .route("/{id}", get(get_journey).put(update_journey))
        .route("/{id}/test", post(test_journey))
        .route("/{id}/activate", post(activate_journey))
}
