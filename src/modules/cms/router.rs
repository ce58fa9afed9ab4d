use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_content, get_content, get_content_item, preview_content, publish_content, save_draft,
    schedule_content, submit_for_review, update_content,
};

pub fn init_cms_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_content).post(create_content))
        .route("/{id}", get(get_content_item).patch(update_content))
        .route("/{id}/preview", get(preview_content))
        .route("/{id}/draft", post(save_draft))
        .route("/{id}/review", post(submit_for_review))
        .route("/{id}/schedule", post(schedule_content))
        .route("/{id}/publish", post(publish_content))
}
