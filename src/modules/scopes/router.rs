use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    get_catalog, get_effective_scope, get_role_summaries, get_scope_rows, set_all_scopes,
    update_scopes,
};

pub fn init_scopes_router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(get_catalog))
        .route("/roles", get(get_role_summaries))
        .route("/{role}/{city}", get(get_effective_scope).put(update_scopes))
        .route("/{role}/{city}/all", post(set_all_scopes))
        .route("/{role}/{city}/rows", get(get_scope_rows))
}
