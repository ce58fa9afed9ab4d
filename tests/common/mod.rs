use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use choptop::router::init_router;
use choptop::state::AppState;
use choptop_access::ScopeStore;
use choptop_config::{CorsConfig, RowsConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// App over empty stores, without the default Admin scopes.
#[allow(dead_code)]
pub fn setup_test_app() -> Router {
    init_router(test_state(ScopeStore::new()))
}

/// App with the Admin role's default scopes seeded.
#[allow(dead_code)]
pub fn setup_seeded_app() -> Router {
    init_router(test_state(ScopeStore::with_default_scopes()))
}

pub fn test_state(scopes: ScopeStore) -> AppState {
    AppState::new(scopes, RowsConfig::default(), CorsConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
