use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use choptop_observability::{logging_middleware, metrics_middleware};

use crate::docs::ApiDoc;
use crate::modules::analytics::router::init_analytics_router;
use crate::modules::cms::router::init_cms_router;
use crate::modules::journeys::router::init_journeys_router;
use crate::modules::layout::router::init_layout_router;
use crate::modules::payments::router::{init_payments_router, init_payouts_router};
use crate::modules::scopes::router::init_scopes_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let cors = {
        let allowed_origins: Vec<HeaderValue> = state
            .cors_config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
    };

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/scopes", init_scopes_router())
                .nest("/layout", init_layout_router())
                .nest("/analytics", init_analytics_router())
                .nest("/cms", init_cms_router())
                .nest("/journeys", init_journeys_router())
                .nest("/payments", init_payments_router())
                .nest("/payouts", init_payouts_router()),
        )
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
