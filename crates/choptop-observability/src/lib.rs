//! Choptop Observability Module
//!
//! Provides:
//! - Console logging setup (always available)
//! - HTTP request/response logging middleware (always available)
//! - Prometheus metrics collection and business counters
//!
//! Metrics can be disabled at compile time via the `observability` feature
//! flag. At runtime they are controlled by the `METRICS_ENABLED` environment
//! variable.
//!
//! # Examples
//!
//! ```no_run
//! use choptop_observability::{init_console_logging, init_metrics};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_console_logging();
//!     let _handle = init_metrics();
//!     // ... application code ...
//! }
//! ```

pub mod basic_logging;
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_console_logging;
pub use logging::logging_middleware;

// Re-export PrometheusHandle type when observability is enabled
#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use self::metrics::{
    init_metrics, is_metrics_enabled, metrics_app, metrics_middleware, track_analytics_event,
    track_content_transition, track_scope_change,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Stand-in for the Prometheus handle when metrics are compiled out
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    /// No-op metrics check when feature disabled
    pub fn is_metrics_enabled() -> bool {
        false
    }

    /// No-op metrics middleware when feature disabled
    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// No-op metrics initialization when feature disabled
    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(_handle: PrometheusHandle) -> Router {
        Router::new()
    }

    // No-op tracking functions
    pub fn track_analytics_event(_event: &'static str) {}
    pub fn track_scope_change(_role: &'static str, _city: &'static str) {}
    pub fn track_content_transition(_status: &'static str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
