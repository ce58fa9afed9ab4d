use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging for the service.
///
/// # Configuration
///
/// - **Log Level**: `RUST_LOG` wins when set; otherwise `LOG_LEVEL` (default: "info")
///   applies to the service with noisy dependencies filtered to warn
/// - **Format**: Compact with targets, files, and line numbers; `LOG_FORMAT=json`
///   switches to one JSON object per line
pub fn init_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "choptop={level},choptop_access={level},tower_http=warn,hyper=warn,axum::rejection=trace",
            level = log_level
        ))
    });

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let console_layer = if json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true)
            .with_filter(env_filter)
            .boxed()
    };

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
