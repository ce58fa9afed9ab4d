use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use choptop::router::init_router;
use choptop::state::init_app_state;
use choptop_config::ServerConfig;
use choptop_observability::{init_console_logging, init_metrics, metrics_app};

#[derive(Parser)]
#[command(name = "choptop")]
#[command(about = "Choptop admin API server", long_about = None)]
struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Port for the Prometheus endpoint (overrides METRICS_PORT)
    #[arg(long)]
    metrics_port: Option<u16>,

    /// Start without the default Admin scopes
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_console_logging();

    let cli = Cli::parse();
    let mut server = ServerConfig::from_env();
    if let Some(host) = cli.host {
        server.host = host;
    }
    if let Some(port) = cli.port {
        server.port = port;
    }
    if let Some(metrics_port) = cli.metrics_port {
        server.metrics_port = metrics_port;
    }
    if cli.no_seed {
        server.seed_default_scopes = false;
    }

    if let Some(handle) = init_metrics() {
        let address = server.metrics_bind_address();
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind metrics listener on {address}"))?;
        info!(address = %address, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                tracing::error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let state = init_app_state(&server);
    let app = init_router(state);

    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{address}/swagger-ui");
    info!("Scalar UI available at http://{address}/scalar");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
