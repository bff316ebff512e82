//! tsa-ui - Treasury Solutions Agent demo server
//!
//! Walks a relationship manager through a linear workflow: upload bank
//! statements, simulated analysis, dashboard, product recommendations,
//! and report export. All data is canned; the server exists to drive
//! the demo UI and its workflow sequencing.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tsa_common::config;
use tsa_ui::service::TreasuryService;
use tsa_ui::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "tsa-ui", about = "Treasury Solutions Agent demo server")]
struct Cli {
    /// Listen port (overrides TSA_PORT and the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Backend base URL; fixtures are served when absent
    /// (overrides TSA_BACKEND_URL and the config file)
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification immediately after tracing init
    info!(
        "Starting Treasury Solutions Agent (tsa-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let file_config = config::load_toml_config();
    let port = config::resolve_port(cli.port, &file_config);
    let backend_url = config::resolve_backend_url(cli.backend_url.as_deref(), &file_config);

    let service = TreasuryService::new(backend_url);
    if service.has_backend() {
        info!("Backend configured; fixture fallback on failure");
    } else {
        info!("No backend configured; serving fixture dataset");
    }

    let state = AppState::new(service);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("tsa-ui listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
