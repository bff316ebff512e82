//! tsa-ui library - Treasury Solutions Agent demo server
//!
//! Serves the embedded single-page UI and the demo API behind it. All
//! data comes from fixtures (or an optional configured backend); the
//! only live state is the analysis progress run for the parsing stage.

use axum::Router;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tower_http::trace::TraceLayer;
use tsa_common::events::TreasuryEvent;

pub mod analysis;
pub mod api;
pub mod fixtures;
pub mod models;
pub mod service;

use analysis::AnalysisRun;
use service::TreasuryService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Event broadcaster for SSE clients
    pub events: broadcast::Sender<TreasuryEvent>,
    /// The at-most-one live analysis run
    pub analysis: Arc<Mutex<Option<AnalysisRun>>>,
    /// Fixture/backend data boundary
    pub service: TreasuryService,
}

impl AppState {
    pub fn new(service: TreasuryService) -> Self {
        let (events, _) = broadcast::channel(100);
        Self {
            events,
            analysis: Arc::new(Mutex::new(None)),
            service,
        }
    }

    /// Subscribe to the event stream
    pub fn subscribe_events(&self) -> broadcast::Receiver<TreasuryEvent> {
        self.events.subscribe()
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/api/workflow/position", get(api::workflow::get_position))
        .route("/api/upload", post(api::upload::upload_statement))
        .route("/api/connect-bank", post(api::upload::connect_bank))
        .route(
            "/api/bank-connections/:id",
            get(api::upload::get_bank_connections).delete(api::upload::disconnect_bank),
        )
        .route(
            "/api/bank-connections/:id/sync",
            post(api::upload::sync_bank_data),
        )
        .route(
            "/api/parsing-status/:upload_id",
            get(api::analysis::get_parsing_status),
        )
        .route(
            "/api/parsed-data/:upload_id",
            get(api::analysis::get_parsed_data),
        )
        .route("/api/analysis/start", post(api::analysis::start_analysis))
        .route("/api/analysis/status", get(api::analysis::get_analysis_status))
        .route("/api/analysis/cancel", post(api::analysis::cancel_analysis))
        .route("/api/dashboard/:client_id", get(api::dashboard::get_dashboard))
        .route(
            "/api/transactions/:client_id",
            get(api::dashboard::get_transactions),
        )
        .route(
            "/api/recommendations/:client_id",
            get(api::recommendations::get_recommendations),
        )
        .route(
            "/api/recommendations/approve",
            post(api::recommendations::approve_recommendations),
        )
        .route("/api/products", get(api::recommendations::get_products))
        .route("/api/reports/generate", post(api::reports::generate_report))
        .route("/api/reports/share", post(api::reports::share_report))
        .route("/api/reports/:report_id/data", get(api::reports::get_report_data))
        .route("/api/reports/:report_id", get(api::reports::download_report))
        .route("/api/events", get(api::sse::event_stream));

    let pages = Router::new()
        .route("/", get(api::ui::serve_index))
        .route("/upload", get(api::ui::serve_index))
        .route("/parsing", get(api::ui::serve_index))
        .route("/dashboard", get(api::ui::serve_index))
        .route("/recommendations", get(api::ui::serve_index))
        .route("/reports", get(api::ui::serve_index))
        .route("/static/app.js", get(api::ui::serve_app_js))
        .merge(api::health::health_routes());

    Router::new()
        .merge(api)
        .merge(pages)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
