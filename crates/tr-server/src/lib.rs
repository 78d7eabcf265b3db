//! HTTP report service for trend data.
//!
//! A thin wrapper over the report pipeline: four routes, no caching, no
//! content negotiation. Each request runs the blocking pipeline inline,
//! start to finish.

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tr_config::Config;
use tr_report::ReportTheme;
use tr_source::{RowSource, SimulatedSource, SqliteSource};

/// Shared state for the report service.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RowSource>,
    pub theme: ReportTheme,
}

/// Build service state from resolved configuration.
pub fn build_state(config: &Config) -> AppState {
    let source: Arc<dyn RowSource> = if config.database.simulate {
        Arc::new(SimulatedSource::new())
    } else {
        Arc::new(SqliteSource::new(&config.database.path))
    };
    AppState {
        source,
        theme: ReportTheme::from_name(&config.report.theme),
    }
}

/// Build the service router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/trend-data", get(handlers::trend_data))
        .route("/generate-report", post(handlers::generate_report))
        .route("/download-html", get(handlers::download_html))
        .with_state(state)
}
