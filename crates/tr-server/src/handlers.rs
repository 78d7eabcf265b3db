//! Route handlers.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};
use tr_common::MeasurementSet;
use tr_report::{chart_options_page, Composer};

use crate::AppState;

/// `GET /` — database connectivity probe.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.source.ping() {
        Ok(()) => Json(json!({"status": "ok", "database": "reachable"})).into_response(),
        Err(e) => {
            let body = json!({"error": "database unreachable", "details": e.to_string()});
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// `GET /api/trend-data` — the raw recordset as JSON.
pub async fn trend_data(State(state): State<AppState>) -> Json<MeasurementSet> {
    Json(state.source.fetch())
}

/// Body of `POST /generate-report`. All fields are opaque and optional;
/// nothing is validated or parsed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub chart_types: Vec<String>,
}

/// `POST /generate-report` — the request-stub document as a download.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> Response {
    // The underlying fetch is a fixed top-100 query; the submitted range
    // is echoed into the document but never filters anything.
    warn!(
        start = request.start_date.as_deref().unwrap_or("-"),
        end = request.end_date.as_deref().unwrap_or("-"),
        "date range accepted but not applied to the trend query"
    );

    let stub = Composer::new(state.theme.clone()).compose_request_stub(
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        &request.chart_types,
    );
    match stub {
        Ok(document) => attachment(document.bytes, "report.pdf", "application/pdf"),
        Err(e) => {
            error!(error = %e, "request stub composition failed");
            let body = json!({"error": e.to_string()});
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// `GET /download-html` — the chart-options page as a download,
/// regenerated fresh on every request.
pub async fn download_html() -> Response {
    match chart_options_page() {
        Ok(page) => attachment(
            page.into_bytes(),
            "chart-options.html",
            "text/html; charset=utf-8",
        ),
        Err(e) => {
            error!(error = %e, code = e.code(), "chart options page failed");
            let body = json!({"error": e.to_string()});
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

fn attachment(bytes: Vec<u8>, filename: &str, content_type: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
