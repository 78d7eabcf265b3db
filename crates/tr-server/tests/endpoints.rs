use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use tr_report::ReportTheme;
use tr_server::{build_router, AppState};
use tr_source::SimulatedSource;

fn test_state() -> AppState {
    AppState {
        source: Arc::new(SimulatedSource::new()),
        theme: ReportTheme::standard(),
    }
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = build_router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn trend_data_returns_the_recordset() {
    let app = build_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/trend-data")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 100);
    // Column-named fields, mirroring the raw recordset.
    assert!(rows[0].get("Time_Stamp").is_some());
    assert!(rows[0].get("rTotalQ").is_some());
}

#[tokio::test]
async fn generate_report_returns_a_stub_pdf_echoing_the_request() {
    let app = build_router(test_state());
    let payload = serde_json::json!({
        "startDate": "2025-01-01",
        "endDate": "2025-01-02",
        "chartTypes": ["line", "scatter"]
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("report.pdf"));

    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("2025-01-01"));
    assert!(text.contains("2025-01-02"));
    assert!(text.contains("- line"));
    assert!(text.contains("- scatter"));
}

#[tokio::test]
async fn generate_report_accepts_an_empty_body_object() {
    let app = build_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.starts_with(b"%PDF"));
}

#[tokio::test]
async fn download_html_is_idempotent() {
    let app = build_router(test_state());
    let mut bodies = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/download-html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("chart-options.html"));
        bodies.push(body_bytes(response).await);
    }
    assert_eq!(bodies[0], bodies[1]);
}
