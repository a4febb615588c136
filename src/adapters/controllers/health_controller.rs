use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::{adapters::state::AppState, domain::pdf_options::PdfOptions};

const TEST_DOCUMENT: &str = "<html><body><h1>Test</h1></body></html>";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct HealthController;

impl HealthController {
    /// Verifies the renderer is present and can actually produce a PDF.
    /// GET /pdf/health
    pub async fn health_check(
        State(app_state): State<AppState>,
    ) -> (StatusCode, Json<HealthResponse>) {
        info!("Health check requested");

        if !app_state.renderer.available() {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(unhealthy("wkhtmltopdf executable not found".to_string())),
            );
        }

        match app_state
            .renderer
            .render(TEST_DOCUMENT, &PdfOptions::default())
            .await
        {
            Ok(_) => (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                    service: Some("HTML to PDF Converter".to_string()),
                    message: Some(
                        "Service is running and PDF generation is working".to_string(),
                    ),
                    error: None,
                }),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(unhealthy(e.to_string())),
            ),
        }
    }
}

fn unhealthy(error: String) -> HealthResponse {
    HealthResponse {
        status: "unhealthy".to_string(),
        service: None,
        message: None,
        error: Some(error),
    }
}
