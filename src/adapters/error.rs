use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApplicationError::Unauthenticated(msg) => {
                warn!("Unauthenticated request: {}", msg);
                (StatusCode::UNAUTHORIZED, msg)
            }
            ApplicationError::MissingInput => {
                warn!("Request supplied no recognized content source");
                (
                    StatusCode::BAD_REQUEST,
                    "Provide HTML content in JSON body with 'html_content' field or upload an HTML file"
                        .to_string(),
                )
            }
            ApplicationError::InvalidUrl => {
                warn!("Rejected syntactically invalid URL");
                (StatusCode::BAD_REQUEST, "Invalid URL provided".to_string())
            }
            ApplicationError::FetchFailed(msg) => {
                warn!("URL fetch failed: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to fetch URL: {}", msg),
                )
            }
            ApplicationError::UnsupportedFileType => {
                warn!("Rejected upload with unsupported extension");
                (
                    StatusCode::BAD_REQUEST,
                    "Only HTML files are allowed".to_string(),
                )
            }
            ApplicationError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApplicationError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            ApplicationError::RendererUnavailable => {
                error!("Rendering requested but wkhtmltopdf is not installed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "wkhtmltopdf not found. Please ensure wkhtmltopdf is installed and accessible."
                        .to_string(),
                )
            }
            ApplicationError::RenderFailed(msg) => {
                error!("PDF generation failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("PDF generation failed: {}", msg),
                )
            }
            ApplicationError::StoreWriteFailed(msg) => {
                error!("Object store write failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApplicationError::StoreDeleteFailed(msg) => {
                error!("Object store delete failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApplicationError::MetadataWriteFailed(msg) => {
                error!("Metadata write failed and was rolled back: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApplicationError::DatabaseError(msg) => {
                error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApplicationError::InternalError(msg) => {
                error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_carries_the_route_specific_message() {
        let response = ApplicationError::NotFound("Logo not found or access denied".to_string())
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Logo not found or access denied");
    }

    #[tokio::test]
    async fn internal_failures_never_leak_details() {
        let response =
            ApplicationError::StoreWriteFailed("bucket exploded".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }
}
