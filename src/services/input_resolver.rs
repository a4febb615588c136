use std::time::Duration;

use reqwest::Client;
use tracing::warn;
use uuid::Uuid;

use crate::{
    application::error::ApplicationError,
    domain::{
        models::source::{HtmlSource, ResolvedInput, SourceKind},
        validate,
    },
};

pub const DEFAULT_FILENAME: &str = "document.pdf";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Normalizes the supplied content source into HTML text plus a target
/// filename. URL fetches are bounded by a 30 second timeout; syntactic URL
/// validation happens before any network call.
pub struct InputResolver {
    client: Client,
}

impl InputResolver {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to construct HTTP client");

        Self { client }
    }

    pub async fn resolve(&self, source: HtmlSource) -> Result<ResolvedInput, ApplicationError> {
        match source {
            HtmlSource::Inline { html, filename } => Ok(ResolvedInput {
                html,
                filename: filename.unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
                kind: SourceKind::Inline,
                source_url: String::new(),
            }),
            HtmlSource::Url { url } => {
                if !validate::is_valid_url(&url) {
                    return Err(ApplicationError::InvalidUrl);
                }

                let response = self.client.get(&url).send().await.map_err(|e| {
                    warn!("Fetching {} failed: {}", url, e);
                    ApplicationError::FetchFailed(e.to_string())
                })?;

                if !response.status().is_success() {
                    return Err(ApplicationError::FetchFailed(format!(
                        "upstream returned status {}",
                        response.status()
                    )));
                }

                let html = response
                    .text()
                    .await
                    .map_err(|e| ApplicationError::FetchFailed(e.to_string()))?;

                Ok(ResolvedInput {
                    html,
                    filename: fetched_filename(),
                    kind: SourceKind::Url,
                    source_url: url,
                })
            }
            HtmlSource::Upload { filename, content } => {
                if !validate::has_allowed_extension(&filename, HTML_EXTENSIONS) {
                    return Err(ApplicationError::UnsupportedFileType);
                }

                let html = String::from_utf8(content).map_err(|_| {
                    ApplicationError::BadRequest("Uploaded file is not valid UTF-8 text".to_string())
                })?;

                Ok(ResolvedInput {
                    html,
                    filename: pdf_filename(&filename),
                    kind: SourceKind::Upload,
                    source_url: String::new(),
                })
            }
        }
    }
}

/// `webpage-<short random suffix>.pdf` for fetched pages.
fn fetched_filename() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("webpage-{}.pdf", &suffix[..8])
}

/// Replaces the upload's extension with `.pdf`.
fn pdf_filename(upload_name: &str) -> String {
    let stem = upload_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(upload_name);
    format!("{}.pdf", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn inline_defaults_the_filename() {
        let resolver = InputResolver::new();
        let resolved = resolver
            .resolve(HtmlSource::Inline {
                html: "<p>hi</p>".to_string(),
                filename: None,
            })
            .await
            .unwrap();

        assert_eq!(resolved.filename, "document.pdf");
        assert_eq!(resolved.kind, SourceKind::Inline);
        assert_eq!(resolved.html, "<p>hi</p>");
        assert!(resolved.source_url.is_empty());
    }

    #[tokio::test]
    async fn inline_keeps_a_supplied_filename() {
        let resolver = InputResolver::new();
        let resolved = resolver
            .resolve(HtmlSource::Inline {
                html: "<p>hi</p>".to_string(),
                filename: Some("report.pdf".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(resolved.filename, "report.pdf");
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_any_fetch() {
        let resolver = InputResolver::new();
        let result = resolver
            .resolve(HtmlSource::Url {
                url: "not-a-url".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::InvalidUrl)));
    }

    #[tokio::test]
    async fn upload_extension_is_replaced_with_pdf() {
        let resolver = InputResolver::new();
        let resolved = resolver
            .resolve(HtmlSource::Upload {
                filename: "invoice.html".to_string(),
                content: b"<p>x</p>".to_vec(),
            })
            .await
            .unwrap();

        assert_eq!(resolved.filename, "invoice.pdf");
        assert_eq!(resolved.kind, SourceKind::Upload);
    }

    #[tokio::test]
    async fn non_html_upload_is_rejected() {
        let resolver = InputResolver::new();
        let result = resolver
            .resolve(HtmlSource::Upload {
                filename: "notes.txt".to_string(),
                content: b"x".to_vec(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::UnsupportedFileType)));
    }

    #[test]
    fn fetched_filenames_are_randomly_suffixed() {
        let a = fetched_filename();
        let b = fetched_filename();

        assert!(a.starts_with("webpage-"));
        assert!(a.ends_with(".pdf"));
        assert_ne!(a, b);
    }
}
