use axum::{
    body::Body,
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    adapters::{
        dto::pdf_dto::{
            ConvertRequest, DeleteResponse, FileListResponse, GenerateRequest, PreviewRequest,
        },
        state::AppState,
    },
    application::error::ApplicationError,
    domain::{
        html,
        models::{
            file_record::NewFileRecord,
            source::HtmlSource,
        },
        pdf_options::{PdfOptionOverrides, PdfOptions},
        storage_key,
    },
};

pub struct PdfController;

impl PdfController {
    /// Stateless conversion: accepts a JSON body or an uploaded HTML file
    /// and returns the PDF directly, nothing persisted.
    /// POST /pdf/convert
    pub async fn convert(
        State(app_state): State<AppState>,
        request: Request,
    ) -> Result<Response, ApplicationError> {
        let (source, overrides) = extract_source(request).await?;
        let source = frame_inline(source);

        let resolved = app_state.input_resolver.resolve(source).await?;
        let cleaned = html::tidy(&resolved.html);
        let options = PdfOptions::merged(overrides);

        let pdf = app_state.renderer.render(&cleaned, &options).await?;

        info!("Converted {} input to {}", resolved.kind.as_str(), resolved.filename);

        Ok(pdf_response(pdf, &resolved.filename, false, None))
    }

    /// Create-and-persist: renders, writes the blob, then records the
    /// artifact for the user. The blob write happens first; a record is
    /// only inserted for a blob that exists.
    /// POST /pdf/generate
    pub async fn generate(
        State(app_state): State<AppState>,
        request: Request,
    ) -> Result<Response, ApplicationError> {
        let body: GenerateRequest = json_body(request).await?;

        let user_id = body
            .user_id
            .ok_or_else(|| ApplicationError::BadRequest("user_id is required".to_string()))?;

        let source = HtmlSource::from_json_fields(body.html_content, body.url, body.filename)
            .ok_or(ApplicationError::MissingInput)?;
        let source = frame_inline(source);

        let resolved = app_state.input_resolver.resolve(source).await?;
        let cleaned = html::tidy(&resolved.html);
        let options = PdfOptions::merged(body.options);

        let pdf = app_state.renderer.render(&cleaned, &options).await?;

        let s3_key = storage_key::artifact_key(&user_id, &resolved.filename);
        app_state
            .storage
            .put(&s3_key, pdf.clone(), "application/pdf")
            .await?;

        // A failed insert leaves the blob behind; no compensation is
        // attempted and the request surfaces the database error.
        let record = app_state
            .file_repository
            .insert(NewFileRecord {
                user_id: user_id.clone(),
                filename: resolved.filename.clone(),
                s3_key,
                source_kind: resolved.kind,
                source_url: resolved.source_url,
            })
            .await?;

        info!("Generated file {} for user {}", record.id, user_id);

        Ok(pdf_response(pdf, &record.filename, false, Some(record.id)))
    }

    /// Renders inline content for inline display, nothing persisted.
    /// POST /pdf/preview
    pub async fn preview(
        State(app_state): State<AppState>,
        request: Request,
    ) -> Result<Response, ApplicationError> {
        let body: PreviewRequest = json_body(request).await?;

        let html_content = body
            .html_content
            .ok_or_else(|| ApplicationError::BadRequest("html_content is required".to_string()))?;

        let cleaned = html::tidy(&html_content);
        let options = PdfOptions::merged(body.options);

        let pdf = app_state.renderer.render(&cleaned, &options).await?;

        Ok(pdf_response(pdf, "preview.pdf", true, None))
    }

    /// GET /pdf/list/{user_id}
    pub async fn list_user_files(
        State(app_state): State<AppState>,
        Path(user_id): Path<String>,
    ) -> Result<Json<FileListResponse>, ApplicationError> {
        let pdfs = app_state.file_repository.list_by_owner(&user_id).await?;

        Ok(Json(FileListResponse {
            success: true,
            count: pdfs.len(),
            pdfs,
        }))
    }

    /// GET /pdf/download/{file_id}
    pub async fn download(
        State(app_state): State<AppState>,
        Path(file_id): Path<Uuid>,
    ) -> Result<Response, ApplicationError> {
        let record = app_state.file_repository.get_by_id(file_id).await?;
        let bytes = app_state.storage.download(&record.s3_key).await?;

        Ok(pdf_response(bytes, &record.filename, false, None))
    }

    /// Blob first, then record. A blob deletion failure aborts and keeps
    /// the record so the two stores never disagree silently.
    /// DELETE /pdf/delete/{file_id}
    pub async fn delete(
        State(app_state): State<AppState>,
        Path(file_id): Path<Uuid>,
    ) -> Result<Json<DeleteResponse>, ApplicationError> {
        let record = app_state.file_repository.get_by_id(file_id).await?;

        app_state.storage.delete(&record.s3_key).await?;

        let rows = app_state.file_repository.delete(file_id).await?;
        if rows == 0 {
            return Err(ApplicationError::NotFound("Resource not found".to_string()));
        }

        info!("Deleted file {} for user {}", file_id, record.user_id);

        Ok(Json(DeleteResponse {
            success: true,
            message: "File deleted successfully".to_string(),
        }))
    }
}

/// Deserializes a JSON request body, collapsing every rejection (missing or
/// wrong content type, syntax error, type mismatch) into the same 400 so
/// malformed input never surfaces as a framework default response.
async fn json_body<T: serde::de::DeserializeOwned>(
    request: Request,
) -> Result<T, ApplicationError> {
    let Json(body) = Json::<T>::from_request(request, &()).await.map_err(|e| {
        warn!("Invalid JSON body: {}", e);
        ApplicationError::BadRequest("Invalid request format".to_string())
    })?;

    Ok(body)
}

/// Pulls the content source out of either a JSON body or a multipart
/// upload, using the request content type to decide.
async fn extract_source(
    request: Request,
) -> Result<(HtmlSource, PdfOptionOverrides), ApplicationError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("application/json") {
        let body: ConvertRequest = json_body(request).await?;

        let source = HtmlSource::from_json_fields(body.html_content, body.url, body.filename)
            .ok_or(ApplicationError::MissingInput)?;

        return Ok((source, body.options));
    }

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &()).await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })?;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart field: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            if field.name() != Some("file") {
                continue;
            }

            let filename = field.file_name().unwrap_or("").to_string();
            if filename.is_empty() {
                return Err(ApplicationError::BadRequest("No file selected".to_string()));
            }

            let content = field
                .bytes()
                .await
                .map_err(|e| {
                    warn!("Cannot read file bytes: {}", e);
                    ApplicationError::BadRequest("Invalid file data".to_string())
                })?
                .to_vec();

            return Ok((
                HtmlSource::Upload { filename, content },
                PdfOptionOverrides::default(),
            ));
        }

        return Err(ApplicationError::MissingInput);
    }

    Err(ApplicationError::MissingInput)
}

/// Inline content gets the generated document frame; fetched pages and
/// uploads are already complete documents.
fn frame_inline(source: HtmlSource) -> HtmlSource {
    match source {
        HtmlSource::Inline { html, filename } => HtmlSource::Inline {
            html: html::framed_document(&html),
            filename,
        },
        other => other,
    }
}

/// Control characters are illegal in a header value and a quote would end
/// the quoted-string early; the filename is caller-supplied, so both are
/// stripped before it is embedded in `Content-Disposition`.
fn header_safe_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();

    if cleaned.is_empty() {
        "document.pdf".to_string()
    } else {
        cleaned
    }
}

fn pdf_response(bytes: Vec<u8>, filename: &str, inline: bool, file_id: Option<Uuid>) -> Response {
    let filename = header_safe_filename(filename);
    let disposition = if inline {
        format!("inline; filename=\"{}\"", filename)
    } else {
        format!("attachment; filename=\"{}\"", filename)
    };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(header::CONTENT_DISPOSITION, disposition);

    if let Some(id) = file_id {
        builder = builder.header("X-File-Id", id.to_string());
    }

    builder.body(Body::from(bytes)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content_type: &str, body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_json_maps_to_a_bad_request() {
        let result = json_body::<GenerateRequest>(post("application/json", "{not json")).await;
        assert!(matches!(result, Err(ApplicationError::BadRequest(_))));
    }

    #[tokio::test]
    async fn wrong_content_type_maps_to_a_bad_request() {
        let result = json_body::<PreviewRequest>(post("text/plain", "{}")).await;
        assert!(matches!(result, Err(ApplicationError::BadRequest(_))));
    }

    #[tokio::test]
    async fn type_mismatch_maps_to_a_bad_request() {
        let result =
            json_body::<PreviewRequest>(post("application/json", r#"{"html_content": 123}"#))
                .await;
        assert!(matches!(result, Err(ApplicationError::BadRequest(_))));
    }

    #[tokio::test]
    async fn well_formed_json_deserializes() {
        let body: PreviewRequest =
            json_body(post("application/json", r#"{"html_content": "<p>hi</p>"}"#))
                .await
                .unwrap();
        assert_eq!(body.html_content.as_deref(), Some("<p>hi</p>"));
    }

    #[test]
    fn control_characters_are_stripped_from_the_disposition_filename() {
        let response = pdf_response(b"%PDF-1.4".to_vec(), "evil\nname.pdf", false, None);

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"evilname.pdf\"");
    }

    #[test]
    fn quotes_cannot_terminate_the_disposition_early() {
        let response = pdf_response(b"%PDF-1.4".to_vec(), "a\"b.pdf", false, None);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"ab.pdf\"");
    }

    #[test]
    fn an_all_control_filename_falls_back_to_the_default() {
        let response = pdf_response(b"%PDF-1.4".to_vec(), "\u{1}\u{7f}", false, None);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"document.pdf\"");
    }
}
