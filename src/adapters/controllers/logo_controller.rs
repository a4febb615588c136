use axum::{
    extract::{Extension, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    adapters::{
        auth::AuthenticatedUser,
        dto::{
            logo_dto::{LogoDetailResponse, LogoListResponse, LogoUploadResponse},
            pdf_dto::DeleteResponse,
        },
        state::AppState,
    },
    application::error::ApplicationError,
    domain::{
        models::logo::{is_allowed_logo, NewLogoRecord, MAX_LOGO_BYTES},
        storage_key,
    },
};

pub struct LogoController;

impl LogoController {
    /// POST /logos/
    pub async fn upload(
        State(app_state): State<AppState>,
        Extension(user): Extension<AuthenticatedUser>,
        mut multipart: Multipart,
    ) -> Result<(StatusCode, Json<LogoUploadResponse>), ApplicationError> {
        let mut upload: Option<(String, String, Vec<u8>)> = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            if field.name() != Some("logo") {
                continue;
            }

            let filename = field.file_name().unwrap_or("").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let content = field
                .bytes()
                .await
                .map_err(|e| {
                    warn!("Cannot read logo bytes: {}", e);
                    ApplicationError::BadRequest("Invalid file data".to_string())
                })?
                .to_vec();

            upload = Some((filename, content_type, content));
            break;
        }

        let (filename, content_type, content) = upload.ok_or_else(|| {
            ApplicationError::BadRequest("No logo file provided".to_string())
        })?;

        if filename.is_empty() {
            return Err(ApplicationError::BadRequest("No file selected".to_string()));
        }

        if !is_allowed_logo(&filename, &content_type) {
            return Err(ApplicationError::BadRequest(
                "Invalid file type. Only images are allowed (PNG, JPG, JPEG, GIF, WebP, SVG)"
                    .to_string(),
            ));
        }

        if content.len() > MAX_LOGO_BYTES {
            return Err(ApplicationError::BadRequest(
                "File size too large. Maximum 5MB allowed".to_string(),
            ));
        }

        let file_size = content.len() as i64;
        let s3_key = storage_key::logo_key(&user.user_id, &filename);

        app_state
            .storage
            .put(&s3_key, content, &content_type)
            .await?;

        let logo_url = app_state.storage.public_url(&s3_key);

        let record = app_state
            .logo_repository
            .insert(NewLogoRecord {
                user_id: user.user_id.clone(),
                filename: filename.clone(),
                s3_key,
                logo_url: logo_url.clone(),
                file_size,
                content_type,
            })
            .await?;

        info!("Logo {} uploaded for user {}", record.id, user.user_id);

        Ok((
            StatusCode::CREATED,
            Json(LogoUploadResponse {
                success: true,
                logo_id: record.id,
                filename,
                logo_url,
                file_size,
                message: "Logo uploaded successfully".to_string(),
            }),
        ))
    }

    /// GET /logos/
    pub async fn list_logos(
        State(app_state): State<AppState>,
        Extension(user): Extension<AuthenticatedUser>,
    ) -> Result<Json<LogoListResponse>, ApplicationError> {
        let logos = app_state
            .logo_repository
            .list_by_owner(&user.user_id)
            .await?;

        Ok(Json(LogoListResponse {
            success: true,
            logos,
        }))
    }

    /// GET /logos/{logo_id}
    pub async fn get_logo(
        State(app_state): State<AppState>,
        Extension(user): Extension<AuthenticatedUser>,
        Path(logo_id): Path<Uuid>,
    ) -> Result<Json<LogoDetailResponse>, ApplicationError> {
        let logo = app_state
            .logo_repository
            .get_by_id(logo_id, &user.user_id)
            .await?;

        Ok(Json(LogoDetailResponse {
            success: true,
            logo,
        }))
    }

    /// Blob deletion failures are logged and do not block removing the
    /// user-visible record.
    /// DELETE /logos/{logo_id}
    pub async fn delete_logo(
        State(app_state): State<AppState>,
        Extension(user): Extension<AuthenticatedUser>,
        Path(logo_id): Path<Uuid>,
    ) -> Result<Json<DeleteResponse>, ApplicationError> {
        let record = app_state
            .logo_repository
            .get_by_id(logo_id, &user.user_id)
            .await?;

        if let Err(e) = app_state.storage.delete(&record.s3_key).await {
            warn!(
                "Failed to delete logo blob {}: {:?}; continuing with metadata removal",
                record.s3_key, e
            );
        }

        let rows = app_state
            .logo_repository
            .delete(logo_id, &user.user_id)
            .await?;
        if rows == 0 {
            return Err(ApplicationError::NotFound(
                "Logo not found or access denied".to_string(),
            ));
        }

        info!("Logo {} deleted for user {}", logo_id, user.user_id);

        Ok(Json(DeleteResponse {
            success: true,
            message: "Logo deleted successfully".to_string(),
        }))
    }
}
