use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::logo::LogoRecord;

#[derive(Debug, Serialize)]
pub struct LogoUploadResponse {
    pub success: bool,
    pub logo_id: Uuid,
    pub filename: String,
    pub logo_url: String,
    pub file_size: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LogoListResponse {
    pub success: bool,
    pub logos: Vec<LogoRecord>,
}

#[derive(Debug, Serialize)]
pub struct LogoDetailResponse {
    pub success: bool,
    pub logo: LogoRecord,
}
