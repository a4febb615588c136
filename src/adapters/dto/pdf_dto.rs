use serde::{Deserialize, Serialize};

use crate::domain::{models::file_record::FileRecord, pdf_options::PdfOptionOverrides};

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub html_content: Option<String>,
    pub url: Option<String>,
    pub filename: Option<String>,
    #[serde(default)]
    pub options: PdfOptionOverrides,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub user_id: Option<String>,
    pub html_content: Option<String>,
    pub url: Option<String>,
    pub filename: Option<String>,
    #[serde(default)]
    pub options: PdfOptionOverrides,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub html_content: Option<String>,
    #[serde(default)]
    pub options: PdfOptionOverrides,
}

#[derive(Debug, Serialize)]
pub struct FileListResponse {
    pub success: bool,
    pub count: usize,
    pub pdfs: Vec<FileRecord>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
