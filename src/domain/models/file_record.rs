use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::source::SourceKind;

#[derive(Debug, Clone, Copy)]
pub enum ArtifactKind {
    Pdf,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
        }
    }
}

/// A generated artifact persisted for a user. A record exists only after the
/// corresponding blob was written under `s3_key`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FileRecord {
    pub id: Uuid,
    pub user_id: String,
    pub filename: String,
    pub s3_key: String,
    pub artifact_kind: String,
    pub source_kind: String,
    pub source_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub user_id: String,
    pub filename: String,
    pub s3_key: String,
    pub source_kind: SourceKind,
    pub source_url: String,
}
