use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Both the filename extension and the declared content type must belong to
/// the allowed image sets.
pub fn is_allowed_logo(filename: &str, content_type: &str) -> bool {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    ALLOWED_EXTENSIONS.contains(&extension.as_str()) && ALLOWED_MIME_TYPES.contains(&content_type)
}

/// An uploaded image associated with a user. Reads and deletes are always
/// scoped to the owning user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LogoRecord {
    pub id: Uuid,
    pub user_id: String,
    pub filename: String,
    pub s3_key: String,
    pub logo_url: String,
    pub file_size: i64,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLogoRecord {
    pub user_id: String,
    pub filename: String,
    pub s3_key: String,
    pub logo_url: String,
    pub file_size: i64,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_image_types() {
        assert!(is_allowed_logo("logo.png", "image/png"));
        assert!(is_allowed_logo("logo.JPG", "image/jpeg"));
        assert!(is_allowed_logo("brand.svg", "image/svg+xml"));
    }

    #[test]
    fn rejects_extension_mime_mismatch() {
        assert!(!is_allowed_logo("logo.png", "text/html"));
        assert!(!is_allowed_logo("logo.exe", "image/png"));
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(!is_allowed_logo("logo", "image/png"));
    }
}
