use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage write failed: {0}")]
    WriteFailed(String),

    #[error("Storage read failed: {0}")]
    ReadFailed(String),

    #[error("Storage delete failed: {0}")]
    DeleteFailed(String),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound(_) => {
                ApplicationError::NotFound("Resource not found".to_string())
            }
            StorageError::WriteFailed(msg) => ApplicationError::StoreWriteFailed(msg),
            StorageError::DeleteFailed(msg) => ApplicationError::StoreDeleteFailed(msg),
            StorageError::ReadFailed(msg) => {
                ApplicationError::InternalError(format!("Storage error: {}", msg))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rendering binary not available")]
    Unavailable,

    #[error("{0}")]
    Failed(String),
}

impl From<RenderError> for ApplicationError {
    fn from(error: RenderError) -> Self {
        match error {
            RenderError::Unavailable => ApplicationError::RendererUnavailable,
            RenderError::Failed(msg) => ApplicationError::RenderFailed(msg),
        }
    }
}
