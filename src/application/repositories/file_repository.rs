use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::error::ApplicationError,
    domain::models::file_record::{FileRecord, NewFileRecord},
};

#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Inserts a record for an already-written blob. Runs in a transaction;
    /// a failure rolls back and surfaces as `MetadataWriteFailed`.
    async fn insert(&self, record: NewFileRecord) -> Result<FileRecord, ApplicationError>;
    async fn get_by_id(&self, id: Uuid) -> Result<FileRecord, ApplicationError>;
    /// Newest first.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<FileRecord>, ApplicationError>;
    /// Returns the number of rows removed; zero means the id was unknown.
    async fn delete(&self, id: Uuid) -> Result<u64, ApplicationError>;
}
