use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::error::ApplicationError,
    domain::models::logo::{LogoRecord, NewLogoRecord},
};

/// Reads and deletes are owner-scoped. A zero-row result is reported as
/// `NotFound` whether the id is unknown or belongs to someone else, so
/// existence never leaks across owners.
#[async_trait]
pub trait LogoRepository: Send + Sync {
    async fn insert(&self, record: NewLogoRecord) -> Result<LogoRecord, ApplicationError>;
    async fn get_by_id(&self, id: Uuid, owner_id: &str) -> Result<LogoRecord, ApplicationError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<LogoRecord>, ApplicationError>;
    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<u64, ApplicationError>;
}
