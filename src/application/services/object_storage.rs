use async_trait::async_trait;

use crate::application::error::ApplicationError;

/// Key-addressed blob storage. The store has no awareness of metadata
/// records; keeping the two consistent is the caller's responsibility.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Overwrite semantics: putting an existing key replaces its content.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApplicationError>;
    async fn download(&self, key: &str) -> Result<Vec<u8>, ApplicationError>;
    async fn delete(&self, key: &str) -> Result<(), ApplicationError>;
    fn public_url(&self, key: &str) -> String;
}
