use async_trait::async_trait;
use chrono::Utc;
use sqlx::query_as;
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, repositories::file_repository::FileRepository},
    domain::models::file_record::{ArtifactKind, FileRecord, NewFileRecord},
};

pub struct PgFileRepository {
    pool: sqlx::PgPool,
}

impl PgFileRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn insert(&self, record: NewFileRecord) -> Result<FileRecord, ApplicationError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::MetadataWriteFailed(e.to_string()))?;

        let query = r#"
            INSERT INTO generated_files (
                user_id, filename, s3_key, artifact_kind, source_kind, source_url, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
        "#;

        let inserted = query_as::<_, FileRecord>(query)
            .bind(&record.user_id)
            .bind(&record.filename)
            .bind(&record.s3_key)
            .bind(ArtifactKind::Pdf.as_str())
            .bind(record.source_kind.as_str())
            .bind(&record.source_url)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await;

        match inserted {
            Ok(created) => {
                tx.commit()
                    .await
                    .map_err(|e| ApplicationError::MetadataWriteFailed(e.to_string()))?;
                Ok(created)
            }
            Err(e) => {
                let _ = tx.rollback().await;
                Err(ApplicationError::MetadataWriteFailed(e.to_string()))
            }
        }
    }

    async fn get_by_id(&self, id: Uuid) -> Result<FileRecord, ApplicationError> {
        let query = "SELECT * FROM generated_files WHERE id = $1";

        query_as::<_, FileRecord>(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?
            .ok_or_else(|| ApplicationError::NotFound("Resource not found".to_string()))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<FileRecord>, ApplicationError> {
        let query = "SELECT * FROM generated_files WHERE user_id = $1 ORDER BY created_at DESC";

        query_as::<_, FileRecord>(query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, ApplicationError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::MetadataWriteFailed(e.to_string()))?;

        let deleted = sqlx::query("DELETE FROM generated_files WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match deleted {
            Ok(result) => {
                tx.commit()
                    .await
                    .map_err(|e| ApplicationError::MetadataWriteFailed(e.to_string()))?;
                Ok(result.rows_affected())
            }
            Err(e) => {
                let _ = tx.rollback().await;
                Err(ApplicationError::MetadataWriteFailed(e.to_string()))
            }
        }
    }
}
