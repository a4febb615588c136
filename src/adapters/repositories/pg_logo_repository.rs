use async_trait::async_trait;
use chrono::Utc;
use sqlx::query_as;
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, repositories::logo_repository::LogoRepository},
    domain::models::logo::{LogoRecord, NewLogoRecord},
};

pub struct PgLogoRepository {
    pool: sqlx::PgPool,
}

impl PgLogoRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogoRepository for PgLogoRepository {
    async fn insert(&self, record: NewLogoRecord) -> Result<LogoRecord, ApplicationError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::MetadataWriteFailed(e.to_string()))?;

        let query = r#"
            INSERT INTO user_logos (
                user_id, filename, s3_key, logo_url, file_size, content_type, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
        "#;

        let inserted = query_as::<_, LogoRecord>(query)
            .bind(&record.user_id)
            .bind(&record.filename)
            .bind(&record.s3_key)
            .bind(&record.logo_url)
            .bind(record.file_size)
            .bind(&record.content_type)
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

    async fn get_by_id(&self, id: Uuid, owner_id: &str) -> Result<LogoRecord, ApplicationError> {
        let query = "SELECT * FROM user_logos WHERE id = $1 AND user_id = $2";

        query_as::<_, LogoRecord>(query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?
            .ok_or_else(|| {
                ApplicationError::NotFound("Logo not found or access denied".to_string())
            })
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<LogoRecord>, ApplicationError> {
        let query = "SELECT * FROM user_logos WHERE user_id = $1 ORDER BY created_at DESC";

        query_as::<_, LogoRecord>(query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<u64, ApplicationError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::MetadataWriteFailed(e.to_string()))?;

        let deleted = sqlx::query("DELETE FROM user_logos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
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
