use async_trait::async_trait;
use uuid::Uuid;

use super::PgStore;
use crate::db::{DocumentRepository, StoreError};
use crate::models::{Document, NewDocument};

#[async_trait]
impl DocumentRepository for PgStore {
    async fn create(&self, document: NewDocument) -> Result<Document, StoreError> {
        Ok(sqlx::query_as::<_, Document>(
            "INSERT INTO documents (id, user_id, document_type, filename, file_path)
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(document.user_id)
        .bind(&document.document_type)
        .bind(&document.filename)
        .bind(&document.file_path)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Document>, StoreError> {
        Ok(sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE user_id = $1 ORDER BY uploaded_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
