use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::types::Json;

use super::PgStore;
use crate::db::{ServiceRepository, StoreError};
use crate::models::{NewService, Service, ServiceChange};

async fn write<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    service: &Service,
) -> Result<Option<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        "UPDATE services SET name = $2, customer_id = $3, status = $4, price = $5,
             description = $6, start_date = $7, completed_date = $8,
             required_documents = $9, certificates = $10, uploaded_documents = $11
         WHERE id = $1 RETURNING *",
    )
    .bind(&service.id)
    .bind(&service.name)
    .bind(&service.customer_id)
    .bind(service.status)
    .bind(service.price)
    .bind(&service.description)
    .bind(service.start_date)
    .bind(service.completed_date)
    .bind(&service.required_documents)
    .bind(&service.certificates)
    .bind(Json(&service.uploaded_documents))
    .fetch_optional(executor)
    .await
}

#[async_trait]
impl ServiceRepository for PgStore {
    async fn list(&self, customer_id: Option<&str>) -> Result<Vec<Service>, StoreError> {
        Ok(sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE ($1::text IS NULL OR customer_id = $1) ORDER BY id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find(&self, id: &str) -> Result<Option<Service>, StoreError> {
        Ok(sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create(&self, service: NewService) -> Result<Service, StoreError> {
        Ok(sqlx::query_as::<_, Service>(
            "INSERT INTO services (name, customer_id, price, description, start_date,
                 required_documents, certificates)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&service.name)
        .bind(&service.customer_id)
        .bind(service.price)
        .bind(&service.description)
        .bind(service.start_date)
        .bind(&service.required_documents)
        .bind(&service.certificates)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn modify(
        &self,
        id: &str,
        change: ServiceChange,
        today: NaiveDate,
    ) -> Result<Option<Service>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let current =
            sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(mut service) = current else {
            return Ok(None);
        };
        service.apply(change, today)?;
        let saved = write(&mut *tx, &service).await?;
        tx.commit().await?;
        Ok(saved)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
