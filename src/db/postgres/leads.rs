use async_trait::async_trait;
use chrono::NaiveDate;

use super::PgStore;
use crate::db::{LeadRepository, StoreError};
use crate::models::{Lead, LeadInput, LeadPatch};

async fn write<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    lead: &Lead,
) -> Result<Option<Lead>, sqlx::Error> {
    sqlx::query_as::<_, Lead>(
        "UPDATE leads SET name = $2, email = $3, phone = $4, service = $5, budget = $6,
             message = $7, submitted_on = $8, status = $9, priority = $10, business_type = $11
         WHERE id = $1 RETURNING *",
    )
    .bind(&lead.id)
    .bind(&lead.name)
    .bind(&lead.email)
    .bind(&lead.phone)
    .bind(&lead.service)
    .bind(&lead.budget)
    .bind(&lead.message)
    .bind(lead.date)
    .bind(lead.status)
    .bind(lead.priority)
    .bind(&lead.business_type)
    .fetch_optional(executor)
    .await
}

#[async_trait]
impl LeadRepository for PgStore {
    async fn list(&self) -> Result<Vec<Lead>, StoreError> {
        Ok(sqlx::query_as::<_, Lead>(
            "SELECT * FROM leads ORDER BY submitted_on DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find(&self, id: &str) -> Result<Option<Lead>, StoreError> {
        Ok(sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create(&self, input: LeadInput, today: NaiveDate) -> Result<Lead, StoreError> {
        Ok(sqlx::query_as::<_, Lead>(
            "INSERT INTO leads (name, email, phone, service, budget, message, submitted_on,
                 status, priority, business_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.service)
        .bind(&input.budget)
        .bind(&input.message)
        .bind(input.date.unwrap_or(today))
        .bind(input.status)
        .bind(input.priority)
        .bind(&input.business_type)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn replace(&self, lead: Lead) -> Result<Option<Lead>, StoreError> {
        Ok(write(&self.pool, &lead).await?)
    }

    async fn update(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let current = sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(mut lead) = current else {
            return Ok(None);
        };
        lead.apply(patch);
        let saved = write(&mut *tx, &lead).await?;
        tx.commit().await?;
        Ok(saved)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
