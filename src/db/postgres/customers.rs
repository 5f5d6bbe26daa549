use async_trait::async_trait;

use super::PgStore;
use crate::db::{CustomerRepository, StoreError};
use crate::models::{Customer, CustomerPatch, Priority};

async fn write<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    customer: &Customer,
) -> Result<Option<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        "UPDATE customers SET name = $2, phone = $3, email = $4, registered_at = $5,
             status = $6, priority = $7, services = $8, total_spent = $9, last_service = $10
         WHERE id = $1 RETURNING *",
    )
    .bind(&customer.id)
    .bind(&customer.name)
    .bind(&customer.phone)
    .bind(&customer.email)
    .bind(customer.date)
    .bind(customer.status)
    .bind(customer.priority)
    .bind(&customer.services)
    .bind(customer.total_spent)
    .bind(&customer.last_service)
    .fetch_optional(executor)
    .await
}

#[async_trait]
impl CustomerRepository for PgStore {
    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn find(&self, id: &str) -> Result<Option<Customer>, StoreError> {
        Ok(
            sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn replace(&self, customer: Customer) -> Result<Option<Customer>, StoreError> {
        Ok(write(&self.pool, &customer).await?)
    }

    async fn update(&self, id: &str, patch: CustomerPatch) -> Result<Option<Customer>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let current =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(mut customer) = current else {
            return Ok(None);
        };
        customer.apply(patch);
        let saved = write(&mut *tx, &customer).await?;
        tx.commit().await?;
        Ok(saved)
    }

    async fn set_priority(&self, ids: &[String], priority: Priority) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE customers SET priority = $2 WHERE id = ANY($1)")
            .bind(ids)
            .bind(priority)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
