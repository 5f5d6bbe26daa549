use async_trait::async_trait;
use uuid::Uuid;

use super::{unique_violation, PgStore};
use crate::db::{StoreError, UserRepository};
use crate::models::user::normalize_email;
use crate::models::{NewUser, User};

#[async_trait]
impl UserRepository for PgStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash, role)
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(user.name())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.role())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unique_violation(e, "User Already Exists"))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(normalize_email(email))
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}
