mod customers;
mod documents;
mod leads;
mod services;
mod users;

use sqlx::PgPool;

use crate::db::StoreError;

/// Postgres-backed repositories. Schema and seed rows live in `migrations/`.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation onto [`StoreError::Duplicate`].
fn unique_violation(err: sqlx::Error, message: &str) -> StoreError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            StoreError::Duplicate(message.to_string())
        }
        _ => StoreError::Database(err),
    }
}
