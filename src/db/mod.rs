pub mod memory;
pub mod postgres;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    ChangeRejected, Customer, CustomerPatch, Document, Lead, LeadInput, LeadPatch, NewDocument, NewService,
    NewUser, Priority, Service, ServiceChange, User,
};

use self::memory::MemoryStore;
use self::postgres::PgStore;

#[derive(Debug)]
pub enum StoreError {
    /// The backing store could not be reached.
    Unavailable(String),
    /// A uniqueness rule was violated.
    Duplicate(String),
    /// A nested item named by the caller does not exist.
    Missing(String),
    /// The requested change breaks a rule of the stored record.
    Invalid(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
            StoreError::Duplicate(msg) => write!(f, "Duplicate: {msg}"),
            StoreError::Missing(msg) => write!(f, "Missing: {msg}"),
            StoreError::Invalid(msg) => write!(f, "Invalid: {msg}"),
            StoreError::Database(err) => write!(f, "Database error: {err}"),
        }
    }
}

impl From<ChangeRejected> for StoreError {
    fn from(err: ChangeRejected) -> Self {
        match err {
            ChangeRejected::Invalid(msg) => StoreError::Invalid(msg),
            ChangeRejected::UnknownDocument(msg) => StoreError::Missing(msg),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// `Ok(None)` from lookups and mutations means "no record with that id".
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>, StoreError>;
    async fn find(&self, id: &str) -> Result<Option<Customer>, StoreError>;
    async fn replace(&self, customer: Customer) -> Result<Option<Customer>, StoreError>;
    async fn update(&self, id: &str, patch: CustomerPatch) -> Result<Option<Customer>, StoreError>;
    /// Sets the priority of every listed customer; returns how many existed.
    async fn set_priority(&self, ids: &[String], priority: Priority) -> Result<u64, StoreError>;
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Newest submission first.
    async fn list(&self) -> Result<Vec<Lead>, StoreError>;
    async fn find(&self, id: &str) -> Result<Option<Lead>, StoreError>;
    async fn create(&self, input: LeadInput, today: NaiveDate) -> Result<Lead, StoreError>;
    async fn replace(&self, lead: Lead) -> Result<Option<Lead>, StoreError>;
    async fn update(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>, StoreError>;
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list(&self, customer_id: Option<&str>) -> Result<Vec<Service>, StoreError>;
    async fn find(&self, id: &str) -> Result<Option<Service>, StoreError>;
    async fn create(&self, service: NewService) -> Result<Service, StoreError>;
    async fn modify(
        &self,
        id: &str,
        change: ServiceChange,
        today: NaiveDate,
    ) -> Result<Option<Service>, StoreError>;
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`StoreError::Duplicate`] when the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn create(&self, document: NewDocument) -> Result<Document, StoreError>;
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Document>, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// The set of repositories handlers talk to.
#[derive(Clone)]
pub struct Store {
    pub customers: Arc<dyn CustomerRepository>,
    pub leads: Arc<dyn LeadRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub users: Arc<dyn UserRepository>,
    pub documents: Arc<dyn DocumentRepository>,
}

impl Store {
    /// In-memory store pre-loaded with the demo records.
    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::seeded()))
    }

    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            customers: store.clone(),
            leads: store.clone(),
            services: store.clone(),
            users: store.clone(),
            documents: store,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            customers: store.clone(),
            leads: store.clone(),
            services: store.clone(),
            users: store.clone(),
            documents: store,
        }
    }
}
