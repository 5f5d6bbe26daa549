use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::{
    seed, CustomerRepository, DocumentRepository, LeadRepository, ServiceRepository, StoreError,
    UserRepository,
};
use crate::models::user::normalize_email;
use crate::models::{
    next_code, Customer, CustomerPatch, Document, Lead, LeadInput, LeadPatch, NewDocument,
    NewService, NewUser, Priority, Service, ServiceChange, User,
};

/// Process-local store. Every read-modify-write happens under the collection's
/// write lock, so concurrent updates to one record cannot drop each other.
/// Contents are lost on restart.
pub struct MemoryStore {
    customers: RwLock<Vec<Customer>>,
    leads: RwLock<Vec<Lead>>,
    services: RwLock<Vec<Service>>,
    users: RwLock<Vec<User>>,
    documents: RwLock<Vec<Document>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            customers: RwLock::new(Vec::new()),
            leads: RwLock::new(Vec::new()),
            services: RwLock::new(Vec::new()),
            users: RwLock::new(Vec::new()),
            documents: RwLock::new(Vec::new()),
            offline: AtomicBool::new(false),
        }
    }

    pub fn seeded() -> Self {
        Self {
            customers: RwLock::new(seed::customers()),
            leads: RwLock::new(seed::leads()),
            services: RwLock::new(seed::services()),
            ..Self::empty()
        }
    }

    /// Simulate an outage: every call fails with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("in-memory store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        self.check()?;
        Ok(self.customers.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Customer>, StoreError> {
        self.check()?;
        Ok(self.customers.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn replace(&self, customer: Customer) -> Result<Option<Customer>, StoreError> {
        self.check()?;
        let mut customers = self.customers.write().await;
        let Some(slot) = customers.iter_mut().find(|c| c.id == customer.id) else {
            return Ok(None);
        };
        *slot = customer;
        Ok(Some(slot.clone()))
    }

    async fn update(&self, id: &str, patch: CustomerPatch) -> Result<Option<Customer>, StoreError> {
        self.check()?;
        let mut customers = self.customers.write().await;
        let Some(customer) = customers.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        customer.apply(patch);
        Ok(Some(customer.clone()))
    }

    async fn set_priority(&self, ids: &[String], priority: Priority) -> Result<u64, StoreError> {
        self.check()?;
        let mut customers = self.customers.write().await;
        let mut updated = 0;
        for customer in customers.iter_mut().filter(|c| ids.contains(&c.id)) {
            customer.priority = priority;
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.check()?;
        let mut customers = self.customers.write().await;
        let before = customers.len();
        customers.retain(|c| c.id != id);
        Ok(customers.len() != before)
    }
}

#[async_trait]
impl LeadRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Lead>, StoreError> {
        self.check()?;
        let mut leads = self.leads.read().await.clone();
        leads.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(leads)
    }

    async fn find(&self, id: &str) -> Result<Option<Lead>, StoreError> {
        self.check()?;
        Ok(self.leads.read().await.iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, input: LeadInput, today: NaiveDate) -> Result<Lead, StoreError> {
        self.check()?;
        let mut leads = self.leads.write().await;
        let id = next_code("LEAD", leads.iter().map(|l| l.id.as_str()));
        let lead = input.into_lead(&id, today);
        leads.push(lead.clone());
        Ok(lead)
    }

    async fn replace(&self, lead: Lead) -> Result<Option<Lead>, StoreError> {
        self.check()?;
        let mut leads = self.leads.write().await;
        let Some(slot) = leads.iter_mut().find(|l| l.id == lead.id) else {
            return Ok(None);
        };
        *slot = lead;
        Ok(Some(slot.clone()))
    }

    async fn update(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>, StoreError> {
        self.check()?;
        let mut leads = self.leads.write().await;
        let Some(lead) = leads.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        lead.apply(patch);
        Ok(Some(lead.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.check()?;
        let mut leads = self.leads.write().await;
        let before = leads.len();
        leads.retain(|l| l.id != id);
        Ok(leads.len() != before)
    }
}

#[async_trait]
impl ServiceRepository for MemoryStore {
    async fn list(&self, customer_id: Option<&str>) -> Result<Vec<Service>, StoreError> {
        self.check()?;
        Ok(self
            .services
            .read()
            .await
            .iter()
            .filter(|s| customer_id.is_none_or(|c| s.customer_id == c))
            .cloned()
            .collect())
    }

    async fn find(&self, id: &str) -> Result<Option<Service>, StoreError> {
        self.check()?;
        Ok(self.services.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, service: NewService) -> Result<Service, StoreError> {
        self.check()?;
        let mut services = self.services.write().await;
        let id = next_code("SRV", services.iter().map(|s| s.id.as_str()));
        let service = service.into_service(&id);
        services.push(service.clone());
        Ok(service)
    }

    async fn modify(
        &self,
        id: &str,
        change: ServiceChange,
        today: NaiveDate,
    ) -> Result<Option<Service>, StoreError> {
        self.check()?;
        let mut services = self.services.write().await;
        let Some(service) = services.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        // Apply to a copy so a rejected change leaves the stored record untouched.
        let mut updated = service.clone();
        updated.apply(change, today)?;
        *service = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.check()?;
        let mut services = self.services.write().await;
        let before = services.len();
        services.retain(|s| s.id != id);
        Ok(services.len() != before)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        self.check()?;
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email()) {
            return Err(StoreError::Duplicate("User Already Exists".to_string()));
        }
        let user = user.into_user();
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        let email = normalize_email(email);
        Ok(self.users.read().await.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.check()?;
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl DocumentRepository for MemoryStore {
    async fn create(&self, document: NewDocument) -> Result<Document, StoreError> {
        self.check()?;
        let document = document.into_document();
        self.documents.write().await.push(document.clone());
        Ok(document)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Document>, StoreError> {
        self.check()?;
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.check()?;
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        Ok(documents.len() != before)
    }
}
