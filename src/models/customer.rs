use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "customer_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            CustomerStatus::Active => CustomerStatus::Inactive,
            CustomerStatus::Inactive => CustomerStatus::Active,
        }
    }
}

impl std::str::FromStr for CustomerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(CustomerStatus::Active),
            "inactive" => Ok(CustomerStatus::Inactive),
            other => Err(format!("Invalid customer status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Registration timestamp.
    #[sqlx(rename = "registered_at")]
    pub date: NaiveDateTime,
    pub status: CustomerStatus,
    pub priority: Priority,
    pub services: Vec<String>,
    /// Whole rupees.
    pub total_spent: i64,
    pub last_service: Option<String>,
}

/// Body of a full replace. Every field except the id is supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: NaiveDateTime,
    pub status: CustomerStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub total_spent: i64,
    pub last_service: Option<String>,
}

fn clean_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(name.to_string())
}

fn check_total(total_spent: i64) -> Result<(), String> {
    if total_spent < 0 {
        return Err("totalSpent cannot be negative".to_string());
    }
    Ok(())
}

impl CustomerInput {
    pub fn validate(mut self) -> Result<Self, String> {
        self.name = clean_name(&self.name)?;
        check_total(self.total_spent)?;
        Ok(self)
    }

    pub fn into_customer(self, id: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: self.name,
            phone: self.phone,
            email: self.email,
            date: self.date,
            status: self.status,
            priority: self.priority,
            services: self.services,
            total_spent: self.total_spent,
            last_service: self.last_service,
        }
    }
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<CustomerStatus>,
    pub priority: Option<Priority>,
    pub services: Option<Vec<String>>,
    pub total_spent: Option<i64>,
    pub last_service: Option<String>,
}

impl CustomerPatch {
    pub fn validate(mut self) -> Result<Self, String> {
        self.name = self.name.as_deref().map(clean_name).transpose()?;
        if let Some(total) = self.total_spent {
            check_total(total)?;
        }
        Ok(self)
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn status(status: CustomerStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Customer {
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(services) = patch.services {
            self.services = services;
        }
        if let Some(total) = patch.total_spent {
            self.total_spent = total;
        }
        if let Some(last) = patch.last_service {
            self.last_service = Some(last);
        }
    }
}
