use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Priority;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-()+]{10,20}$").expect("valid phone regex"));

pub const MAX_MESSAGE_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lead_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Converted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
        }
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid lead status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub budget: Option<String>,
    pub message: Option<String>,
    #[sqlx(rename = "submitted_on")]
    pub date: NaiveDate,
    pub status: LeadStatus,
    pub priority: Priority,
    pub business_type: Option<String>,
}

/// Body for creating a lead or fully replacing one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub budget: Option<String>,
    pub message: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub priority: Priority,
    pub business_type: Option<String>,
}

fn clean_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(name.to_string())
}

fn clean_email(email: &str) -> Result<String, String> {
    let email = email.trim().to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err("Please use a valid email address".to_string());
    }
    Ok(email)
}

fn clean_phone(phone: &str) -> Result<String, String> {
    let phone = phone.trim();
    if !PHONE_RE.is_match(phone) {
        return Err("Please use a valid phone number".to_string());
    }
    Ok(phone.to_string())
}

fn clean_service(service: &str) -> Result<String, String> {
    let service = service.trim();
    if service.is_empty() {
        return Err("Service is required".to_string());
    }
    Ok(service.to_string())
}

fn check_message(message: Option<&str>) -> Result<(), String> {
    if message.is_some_and(|m| m.chars().count() > MAX_MESSAGE_LEN) {
        return Err(format!("Message cannot exceed {MAX_MESSAGE_LEN} characters"));
    }
    Ok(())
}

impl LeadInput {
    /// Trim and lower-case the contact fields, then check them.
    pub fn normalize(mut self) -> Result<Self, String> {
        self.name = clean_name(&self.name)?;
        self.email = clean_email(&self.email)?;
        self.phone = clean_phone(&self.phone)?;
        self.service = clean_service(&self.service)?;
        check_message(self.message.as_deref())?;
        Ok(self)
    }

    /// A visitor's enquiry: triage fields are the admin's, so every new lead
    /// starts as `new`/`medium`, dated the day it arrives.
    pub fn into_enquiry(self) -> Self {
        Self {
            date: None,
            status: LeadStatus::New,
            priority: Priority::Medium,
            ..self
        }
    }

    pub fn into_lead(self, id: &str, today: NaiveDate) -> Lead {
        Lead {
            id: id.to_string(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            budget: self.budget,
            message: self.message,
            date: self.date.unwrap_or(today),
            status: self.status,
            priority: self.priority,
            business_type: self.business_type,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
    pub status: Option<LeadStatus>,
    pub priority: Option<Priority>,
    pub business_type: Option<String>,
}

impl LeadPatch {
    /// Apply the same contact checks as a full lead to whichever fields are present.
    pub fn normalize(mut self) -> Result<Self, String> {
        self.name = self.name.as_deref().map(clean_name).transpose()?;
        self.email = self.email.as_deref().map(clean_email).transpose()?;
        self.phone = self.phone.as_deref().map(clean_phone).transpose()?;
        self.service = self.service.as_deref().map(clean_service).transpose()?;
        check_message(self.message.as_deref())?;
        Ok(self)
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn status(status: LeadStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Lead {
    pub fn apply(&mut self, patch: LeadPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(service) = patch.service {
            self.service = service;
        }
        if let Some(budget) = patch.budget {
            self.budget = Some(budget);
        }
        if let Some(message) = patch.message {
            self.message = Some(message);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(kind) = patch.business_type {
            self.business_type = Some(kind);
        }
    }
}
