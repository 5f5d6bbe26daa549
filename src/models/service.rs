use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "service_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    #[default]
    NotStarted,
    InProgress,
    UnderReview,
    Completed,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 4] = [
        ServiceStatus::NotStarted,
        ServiceStatus::InProgress,
        ServiceStatus::UnderReview,
        ServiceStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::NotStarted => "not_started",
            ServiceStatus::InProgress => "in_progress",
            ServiceStatus::UnderReview => "under_review",
            ServiceStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::NotStarted => "not started",
            ServiceStatus::InProgress => "in progress",
            ServiceStatus::UnderReview => "under review",
            ServiceStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for ServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("Invalid service status: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 3] = [
        DocumentStatus::Pending,
        DocumentStatus::Verified,
        DocumentStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Verified => "verified",
            DocumentStatus::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("Invalid document status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    pub name: String,
    pub status: DocumentStatus,
    pub upload_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub customer_id: String,
    pub status: ServiceStatus,
    /// Whole rupees.
    pub price: i64,
    pub description: String,
    pub start_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub required_documents: Vec<String>,
    pub certificates: Vec<String>,
    #[sqlx(json)]
    pub uploaded_documents: Vec<UploadedDocument>,
}

/// Fields accepted when creating a service or replacing one wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub name: String,
    pub customer_id: String,
    pub price: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ServiceStatus,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub uploaded_documents: Vec<UploadedDocument>,
}

impl ServiceInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Service name is required".to_string());
        }
        if self.customer_id.trim().is_empty() {
            return Err("Customer id is required".to_string());
        }
        if self.price < 0 {
            return Err("Price cannot be negative".to_string());
        }
        Ok(())
    }
}

/// A validated service ready to be stored. The id is assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub customer_id: String,
    pub price: i64,
    pub description: String,
    pub start_date: NaiveDate,
    pub required_documents: Vec<String>,
    pub certificates: Vec<String>,
}

impl NewService {
    /// New services always start as `not_started` with no uploads; blank list entries are dropped.
    pub fn from_input(input: ServiceInput, today: NaiveDate) -> Self {
        Self {
            name: input.name.trim().to_string(),
            customer_id: input.customer_id.trim().to_string(),
            price: input.price,
            description: input.description,
            start_date: input.start_date.unwrap_or(today),
            required_documents: non_blank(input.required_documents),
            certificates: non_blank(input.certificates),
        }
    }

    pub fn into_service(self, id: &str) -> Service {
        Service {
            id: id.to_string(),
            name: self.name,
            customer_id: self.customer_id,
            status: ServiceStatus::NotStarted,
            price: self.price,
            description: self.description,
            start_date: self.start_date,
            completed_date: None,
            required_documents: self.required_documents,
            certificates: self.certificates,
            uploaded_documents: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub name: Option<String>,
    pub customer_id: Option<String>,
    pub status: Option<ServiceStatus>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub required_documents: Option<Vec<String>>,
    pub certificates: Option<Vec<String>>,
}

/// A mutation applied to one stored service under the repository's write guard.
#[derive(Debug, Clone)]
pub enum ServiceChange {
    Replace(ServiceInput),
    Patch(ServicePatch),
    AddDocument(String),
    SetDocumentStatus { name: String, status: DocumentStatus },
}

/// Why a [`ServiceChange`] was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeRejected {
    /// The change itself is malformed or conflicts with existing documents.
    Invalid(String),
    /// It names an uploaded document the service does not have.
    UnknownDocument(String),
}

impl Service {
    /// `completed_date` is stamped on the transition into `completed`, kept while
    /// the service stays completed and cleared when it leaves that state.
    pub fn set_status(&mut self, status: ServiceStatus, today: NaiveDate) {
        match status {
            ServiceStatus::Completed if self.status != ServiceStatus::Completed => {
                self.completed_date = Some(today);
            }
            ServiceStatus::Completed => {
                self.completed_date.get_or_insert(today);
            }
            _ => self.completed_date = None,
        }
        self.status = status;
    }

    pub fn apply(&mut self, change: ServiceChange, today: NaiveDate) -> Result<(), ChangeRejected> {
        match change {
            ServiceChange::Replace(input) => {
                self.name = input.name.trim().to_string();
                self.customer_id = input.customer_id.trim().to_string();
                self.price = input.price;
                self.description = input.description;
                self.start_date = input.start_date.unwrap_or(self.start_date);
                self.required_documents = non_blank(input.required_documents);
                self.certificates = non_blank(input.certificates);
                self.uploaded_documents = input.uploaded_documents;
                self.set_status(input.status, today);
            }
            ServiceChange::Patch(patch) => {
                if let Some(name) = patch.name {
                    self.name = name;
                }
                if let Some(customer_id) = patch.customer_id {
                    self.customer_id = customer_id;
                }
                if let Some(price) = patch.price {
                    self.price = price;
                }
                if let Some(description) = patch.description {
                    self.description = description;
                }
                if let Some(start) = patch.start_date {
                    self.start_date = start;
                }
                if let Some(docs) = patch.required_documents {
                    self.required_documents = non_blank(docs);
                }
                if let Some(certs) = patch.certificates {
                    self.certificates = non_blank(certs);
                }
                if let Some(status) = patch.status {
                    self.set_status(status, today);
                }
            }
            ServiceChange::AddDocument(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(ChangeRejected::Invalid("Document name is required".to_string()));
                }
                // Reviews address documents by name, so names stay unique per service.
                if self.uploaded_documents.iter().any(|d| d.name == name) {
                    return Err(ChangeRejected::Invalid(format!(
                        "Document '{name}' already exists"
                    )));
                }
                self.uploaded_documents.push(UploadedDocument {
                    name,
                    status: DocumentStatus::Pending,
                    upload_date: today,
                });
            }
            ServiceChange::SetDocumentStatus { name, status } => {
                let doc = self
                    .uploaded_documents
                    .iter_mut()
                    .find(|d| d.name == name)
                    .ok_or_else(|| ChangeRejected::UnknownDocument(format!("Document '{name}' not found")))?;
                doc.status = status;
            }
        }
        Ok(())
    }
}

fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
