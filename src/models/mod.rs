pub mod customer;
pub mod document;
pub mod lead;
pub mod service;
pub mod user;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use customer::{Customer, CustomerInput, CustomerPatch, CustomerStatus};
pub use document::{Document, NewDocument};
pub use lead::{Lead, LeadInput, LeadPatch, LeadStatus};
pub use service::{
    ChangeRejected, DocumentStatus, NewService, Service, ServiceChange, ServiceInput, ServicePatch, ServiceStatus,
    UploadedDocument,
};
pub use user::{NewUser, PublicUser, User};

/// Admin-assigned urgency tag on leads and customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("Invalid priority value: {other}")),
        }
    }
}

/// Next `PREFIXnnn` identifier after the highest numeric suffix already in use.
pub fn next_code<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let max = existing
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", max + 1)
}
