use serde_json::Value;

use crate::models::{LeadInput, LeadStatus, Priority};

/// Shown on the thank-you page when the form named neither a service nor a plan.
pub const GENERIC_REQUEST: &str = "your consultation request";

const DEFAULT_MESSAGE: &str = "I'm interested in your services.";

/// A lead-capture form submission from any public page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub service: Option<String>,
    pub plan: Option<String>,
}

fn field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl ContactSubmission {
    pub fn from_value(data: &Value) -> Self {
        Self {
            name: field(data, "name").unwrap_or_default(),
            email: field(data, "email").unwrap_or_default(),
            phone: field(data, "phone").unwrap_or_default(),
            message: field(data, "message"),
            service: field(data, "service"),
            plan: field(data, "plan"),
        }
    }

    /// What the thank-you page says the visitor asked about.
    pub fn subject(&self) -> String {
        self.service
            .clone()
            .or_else(|| self.plan.as_ref().map(|p| format!("{p} plan")))
            .unwrap_or_else(|| GENERIC_REQUEST.to_string())
    }

    pub fn into_lead_input(self) -> LeadInput {
        let service = self
            .service
            .clone()
            .or_else(|| self.plan.as_ref().map(|p| format!("{p} plan")))
            .unwrap_or_else(|| "General Inquiry".to_string());
        LeadInput {
            name: self.name,
            email: self.email,
            phone: self.phone,
            service,
            budget: None,
            message: Some(self.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string())),
            date: None,
            status: LeadStatus::New,
            priority: Priority::Medium,
            business_type: None,
        }
    }
}

/// `/thank-you?service=...` with the subject URL-encoded.
pub fn thank_you_url(subject: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(subject.as_bytes()).collect();
    format!("/thank-you?service={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subject_prefers_service_then_plan() {
        let with_service = ContactSubmission::from_value(&json!({
            "service": "GST Registration", "plan": "Basic"
        }));
        assert_eq!(with_service.subject(), "GST Registration");

        let with_plan = ContactSubmission::from_value(&json!({ "plan": "Premium" }));
        assert_eq!(with_plan.subject(), "Premium plan");

        let bare = ContactSubmission::from_value(&json!({ "service": "  " }));
        assert_eq!(bare.subject(), GENERIC_REQUEST);
    }

    #[test]
    fn lead_input_gets_defaults() {
        let input = ContactSubmission::from_value(&json!({
            "name": "Ravi", "email": "ravi@example.com", "phone": "9876543210"
        }))
        .into_lead_input();
        assert_eq!(input.service, "General Inquiry");
        assert_eq!(input.message.as_deref(), Some(DEFAULT_MESSAGE));
        assert_eq!(input.status, LeadStatus::New);
    }

    #[test]
    fn thank_you_url_encodes_subject() {
        assert_eq!(
            thank_you_url("your consultation request"),
            "/thank-you?service=your+consultation+request"
        );
        assert_eq!(thank_you_url("A&B"), "/thank-you?service=A%26B");
    }
}
