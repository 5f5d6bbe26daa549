use serde_json::Value;

/// Hidden form field that people never see and bots fill in.
pub const HONEYPOT_FIELD: &str = "website";

/// True when the honeypot field carries anything.
pub fn is_spam(data: &Value) -> bool {
    match data.get(HONEYPOT_FIELD) {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}
