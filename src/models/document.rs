use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file a user uploaded as supporting paperwork (PAN, Aadhaar, ...).
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type: String,
    pub filename: String,
    /// Path relative to the upload root; served under `/uploads/`.
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub user_id: Uuid,
    pub document_type: String,
    pub filename: String,
    pub file_path: String,
}

impl NewDocument {
    pub fn into_document(self) -> Document {
        Document {
            id: Uuid::now_v7(),
            user_id: self.user_id,
            document_type: self.document_type,
            filename: self.filename,
            file_path: self.file_path,
            uploaded_at: Utc::now(),
        }
    }
}
