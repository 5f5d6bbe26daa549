use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::error::AppError;
use crate::models::{Document, NewDocument};
use crate::state::SharedState;
use crate::uploads;

pub async fn upload(
    auth: AuthUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Document>>), AppError> {
    let form = uploads::read_form(&headers, body)
        .await
        .map_err(AppError::BadRequest)?;

    let document_type = form
        .document_type
        .ok_or_else(|| AppError::BadRequest("documentType is required".to_string()))?;
    if form.files.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".to_string()));
    }

    // All files hit the disk before any record is written; a failure at
    // either step undoes everything written so far.
    let mut saved: Vec<(String, &uploads::UploadedFile)> = Vec::with_capacity(form.files.len());
    for file in &form.files {
        match state.storage.save(auth.user_id, &document_type, file).await {
            Ok(path) => saved.push((path, file)),
            Err(e) => {
                rollback(&state, &saved, &[]).await;
                return Err(AppError::Internal(format!("Failed to store upload: {e}")));
            }
        }
    }

    let mut documents = Vec::with_capacity(saved.len());
    for (file_path, file) in &saved {
        let record = NewDocument {
            user_id: auth.user_id,
            document_type: document_type.clone(),
            filename: file.filename.clone(),
            file_path: file_path.clone(),
        };
        match state.store.documents.create(record).await {
            Ok(document) => documents.push(document),
            Err(e) => {
                rollback(&state, &saved, &documents).await;
                return Err(e.into());
            }
        }
    }

    tracing::info!(
        user_id = %auth.user_id,
        document_type = %document_type,
        count = documents.len(),
        "Documents uploaded"
    );

    Ok((StatusCode::CREATED, Json(documents)))
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let documents = state.store.documents.list_by_user(auth.user_id).await?;
    Ok(Json(documents))
}

/// Best-effort removal of a partially stored upload.
async fn rollback(
    state: &SharedState,
    saved: &[(String, &uploads::UploadedFile)],
    documents: &[Document],
) {
    for document in documents {
        if let Err(e) = state.store.documents.delete(document.id).await {
            tracing::error!(document_id = %document.id, "Upload rollback left a record: {e}");
        }
    }
    for (path, _) in saved {
        if let Err(e) = state.storage.remove(path).await {
            tracing::error!(path = %path, "Upload rollback left a file: {e}");
        }
    }
}
