use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extractor::AdminUser;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::{
    DocumentStatus, NewService, Service, ServiceChange, ServiceInput, ServicePatch, ServiceStatus,
};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub customer_id: Option<String>,
}

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: ServiceStatus,
}

#[derive(Deserialize)]
pub struct AddDocumentRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ReviewDocumentRequest {
    pub name: String,
    pub status: DocumentStatus,
}

fn not_found() -> AppError {
    AppError::NotFound("Service not found".to_string())
}

async fn modify(
    state: &SharedState,
    id: &str,
    change: ServiceChange,
) -> Result<Json<Service>, AppError> {
    let service = state
        .store
        .services
        .modify(id, change, Utc::now().date_naive())
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(service))
}

pub async fn list(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Service>>, AppError> {
    let customer_id = params
        .customer_id
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let services = state.store.services.list(customer_id).await?;
    Ok(Json(services))
}

pub async fn create(
    _admin: AdminUser,
    State(state): State<SharedState>,
    ApiJson(input): ApiJson<ServiceInput>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    input.validate().map_err(AppError::BadRequest)?;
    let service = state
        .store
        .services
        .create(NewService::from_input(input, Utc::now().date_naive()))
        .await?;

    tracing::info!(service_id = %service.id, customer_id = %service.customer_id, "Service created");

    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn get(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, AppError> {
    let service = state.store.services.find(&id).await?.ok_or_else(not_found)?;
    Ok(Json(service))
}

pub async fn replace(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<ServiceInput>,
) -> Result<Json<Service>, AppError> {
    input.validate().map_err(AppError::BadRequest)?;
    modify(&state, &id, ServiceChange::Replace(input)).await
}

pub async fn update(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<ServicePatch>,
) -> Result<Json<Service>, AppError> {
    if patch.price.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest("Price cannot be negative".to_string()));
    }
    modify(&state, &id, ServiceChange::Patch(patch)).await
}

pub async fn delete(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !state.store.services.delete(&id).await? {
        return Err(not_found());
    }
    tracing::info!(service_id = %id, "Service deleted");
    Ok(Json(json!({ "message": "Service deleted successfully" })))
}

pub async fn set_status(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<StatusRequest>,
) -> Result<Json<Service>, AppError> {
    let patch = ServicePatch {
        status: Some(req.status),
        ..ServicePatch::default()
    };
    modify(&state, &id, ServiceChange::Patch(patch)).await
}

pub async fn add_document(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddDocumentRequest>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Document name is required".to_string()));
    }
    let service = modify(&state, &id, ServiceChange::AddDocument(req.name)).await?;
    Ok((StatusCode::CREATED, service))
}

pub async fn review_document(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ReviewDocumentRequest>,
) -> Result<Json<Service>, AppError> {
    modify(
        &state,
        &id,
        ServiceChange::SetDocumentStatus {
            name: req.name,
            status: req.status,
        },
    )
    .await
}
