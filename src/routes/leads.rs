use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extractor::AdminUser;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::{Lead, LeadInput, LeadPatch, Priority};
use crate::panel;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

fn not_found() -> AppError {
    AppError::NotFound("Lead not found".to_string())
}

pub async fn list(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Lead>>, AppError> {
    let leads = state.store.leads.list().await?;
    Ok(Json(panel::filter_leads(leads, params.search.as_deref())))
}

/// Public: anyone may submit an enquiry.
pub async fn create(
    State(state): State<SharedState>,
    ApiJson(input): ApiJson<LeadInput>,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    let input = input
        .into_enquiry()
        .normalize()
        .map_err(AppError::BadRequest)?;
    let lead = state
        .store
        .leads
        .create(input, Utc::now().date_naive())
        .await?;

    tracing::info!(lead_id = %lead.id, service = %lead.service, "Lead created");

    Ok((StatusCode::CREATED, Json(lead)))
}

pub async fn get(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Lead>, AppError> {
    let lead = state.store.leads.find(&id).await?.ok_or_else(not_found)?;
    Ok(Json(lead))
}

pub async fn replace(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<LeadInput>,
) -> Result<Json<Lead>, AppError> {
    let input = input.normalize().map_err(AppError::BadRequest)?;
    // A replace without a date keeps the original submission date.
    let existing = state.store.leads.find(&id).await?.ok_or_else(not_found)?;
    let lead = state
        .store
        .leads
        .replace(input.into_lead(&id, existing.date))
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(lead))
}

pub async fn update(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<LeadPatch>,
) -> Result<Json<Lead>, AppError> {
    let patch = patch.normalize().map_err(AppError::BadRequest)?;
    let lead = state
        .store
        .leads
        .update(&id, patch)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(lead))
}

pub async fn delete(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !state.store.leads.delete(&id).await? {
        return Err(not_found());
    }
    tracing::info!(lead_id = %id, "Lead deleted");
    Ok(Json(json!({ "message": "Lead deleted successfully" })))
}

/// `{ "priority": "high" | "medium" | "low" }`, case-insensitive.
pub async fn set_priority(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<Lead>, AppError> {
    let priority: Priority = body
        .get("priority")
        .and_then(Value::as_str)
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| AppError::BadRequest("Invalid priority value".to_string()))?;

    let lead = state
        .store
        .leads
        .update(&id, LeadPatch::priority(priority))
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(lead))
}
