use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::extractor::AdminUser;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::{Customer, CustomerInput, CustomerPatch, Priority};
use crate::panel;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPriorityRequest {
    pub customer_ids: Vec<String>,
    pub priority: Priority,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPriorityResponse {
    pub message: String,
    pub updated_count: u64,
}

fn not_found() -> AppError {
    AppError::NotFound("Customer not found".to_string())
}

pub async fn list(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = state.store.customers.list().await?;
    Ok(Json(panel::filter_customers(
        customers,
        params.search.as_deref(),
    )))
}

pub async fn get(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let customer = state.store.customers.find(&id).await?.ok_or_else(not_found)?;
    Ok(Json(customer))
}

pub async fn replace(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<CustomerInput>,
) -> Result<Json<Customer>, AppError> {
    let input = input.validate().map_err(AppError::BadRequest)?;
    let customer = state
        .store
        .customers
        .replace(input.into_customer(&id))
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(customer))
}

pub async fn update(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<CustomerPatch>,
) -> Result<Json<Customer>, AppError> {
    let patch = patch.validate().map_err(AppError::BadRequest)?;
    let customer = state
        .store
        .customers
        .update(&id, patch)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(customer))
}

pub async fn delete(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.store.customers.delete(&id).await? {
        return Err(not_found());
    }
    tracing::info!(customer_id = %id, "Customer deleted");
    Ok(Json(json!({ "message": "Customer deleted successfully" })))
}

pub async fn bulk_priority(
    _admin: AdminUser,
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<BulkPriorityRequest>,
) -> Result<Json<BulkPriorityResponse>, AppError> {
    if req.customer_ids.is_empty() {
        return Err(AppError::BadRequest(
            "customerIds must not be empty".to_string(),
        ));
    }
    let updated_count = state
        .store
        .customers
        .set_priority(&req.customer_ids, req.priority)
        .await?;

    Ok(Json(BulkPriorityResponse {
        message: format!("Updated priority to {} for {updated_count} customers", req.priority),
        updated_count,
    }))
}
