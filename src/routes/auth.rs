use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{self, Claims};
use crate::auth::password;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::user::ROLE_USER;
use crate::models::{NewUser, PublicUser, User};
use crate::state::SharedState;

const INVALID_CREDENTIALS: &str = "Invalid Credentials";

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

pub async fn register(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }
    password::check_strength(&req.password).map_err(AppError::BadRequest)?;

    let new_user = NewUser::with_password(&req.name, &req.email, &req.password, ROLE_USER)
        .map_err(AppError::Internal)?;
    let user = state.store.users.create(new_user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User Created Successfully".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = authenticate(&state, &req.email, &req.password).await?;
    let token = issue_token(&state, &user)?;

    Ok(Json(LoginResponse {
        token,
        user: PublicUser::from(&user),
    }))
}

/// Look up the account and check its password. Unknown email and wrong
/// password fail identically.
pub async fn authenticate(
    state: &SharedState,
    email: &str,
    plaintext: &str,
) -> Result<User, AppError> {
    let user = state
        .store
        .users
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::BadRequest(INVALID_CREDENTIALS.to_string()))?;

    let valid = password::verify(plaintext, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.to_string()));
    }
    Ok(user)
}

pub fn issue_token(state: &SharedState, user: &User) -> Result<String, AppError> {
    jwt::sign(&Claims::for_user(user), &state.config.jwt_secret).map_err(AppError::Internal)
}
