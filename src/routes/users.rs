use axum::extract::State;
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::error::AppError;
use crate::models::PublicUser;
use crate::state::SharedState;

pub async fn me(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<PublicUser>, AppError> {
    let user = state
        .store
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(PublicUser::from(&user)))
}
