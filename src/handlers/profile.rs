// src/handlers/profile.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::{error::AppError, models::user::MeResponse, store::Store, utils::jwt::Claims};

/// Get current user's profile and statistics.
pub async fn get_me(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let user = store
        .find_user(user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    let subjects_count = store.list_subjects(user_id).await?.len();
    let attempts_count = store.list_attempts(user_id).await?.len();

    Ok(Json(MeResponse {
        id: user.id,
        display_name: user.display_name().to_string(),
        email: user.email,
        created_at: user.created_at,
        subjects_count,
        attempts_count,
    }))
}
