// src/handlers/subject.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::subject::{CreateSubjectRequest, NewSubject, random_color},
    store::Store,
    utils::jwt::Claims,
};

/// List the caller's subjects, oldest first.
pub async fn list_subjects(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let subjects = store.list_subjects(claims.user_id()?).await?;
    Ok(Json(subjects))
}

/// Create a subject. A random display color is assigned when none is given.
pub async fn create_subject(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Json(mut payload): Json<CreateSubjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.name = payload.name.trim().to_string();
    payload.validate()?;

    let subject = NewSubject {
        name: payload.name,
        color: payload.color.unwrap_or_else(random_color),
    };

    let subject = store.create_subject(claims.user_id()?, subject).await?;
    tracing::info!(subject_id = subject.id, "Subject created");

    Ok((StatusCode::CREATED, Json(subject)))
}

/// Delete a subject together with everything filed under it.
pub async fn delete_subject(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !store.delete_subject(claims.user_id()?, id).await? {
        return Err(AppError::NotFound("Subject not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
