// src/handlers/topic.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    generation::{self, TextGenerator},
    models::topic::{CreateTopicRequest, NewTopic, TopicListParams},
    store::Store,
    utils::{html::clean_html, jwt::Claims},
};

/// List the caller's topics, newest first, optionally for one subject.
pub async fn list_topics(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<TopicListParams>,
) -> Result<impl IntoResponse, AppError> {
    let topics = store.list_topics(claims.user_id()?, params.subject_id).await?;
    Ok(Json(topics))
}

pub async fn get_topic(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let topic = store
        .get_topic(claims.user_id()?, id)
        .await?
        .ok_or(AppError::NotFound("Topic not found".to_string()))?;
    Ok(Json(topic))
}

/// Create a topic under one of the caller's subjects.
pub async fn create_topic(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Json(mut payload): Json<CreateTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;
    payload.title = payload.title.trim().to_string();
    payload.validate()?;

    if store.get_subject(user_id, payload.subject_id).await?.is_none() {
        return Err(AppError::NotFound("Subject not found".to_string()));
    }

    let topic = store
        .create_topic(
            user_id,
            NewTopic {
                subject_id: payload.subject_id,
                title: payload.title,
                difficulty: payload.difficulty,
            },
        )
        .await?;
    tracing::info!(topic_id = topic.id, "Topic created");

    Ok((StatusCode::CREATED, Json(topic)))
}

pub async fn delete_topic(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !store.delete_topic(claims.user_id()?, id).await? {
        return Err(AppError::NotFound("Topic not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Generate (or regenerate) the topic's summary at the topic's difficulty.
///
/// Goes through the same fallback path as the public endpoint, so a summary
/// is always stored.
pub async fn generate_summary(
    State(store): State<Arc<dyn Store>>,
    State(generator): State<Arc<dyn TextGenerator>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let topic = store
        .get_topic(claims.user_id()?, id)
        .await?
        .ok_or(AppError::NotFound("Topic not found".to_string()))?
        .topic;

    let text = generation::generate_summary(generator.as_ref(), &topic.title, topic.difficulty_level).await;
    let summary = store.upsert_summary(topic.id, &clean_html(&text)).await?;

    Ok(Json(summary))
}
