// src/models/topic.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::difficulty::Difficulty;

/// Represents the 'topics' table in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub subject_id: i64,
    pub user_id: i64,
    pub title: String,
    pub difficulty_level: Difficulty,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Represents the 'topic_summaries' table. At most one row per topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub topic_id: i64,
    pub summary: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A topic together with its summary, if one was generated.
#[derive(Debug, Clone, Serialize)]
pub struct TopicWithSummary {
    #[serde(flatten)]
    pub topic: Topic,
    pub summary: Option<Summary>,
}

/// Query parameters for listing topics.
#[derive(Debug, Deserialize)]
pub struct TopicListParams {
    pub subject_id: Option<i64>,
}

/// DTO for creating a new topic.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTopicRequest {
    pub subject_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub difficulty: Difficulty,
}

/// Fields the store needs to insert a topic.
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub subject_id: i64,
    pub title: String,
    pub difficulty: Difficulty,
}
