// src/models/quiz.rs

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// A single multiple-choice question as produced by generation.
/// Wire format uses camelCase (`correctAnswer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,

    /// Always four entries.
    pub options: Vec<String>,

    /// Zero-based index into `options`.
    pub correct_answer: usize,

    pub explanation: String,
}

/// Represents the 'quizzes' table. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub topic_id: i64,
    pub user_id: i64,
    pub difficulty_level: Difficulty,
    pub questions: Vec<Question>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Topic fields embedded in quiz listings.
#[derive(Debug, Clone, Serialize)]
pub struct QuizTopicRef {
    pub id: i64,
    pub title: String,
    pub difficulty_level: Difficulty,
}

/// Quiz listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct QuizWithTopic {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub topic: Option<QuizTopicRef>,
}

/// DTO for generating and storing a quiz for one of the caller's topics.
#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub topic_id: i64,
    pub difficulty: Difficulty,
}
