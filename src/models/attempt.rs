// src/models/attempt.rs

use serde::{Deserialize, Serialize};

use crate::session::QuestionReview;

/// Represents the 'quiz_attempts' table. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: i64,
    pub quiz_id: i64,
    pub user_id: i64,

    /// Fraction of correct answers, `0.0..=1.0`.
    pub score: f64,

    pub total_questions: i32,

    /// Chosen option per question. Same length as the quiz's question list.
    pub answers: Vec<Option<usize>>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields the store needs to append an attempt.
#[derive(Debug, Clone)]
pub struct NewAttempt {
    pub quiz_id: i64,
    pub score: f64,
    pub total_questions: i32,
    pub answers: Vec<Option<usize>>,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize)]
pub struct SubmitAttemptRequest {
    /// One slot per question, `null` for unanswered.
    pub answers: Vec<Option<usize>>,
}

/// Response after a submission: the stored record plus the graded outcome.
#[derive(Debug, Serialize)]
pub struct AttemptResult {
    pub attempt: QuizAttempt,
    pub correct_count: usize,
    pub total_questions: usize,
    pub percentage: u32,
    pub passed: bool,
    pub review: Vec<QuestionReview>,
}

/// One attempt's score joined with the name of the subject it belongs to.
/// `subject_name` is `None` when the chain quiz → topic → subject is broken.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAttempt {
    pub subject_name: Option<String>,
    pub score: f64,
}

/// Average score for one subject on the dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectScore {
    pub name: String,
    pub average: f64,
}

/// Dashboard overview payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub subject_count: usize,
    pub total_attempts: usize,
    pub average_score: f64,
    pub scores_by_subject: Vec<SubjectScore>,
}
