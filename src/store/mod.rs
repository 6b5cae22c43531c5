// src/store/mod.rs

//! Persistence seam. Every read and delete is scoped by the owning user.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        attempt::{NewAttempt, QuizAttempt, ScoredAttempt},
        difficulty::Difficulty,
        quiz::{Question, Quiz, QuizWithTopic},
        subject::{NewSubject, Subject},
        topic::{NewTopic, Summary, Topic, TopicWithSummary},
        user::User,
    },
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Fails with `Conflict` when the email is taken.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn list_subjects(&self, user_id: i64) -> Result<Vec<Subject>, AppError>;
    async fn get_subject(&self, user_id: i64, id: i64) -> Result<Option<Subject>, AppError>;
    async fn create_subject(&self, user_id: i64, subject: NewSubject) -> Result<Subject, AppError>;
    /// Also removes the subject's topics, summaries, quizzes and attempts.
    /// Returns `false` when nothing was deleted.
    async fn delete_subject(&self, user_id: i64, id: i64) -> Result<bool, AppError>;

    /// Newest first.
    async fn list_topics(&self, user_id: i64, subject_id: Option<i64>) -> Result<Vec<TopicWithSummary>, AppError>;
    async fn get_topic(&self, user_id: i64, id: i64) -> Result<Option<TopicWithSummary>, AppError>;
    async fn create_topic(&self, user_id: i64, topic: NewTopic) -> Result<Topic, AppError>;
    async fn delete_topic(&self, user_id: i64, id: i64) -> Result<bool, AppError>;
    /// Creates the topic's summary or overwrites the existing one.
    async fn upsert_summary(&self, topic_id: i64, summary: &str) -> Result<Summary, AppError>;

    /// Newest first.
    async fn list_quizzes(&self, user_id: i64) -> Result<Vec<QuizWithTopic>, AppError>;
    async fn get_quiz(&self, user_id: i64, id: i64) -> Result<Option<Quiz>, AppError>;
    async fn create_quiz(
        &self,
        user_id: i64,
        topic_id: i64,
        difficulty: Difficulty,
        questions: Vec<Question>,
    ) -> Result<Quiz, AppError>;

    async fn create_attempt(&self, user_id: i64, attempt: NewAttempt) -> Result<QuizAttempt, AppError>;
    /// Newest first.
    async fn list_attempts(&self, user_id: i64) -> Result<Vec<QuizAttempt>, AppError>;
    /// Attempt scores joined through quiz and topic to the subject name,
    /// oldest first.
    async fn scored_attempts(&self, user_id: i64) -> Result<Vec<ScoredAttempt>, AppError>;
}
