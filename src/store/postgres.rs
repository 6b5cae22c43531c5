// src/store/postgres.rs

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, postgres::PgPoolOptions, types::Json};

use crate::{
    error::AppError,
    models::{
        attempt::{NewAttempt, QuizAttempt, ScoredAttempt},
        difficulty::Difficulty,
        quiz::{Question, Quiz, QuizTopicRef, QuizWithTopic},
        subject::{NewSubject, Subject},
        topic::{NewTopic, Summary, Topic, TopicWithSummary},
        user::User,
    },
};

use super::Store;

const CONNECT_RETRIES: u32 = 5;

/// Postgres-backed store. Referential cleanup is done by `ON DELETE CASCADE`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects with a short retry loop (the database container may still be
    /// starting) and applies the embedded migrations.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let mut retry_count = 0;
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(3))
                .connect(database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retry_count < CONNECT_RETRIES => {
                    retry_count += 1;
                    tracing::warn!(
                        "Database not ready, retrying in 2s... (Attempt {}): {}",
                        retry_count,
                        e
                    );
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
                Err(e) => return Err(e),
            }
        };
        tracing::info!("Database connected...");

        tracing::info!("Running migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations applied successfully.");

        Ok(Self::new(pool))
    }
}

#[derive(FromRow)]
struct TopicRow {
    id: i64,
    subject_id: i64,
    user_id: i64,
    title: String,
    difficulty_level: String,
    created_at: DateTime<Utc>,
    summary: Option<String>,
    summary_created_at: Option<DateTime<Utc>>,
    summary_updated_at: Option<DateTime<Utc>>,
}

impl TopicRow {
    fn into_topic(self) -> Result<TopicWithSummary, AppError> {
        let summary = match (self.summary, self.summary_created_at, self.summary_updated_at) {
            (Some(summary), Some(created_at), Some(updated_at)) => Some(Summary {
                topic_id: self.id,
                summary,
                created_at,
                updated_at,
            }),
            _ => None,
        };
        Ok(TopicWithSummary {
            topic: Topic {
                id: self.id,
                subject_id: self.subject_id,
                user_id: self.user_id,
                title: self.title,
                difficulty_level: difficulty(&self.difficulty_level)?,
                created_at: self.created_at,
            },
            summary,
        })
    }
}

#[derive(FromRow)]
struct QuizRow {
    id: i64,
    topic_id: i64,
    user_id: i64,
    difficulty_level: String,
    questions: Json<Vec<Question>>,
    created_at: DateTime<Utc>,
}

impl QuizRow {
    fn into_quiz(self) -> Result<Quiz, AppError> {
        Ok(Quiz {
            id: self.id,
            topic_id: self.topic_id,
            user_id: self.user_id,
            difficulty_level: difficulty(&self.difficulty_level)?,
            questions: self.questions.0,
            created_at: self.created_at,
        })
    }
}

#[derive(FromRow)]
struct QuizListRow {
    #[sqlx(flatten)]
    quiz: QuizRow,
    topic_title: Option<String>,
    topic_difficulty: Option<String>,
}

#[derive(FromRow)]
struct AttemptRow {
    id: i64,
    quiz_id: i64,
    user_id: i64,
    score: f64,
    total_questions: i32,
    answers: Json<Vec<Option<usize>>>,
    created_at: DateTime<Utc>,
}

impl From<AttemptRow> for QuizAttempt {
    fn from(row: AttemptRow) -> Self {
        QuizAttempt {
            id: row.id,
            quiz_id: row.quiz_id,
            user_id: row.user_id,
            score: row.score,
            total_questions: row.total_questions,
            answers: row.answers.0,
            created_at: row.created_at,
        }
    }
}

/// Stored levels are constrained by the schema, so a mismatch is a server error.
fn difficulty(raw: &str) -> Result<Difficulty, AppError> {
    raw.parse::<Difficulty>()
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}

const TOPIC_SELECT: &str = r#"
    SELECT
        t.id, t.subject_id, t.user_id, t.title, t.difficulty_level, t.created_at,
        s.summary,
        s.created_at AS summary_created_at,
        s.updated_at AS summary_updated_at
    FROM topics t
    LEFT JOIN topic_summaries s ON s.topic_id = t.id
"#;

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING id, email, password, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if duplicate {
                AppError::Conflict(format!("Email '{}' is already registered", email))
            } else {
                tracing::error!("Failed to register user: {:?}", e);
                AppError::from(e)
            }
        })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list_subjects(&self, user_id: i64) -> Result<Vec<Subject>, AppError> {
        let subjects = sqlx::query_as::<_, Subject>(
            r#"
            SELECT id, user_id, name, color, created_at
            FROM subjects
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(subjects)
    }

    async fn get_subject(&self, user_id: i64, id: i64) -> Result<Option<Subject>, AppError> {
        let subject = sqlx::query_as::<_, Subject>(
            "SELECT id, user_id, name, color, created_at FROM subjects WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(subject)
    }

    async fn create_subject(&self, user_id: i64, subject: NewSubject) -> Result<Subject, AppError> {
        let subject = sqlx::query_as::<_, Subject>(
            r#"
            INSERT INTO subjects (user_id, name, color)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, color, created_at
            "#,
        )
        .bind(user_id)
        .bind(&subject.name)
        .bind(&subject.color)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create subject: {:?}", e);
            AppError::from(e)
        })?;
        Ok(subject)
    }

    async fn delete_subject(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_topics(&self, user_id: i64, subject_id: Option<i64>) -> Result<Vec<TopicWithSummary>, AppError> {
        let sql = format!(
            "{} WHERE t.user_id = $1 AND ($2::BIGINT IS NULL OR t.subject_id = $2) \
             ORDER BY t.created_at DESC, t.id DESC",
            TOPIC_SELECT
        );
        sqlx::query_as::<_, TopicRow>(&sql)
            .bind(user_id)
            .bind(subject_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(TopicRow::into_topic)
            .collect()
    }

    async fn get_topic(&self, user_id: i64, id: i64) -> Result<Option<TopicWithSummary>, AppError> {
        let sql = format!("{} WHERE t.id = $1 AND t.user_id = $2", TOPIC_SELECT);
        sqlx::query_as::<_, TopicRow>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .map(TopicRow::into_topic)
            .transpose()
    }

    async fn create_topic(&self, user_id: i64, topic: NewTopic) -> Result<Topic, AppError> {
        let row = sqlx::query_as::<_, TopicRow>(
            r#"
            INSERT INTO topics (subject_id, user_id, title, difficulty_level)
            VALUES ($1, $2, $3, $4)
            RETURNING
                id, subject_id, user_id, title, difficulty_level, created_at,
                NULL::TEXT AS summary,
                NULL::TIMESTAMPTZ AS summary_created_at,
                NULL::TIMESTAMPTZ AS summary_updated_at
            "#,
        )
        .bind(topic.subject_id)
        .bind(user_id)
        .bind(&topic.title)
        .bind(topic.difficulty.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create topic: {:?}", e);
            AppError::from(e)
        })?;
        Ok(row.into_topic()?.topic)
    }

    async fn delete_topic(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn upsert_summary(&self, topic_id: i64, summary: &str) -> Result<Summary, AppError> {
        let row: (i64, String, DateTime<Utc>, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO topic_summaries (topic_id, summary)
            VALUES ($1, $2)
            ON CONFLICT (topic_id) DO UPDATE SET
                summary = EXCLUDED.summary,
                updated_at = NOW()
            RETURNING topic_id, summary, created_at, updated_at
            "#,
        )
        .bind(topic_id)
        .bind(summary)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert summary: {:?}", e);
            AppError::from(e)
        })?;

        Ok(Summary {
            topic_id: row.0,
            summary: row.1,
            created_at: row.2,
            updated_at: row.3,
        })
    }

    async fn list_quizzes(&self, user_id: i64) -> Result<Vec<QuizWithTopic>, AppError> {
        let rows = sqlx::query_as::<_, QuizListRow>(
            r#"
            SELECT
                q.id, q.topic_id, q.user_id, q.difficulty_level, q.questions, q.created_at,
                t.title AS topic_title,
                t.difficulty_level AS topic_difficulty
            FROM quizzes q
            LEFT JOIN topics t ON t.id = q.topic_id
            WHERE q.user_id = $1
            ORDER BY q.created_at DESC, q.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let topic = match (row.topic_title, row.topic_difficulty) {
                    (Some(title), Some(level)) => Some(QuizTopicRef {
                        id: row.quiz.topic_id,
                        title,
                        difficulty_level: difficulty(&level)?,
                    }),
                    _ => None,
                };
                Ok(QuizWithTopic {
                    quiz: row.quiz.into_quiz()?,
                    topic,
                })
            })
            .collect()
    }

    async fn get_quiz(&self, user_id: i64, id: i64) -> Result<Option<Quiz>, AppError> {
        sqlx::query_as::<_, QuizRow>(
            r#"
            SELECT id, topic_id, user_id, difficulty_level, questions, created_at
            FROM quizzes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .map(QuizRow::into_quiz)
        .transpose()
    }

    async fn create_quiz(
        &self,
        user_id: i64,
        topic_id: i64,
        difficulty: Difficulty,
        questions: Vec<Question>,
    ) -> Result<Quiz, AppError> {
        sqlx::query_as::<_, QuizRow>(
            r#"
            INSERT INTO quizzes (topic_id, user_id, difficulty_level, questions)
            VALUES ($1, $2, $3, $4)
            RETURNING id, topic_id, user_id, difficulty_level, questions, created_at
            "#,
        )
        .bind(topic_id)
        .bind(user_id)
        .bind(difficulty.as_str())
        .bind(Json(questions))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store quiz: {:?}", e);
            AppError::from(e)
        })?
        .into_quiz()
    }

    async fn create_attempt(&self, user_id: i64, attempt: NewAttempt) -> Result<QuizAttempt, AppError> {
        let row = sqlx::query_as::<_, AttemptRow>(
            r#"
            INSERT INTO quiz_attempts (quiz_id, user_id, score, total_questions, answers)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, quiz_id, user_id, score, total_questions, answers, created_at
            "#,
        )
        .bind(attempt.quiz_id)
        .bind(user_id)
        .bind(attempt.score)
        .bind(attempt.total_questions)
        .bind(Json(attempt.answers))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save quiz attempt: {:?}", e);
            AppError::from(e)
        })?;
        Ok(row.into())
    }

    async fn list_attempts(&self, user_id: i64) -> Result<Vec<QuizAttempt>, AppError> {
        let rows = sqlx::query_as::<_, AttemptRow>(
            r#"
            SELECT id, quiz_id, user_id, score, total_questions, answers, created_at
            FROM quiz_attempts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(QuizAttempt::from).collect())
    }

    async fn scored_attempts(&self, user_id: i64) -> Result<Vec<ScoredAttempt>, AppError> {
        let rows: Vec<(Option<String>, f64)> = sqlx::query_as(
            r#"
            SELECT s.name, a.score
            FROM quiz_attempts a
            LEFT JOIN quizzes q ON q.id = a.quiz_id
            LEFT JOIN topics t ON t.id = q.topic_id
            LEFT JOIN subjects s ON s.id = t.subject_id
            WHERE a.user_id = $1
            ORDER BY a.created_at, a.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(subject_name, score)| ScoredAttempt { subject_name, score })
            .collect())
    }
}
