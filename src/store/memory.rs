// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

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

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: Vec<User>,
    subjects: Vec<Subject>,
    topics: Vec<Topic>,
    summaries: HashMap<i64, Summary>,
    quizzes: Vec<Quiz>,
    attempts: Vec<QuizAttempt>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn with_summary(&self, topic: &Topic) -> TopicWithSummary {
        TopicWithSummary {
            topic: topic.clone(),
            summary: self.summaries.get(&topic.id).cloned(),
        }
    }

    /// Drops topics matching `remove` together with everything hanging off them.
    fn remove_topics(&mut self, remove: impl Fn(&Topic) -> bool) {
        let topic_ids: Vec<i64> = self.topics.iter().filter(|t| remove(*t)).map(|t| t.id).collect();
        self.topics.retain(|t| !topic_ids.contains(&t.id));
        self.summaries.retain(|topic_id, _| !topic_ids.contains(topic_id));

        let quiz_ids: Vec<i64> = self
            .quizzes
            .iter()
            .filter(|q| topic_ids.contains(&q.topic_id))
            .map(|q| q.id)
            .collect();
        self.quizzes.retain(|q| !quiz_ids.contains(&q.id));
        self.attempts.retain(|a| !quiz_ids.contains(&a.quiz_id));
    }
}

/// Process-local store used when no database is configured, and in tests.
/// Data is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let mut db = self.tables.write().await;
        if db.users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(AppError::Conflict(format!("Email '{}' is already registered", email)));
        }
        let user = User {
            id: db.next_id(),
            email: email.to_string(),
            password: password_hash.to_string(),
            created_at: Utc::now(),
        };
        db.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let db = self.tables.read().await;
        Ok(db.users.iter().find(|u| u.email.eq_ignore_ascii_case(email)).cloned())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let db = self.tables.read().await;
        Ok(db.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_subjects(&self, user_id: i64) -> Result<Vec<Subject>, AppError> {
        let db = self.tables.read().await;
        Ok(db.subjects.iter().filter(|s| s.user_id == user_id).cloned().collect())
    }

    async fn get_subject(&self, user_id: i64, id: i64) -> Result<Option<Subject>, AppError> {
        let db = self.tables.read().await;
        Ok(db
            .subjects
            .iter()
            .find(|s| s.id == id && s.user_id == user_id)
            .cloned())
    }

    async fn create_subject(&self, user_id: i64, subject: NewSubject) -> Result<Subject, AppError> {
        let mut db = self.tables.write().await;
        let subject = Subject {
            id: db.next_id(),
            user_id,
            name: subject.name,
            color: subject.color,
            created_at: Utc::now(),
        };
        db.subjects.push(subject.clone());
        Ok(subject)
    }

    async fn delete_subject(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let mut db = self.tables.write().await;
        let before = db.subjects.len();
        db.subjects.retain(|s| !(s.id == id && s.user_id == user_id));
        if db.subjects.len() == before {
            return Ok(false);
        }
        db.remove_topics(|t| t.subject_id == id);
        Ok(true)
    }

    async fn list_topics(&self, user_id: i64, subject_id: Option<i64>) -> Result<Vec<TopicWithSummary>, AppError> {
        let db = self.tables.read().await;
        Ok(db
            .topics
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .filter(|t| subject_id.is_none_or(|s| t.subject_id == s))
            .map(|t| db.with_summary(t))
            .collect())
    }

    async fn get_topic(&self, user_id: i64, id: i64) -> Result<Option<TopicWithSummary>, AppError> {
        let db = self.tables.read().await;
        Ok(db
            .topics
            .iter()
            .find(|t| t.id == id && t.user_id == user_id)
            .map(|t| db.with_summary(t)))
    }

    async fn create_topic(&self, user_id: i64, topic: NewTopic) -> Result<Topic, AppError> {
        let mut db = self.tables.write().await;
        let topic = Topic {
            id: db.next_id(),
            subject_id: topic.subject_id,
            user_id,
            title: topic.title,
            difficulty_level: topic.difficulty,
            created_at: Utc::now(),
        };
        db.topics.push(topic.clone());
        Ok(topic)
    }

    async fn delete_topic(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let mut db = self.tables.write().await;
        let exists = db.topics.iter().any(|t| t.id == id && t.user_id == user_id);
        if exists {
            db.remove_topics(|t| t.id == id);
        }
        Ok(exists)
    }

    async fn upsert_summary(&self, topic_id: i64, summary: &str) -> Result<Summary, AppError> {
        let mut db = self.tables.write().await;
        let now = Utc::now();
        let entry = db
            .summaries
            .entry(topic_id)
            .and_modify(|s| {
                s.summary = summary.to_string();
                s.updated_at = now;
            })
            .or_insert_with(|| Summary {
                topic_id,
                summary: summary.to_string(),
                created_at: now,
                updated_at: now,
            });
        Ok(entry.clone())
    }

    async fn list_quizzes(&self, user_id: i64) -> Result<Vec<QuizWithTopic>, AppError> {
        let db = self.tables.read().await;
        Ok(db
            .quizzes
            .iter()
            .rev()
            .filter(|q| q.user_id == user_id)
            .map(|q| QuizWithTopic {
                quiz: q.clone(),
                topic: db.topics.iter().find(|t| t.id == q.topic_id).map(|t| QuizTopicRef {
                    id: t.id,
                    title: t.title.clone(),
                    difficulty_level: t.difficulty_level,
                }),
            })
            .collect())
    }

    async fn get_quiz(&self, user_id: i64, id: i64) -> Result<Option<Quiz>, AppError> {
        let db = self.tables.read().await;
        Ok(db
            .quizzes
            .iter()
            .find(|q| q.id == id && q.user_id == user_id)
            .cloned())
    }

    async fn create_quiz(
        &self,
        user_id: i64,
        topic_id: i64,
        difficulty: Difficulty,
        questions: Vec<Question>,
    ) -> Result<Quiz, AppError> {
        let mut db = self.tables.write().await;
        let quiz = Quiz {
            id: db.next_id(),
            topic_id,
            user_id,
            difficulty_level: difficulty,
            questions,
            created_at: Utc::now(),
        };
        db.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn create_attempt(&self, user_id: i64, attempt: NewAttempt) -> Result<QuizAttempt, AppError> {
        let mut db = self.tables.write().await;
        let attempt = QuizAttempt {
            id: db.next_id(),
            quiz_id: attempt.quiz_id,
            user_id,
            score: attempt.score,
            total_questions: attempt.total_questions,
            answers: attempt.answers,
            created_at: Utc::now(),
        };
        db.attempts.push(attempt.clone());
        Ok(attempt)
    }

    async fn list_attempts(&self, user_id: i64) -> Result<Vec<QuizAttempt>, AppError> {
        let db = self.tables.read().await;
        Ok(db
            .attempts
            .iter()
            .rev()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn scored_attempts(&self, user_id: i64) -> Result<Vec<ScoredAttempt>, AppError> {
        let db = self.tables.read().await;
        let subject_name = |quiz_id: i64| -> Option<String> {
            let quiz = db.quizzes.iter().find(|q| q.id == quiz_id)?;
            let topic = db.topics.iter().find(|t| t.id == quiz.topic_id)?;
            let subject = db.subjects.iter().find(|s| s.id == topic.subject_id)?;
            Some(subject.name.clone())
        };
        Ok(db
            .attempts
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| ScoredAttempt {
                subject_name: subject_name(a.quiz_id),
                score: a.score,
            })
            .collect())
    }
}
