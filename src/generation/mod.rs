// src/generation/mod.rs

//! Topic, summary and quiz generation.
//!
//! Every entry point makes exactly one call to the configured
//! [`TextGenerator`]. Whatever goes wrong with that call (transport, quota,
//! timeout, malformed output) is logged and replaced by fallback content, so
//! these functions never fail.

pub mod client;
pub mod fallback;
pub mod output;
pub mod prompts;

use std::fmt;

use async_trait::async_trait;

use crate::models::{difficulty::Difficulty, quiz::Question};

/// Why a model call produced no usable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The model answered, but the answer does not fit the expected shape.
    Validation(String),
    /// The call itself failed: transport, status code, quota, credentials.
    Upstream(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Validation(msg) => write!(f, "invalid model output: {}", msg),
            GenerationError::Upstream(msg) => write!(f, "generation service error: {}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Upstream(err.to_string())
    }
}

/// A single completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    /// Ask the model for a JSON object instead of free text.
    pub json: bool,
}

/// Hosted text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError>;
}

pub async fn generate_topic(generator: &dyn TextGenerator, subject: &str, difficulty: Difficulty) -> String {
    tracing::info!(subject, %difficulty, "Generating topic");

    let result = generator
        .complete(prompts::topic(subject, difficulty))
        .await
        .and_then(|text| output::parse_topic(&text));

    match result {
        Ok(topic) => {
            tracing::info!(topic = %topic, "Topic generated");
            topic
        }
        Err(e) => {
            tracing::warn!(error = %e, "Topic generation failed, using fallback topics");
            fallback::topic(subject, difficulty)
        }
    }
}

pub async fn generate_summary(generator: &dyn TextGenerator, topic: &str, difficulty: Difficulty) -> String {
    tracing::info!(topic, %difficulty, "Generating summary");

    let result = generator
        .complete(prompts::summary(topic, difficulty))
        .await
        .and_then(|text| output::parse_summary(&text));

    match result {
        Ok(summary) => {
            tracing::info!("Summary generated successfully");
            summary
        }
        Err(e) => {
            tracing::warn!(error = %e, "Summary generation failed, using contextual summary");
            fallback::summary(topic, difficulty)
        }
    }
}

pub async fn generate_quiz(generator: &dyn TextGenerator, topic: &str, difficulty: Difficulty) -> Vec<Question> {
    tracing::info!(topic, %difficulty, "Generating quiz");

    let result = generator
        .complete(prompts::quiz(topic, difficulty))
        .await
        .and_then(|text| output::parse_quiz(&text));

    match result {
        Ok(questions) => {
            tracing::info!(count = questions.len(), "Quiz generated successfully");
            questions
        }
        Err(e) => {
            tracing::warn!(error = %e, "Quiz generation failed, using contextual quiz");
            fallback::quiz(topic, difficulty)
        }
    }
}
