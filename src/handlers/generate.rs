// src/handlers/generate.rs

//! Public generation endpoints. Bodies are parsed by hand so that a missing
//! field is a 400 with a fixed message while a body that is not JSON at all
//! surfaces as a 500.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use serde_json::{Value, json};

use crate::{
    error::AppError,
    generation::{self, TextGenerator},
    models::difficulty::Difficulty,
};

/// Returns the field when it is a non-empty string.
fn required<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Whether a JSON value counts as "given": not null, `false`, `0` or `""`.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_body(body: &Bytes, with_details: bool) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::RequestFailed {
        message: e.to_string(),
        details: with_details.then(|| format!("{:?}", e)),
    })
}

/// Extracts `(text, difficulty)` from the body or fails with the endpoint's
/// missing-field message.
///
/// The text field must be a non-empty string. `difficulty` only has to be
/// present: strings go through `resolve`, and any other value (a number,
/// `true`, an object) resolves to `Medium`.
fn text_and_difficulty<'a>(
    body: &'a Value,
    text_field: &str,
    missing: &str,
    resolve: fn(&str) -> Difficulty,
) -> Result<(&'a str, Difficulty), AppError> {
    let difficulty = body.get("difficulty").filter(|value| is_present(value));

    match (required(body, text_field), difficulty) {
        (Some(text), Some(difficulty)) => {
            let difficulty = difficulty.as_str().map(resolve).unwrap_or_default();
            Ok((text, difficulty))
        }
        _ => Err(AppError::BadRequest(missing.to_string())),
    }
}

/// POST /api/ai/generate-topic
pub async fn generate_topic(
    State(generator): State<Arc<dyn TextGenerator>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_body(&body, true)?;
    let (subject, difficulty) = text_and_difficulty(
        &body,
        "subject",
        "Missing subject or difficulty",
        Difficulty::lenient_ignore_case,
    )?;

    let topic = generation::generate_topic(generator.as_ref(), subject, difficulty).await;

    Ok(Json(json!({ "topic": topic })))
}

/// POST /api/ai/generate-summary
pub async fn generate_summary(
    State(generator): State<Arc<dyn TextGenerator>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_body(&body, false)?;
    let (topic, difficulty) =
        text_and_difficulty(&body, "topic", "Missing topic or difficulty", Difficulty::lenient)?;

    let summary = generation::generate_summary(generator.as_ref(), topic, difficulty).await;

    Ok(Json(json!({ "summary": summary })))
}

/// POST /api/ai/generate-quiz
pub async fn generate_quiz(
    State(generator): State<Arc<dyn TextGenerator>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_body(&body, false)?;
    let (topic, difficulty) =
        text_and_difficulty(&body, "topic", "Missing topic or difficulty", Difficulty::lenient)?;

    let questions = generation::generate_quiz(generator.as_ref(), topic, difficulty).await;

    Ok(Json(json!({ "questions": questions })))
}
