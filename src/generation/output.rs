// src/generation/output.rs

//! Coerces raw model output into typed payloads.

use serde::Deserialize;

use crate::{config::OPTIONS_PER_QUESTION, models::quiz::Question};

use super::GenerationError;

#[derive(Deserialize)]
struct RawQuiz {
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: i64,
    explanation: String,
}

pub fn parse_topic(text: &str) -> Result<String, GenerationError> {
    let topic = text.trim();
    if topic.is_empty() {
        return Err(GenerationError::Validation("empty topic".to_string()));
    }
    Ok(topic.to_string())
}

pub fn parse_summary(text: &str) -> Result<String, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::Validation("empty summary".to_string()));
    }
    Ok(text.to_string())
}

/// Validates `{questions: [{question, options[4], correctAnswer 0..=3, explanation}]}`.
pub fn parse_quiz(text: &str) -> Result<Vec<Question>, GenerationError> {
    let raw: RawQuiz = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| GenerationError::Validation(format!("quiz schema mismatch: {}", e)))?;

    if raw.questions.is_empty() {
        return Err(GenerationError::Validation("quiz has no questions".to_string()));
    }

    raw.questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            if q.options.len() != OPTIONS_PER_QUESTION {
                return Err(GenerationError::Validation(format!(
                    "question {} has {} options",
                    i + 1,
                    q.options.len()
                )));
            }
            let correct_answer = usize::try_from(q.correct_answer)
                .ok()
                .filter(|&c| c < OPTIONS_PER_QUESTION)
                .ok_or_else(|| {
                    GenerationError::Validation(format!(
                        "question {} has correctAnswer {}",
                        i + 1,
                        q.correct_answer
                    ))
                })?;
            Ok(Question {
                question: q.question,
                options: q.options,
                correct_answer,
                explanation: q.explanation,
            })
        })
        .collect()
}

/// Models sometimes wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"questions":[{"question":"Q1","options":["a","b","c","d"],"correctAnswer":2,"explanation":"e"}]}"#;

    #[test]
    fn accepts_valid_quiz() {
        let questions = parse_quiz(VALID).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, 2);
        assert_eq!(questions[0].options[3], "d");
    }

    #[test]
    fn accepts_fenced_quiz() {
        let fenced = format!("```json\n{}\n```", VALID);
        assert_eq!(parse_quiz(&fenced).unwrap().len(), 1);
    }

    #[test]
    fn rejects_wrong_option_count() {
        let text = r#"{"questions":[{"question":"Q","options":["a","b","c"],"correctAnswer":0,"explanation":"e"}]}"#;
        assert!(matches!(parse_quiz(text), Err(GenerationError::Validation(_))));
    }

    #[test]
    fn rejects_out_of_range_answer() {
        for bad in ["4", "-1"] {
            let text = format!(
                r#"{{"questions":[{{"question":"Q","options":["a","b","c","d"],"correctAnswer":{},"explanation":"e"}}]}}"#,
                bad
            );
            assert!(matches!(parse_quiz(&text), Err(GenerationError::Validation(_))));
        }
    }

    #[test]
    fn rejects_missing_fields_and_empty_lists() {
        let missing = r#"{"questions":[{"question":"Q","options":["a","b","c","d"],"correctAnswer":0}]}"#;
        assert!(parse_quiz(missing).is_err());
        assert!(parse_quiz(r#"{"questions":[]}"#).is_err());
        assert!(parse_quiz("Sure! Here is your quiz").is_err());
    }

    #[test]
    fn topic_is_trimmed_and_non_empty() {
        assert_eq!(parse_topic("  Fractions \n").unwrap(), "Fractions");
        assert!(parse_topic("   ").is_err());
        assert!(parse_summary("\n").is_err());
    }
}
