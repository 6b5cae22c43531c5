// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    generation::{self, TextGenerator},
    models::{
        attempt::{AttemptResult, NewAttempt, SubmitAttemptRequest},
        quiz::CreateQuizRequest,
    },
    session::QuizSession,
    store::Store,
    utils::jwt::Claims,
};

/// List the caller's quizzes, newest first, each with its topic.
pub async fn list_quizzes(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let quizzes = store.list_quizzes(claims.user_id()?).await?;
    Ok(Json(quizzes))
}

/// Generates questions for one of the caller's topics and stores the quiz.
pub async fn create_quiz(
    State(store): State<Arc<dyn Store>>,
    State(generator): State<Arc<dyn TextGenerator>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let topic = store
        .get_topic(user_id, payload.topic_id)
        .await?
        .ok_or(AppError::NotFound("Topic not found".to_string()))?
        .topic;

    let questions = generation::generate_quiz(generator.as_ref(), &topic.title, payload.difficulty).await;

    let quiz = store
        .create_quiz(user_id, topic.id, payload.difficulty, questions)
        .await?;
    tracing::info!(quiz_id = quiz.id, topic_id = topic.id, "Quiz stored");

    Ok((StatusCode::CREATED, Json(quiz)))
}

pub async fn get_quiz(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store
        .get_quiz(claims.user_id()?, id)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;
    Ok(Json(quiz))
}

/// Grades and records a quiz attempt.
///
/// The submitted answers are replayed through a `QuizSession`; the score is
/// always recomputed from the stored questions.
pub async fn submit_attempt(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<SubmitAttemptRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let quiz = store
        .get_quiz(user_id, id)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    if payload.answers.len() != quiz.questions.len() {
        return Err(AppError::BadRequest(format!(
            "Expected {} answers, got {}",
            quiz.questions.len(),
            payload.answers.len()
        )));
    }

    let mut session = QuizSession::new(&quiz.questions)?;
    session.replay(&payload.answers)?;
    let outcome = session.submit()?.clone();

    let attempt = store
        .create_attempt(
            user_id,
            NewAttempt {
                quiz_id: quiz.id,
                score: outcome.score,
                total_questions: outcome.total_questions as i32,
                answers: payload.answers,
            },
        )
        .await?;

    tracing::info!(
        attempt_id = attempt.id,
        quiz_id = quiz.id,
        correct = outcome.correct_count,
        total = outcome.total_questions,
        "Quiz attempt recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(AttemptResult {
            percentage: outcome.percentage(),
            passed: outcome.passed(),
            correct_count: outcome.correct_count,
            total_questions: outcome.total_questions,
            review: outcome.review,
            attempt,
        }),
    ))
}

/// List the caller's attempts, newest first.
pub async fn list_attempts(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = store.list_attempts(claims.user_id()?).await?;
    Ok(Json(attempts))
}
