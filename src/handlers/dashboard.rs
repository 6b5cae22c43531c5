// src/handlers/dashboard.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::attempt::{DashboardStats, ScoredAttempt, SubjectScore},
    store::Store,
    utils::jwt::Claims,
};

const UNKNOWN_SUBJECT: &str = "Unknown";

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Overall and per-subject mean scores, each rounded to two decimals.
/// Subjects appear in order of their first attempt.
pub fn aggregate_scores(attempts: &[ScoredAttempt]) -> (f64, Vec<SubjectScore>) {
    if attempts.is_empty() {
        return (0.0, Vec::new());
    }

    let total: f64 = attempts.iter().map(|a| a.score).sum();
    let average = round2(total / attempts.len() as f64);

    // (name, sum, count)
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();
    for attempt in attempts {
        let name = attempt.subject_name.as_deref().unwrap_or(UNKNOWN_SUBJECT);
        match groups.iter_mut().find(|(n, _, _)| *n == name) {
            Some((_, sum, count)) => {
                *sum += attempt.score;
                *count += 1;
            }
            None => groups.push((name, attempt.score, 1)),
        }
    }

    let by_subject = groups
        .into_iter()
        .map(|(name, sum, count)| SubjectScore {
            name: name.to_string(),
            average: round2(sum / count as f64),
        })
        .collect();

    (average, by_subject)
}

/// GET /api/dashboard
///
/// Recomputed from the full attempt history on every request.
pub async fn get_dashboard(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let subject_count = store.list_subjects(user_id).await?.len();
    let attempts = store.scored_attempts(user_id).await?;
    let (average_score, scores_by_subject) = aggregate_scores(&attempts);

    Ok(Json(DashboardStats {
        subject_count,
        total_attempts: attempts.len(),
        average_score,
        scores_by_subject,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(subject: Option<&str>, score: f64) -> ScoredAttempt {
        ScoredAttempt {
            subject_name: subject.map(str::to_string),
            score,
        }
    }

    #[test]
    fn no_attempts_means_zero_and_no_groups() {
        assert_eq!(aggregate_scores(&[]), (0.0, Vec::new()));
    }

    #[test]
    fn groups_by_subject_in_first_appearance_order() {
        let attempts = [
            scored(Some("Biology"), 0.6),
            scored(Some("History"), 1.0),
            scored(Some("Biology"), 0.9),
        ];
        let (average, by_subject) = aggregate_scores(&attempts);

        assert_eq!(average, 0.83);
        assert_eq!(
            by_subject,
            vec![
                SubjectScore { name: "Biology".to_string(), average: 0.75 },
                SubjectScore { name: "History".to_string(), average: 1.0 },
            ]
        );
    }

    #[test]
    fn single_subject_average_matches_overall() {
        let attempts = [
            scored(Some("Biology"), 0.5),
            scored(Some("Biology"), 1.0),
            scored(Some("Biology"), 0.75),
        ];
        let (average, by_subject) = aggregate_scores(&attempts);

        assert_eq!(average, 0.75);
        assert_eq!(
            by_subject,
            vec![SubjectScore { name: "Biology".to_string(), average: 0.75 }]
        );
    }

    #[test]
    fn unresolved_subject_is_unknown() {
        let (_, by_subject) = aggregate_scores(&[scored(None, 0.4), scored(None, 0.2)]);
        assert_eq!(by_subject.len(), 1);
        assert_eq!(by_subject[0].name, UNKNOWN_SUBJECT);
        assert_eq!(by_subject[0].average, 0.3);
    }
}
