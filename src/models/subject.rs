// src/models/subject.rs

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid")
});

/// Represents the 'subjects' table in the database.
/// A user-owned category that groups topics.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub user_id: i64,
    pub name: String,

    /// Display color in `#rrggbb` form.
    pub color: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a new subject.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubjectRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = validate_color))]
    pub color: Option<String>,
}

/// Fields the store needs to insert a subject.
#[derive(Debug, Clone)]
pub struct NewSubject {
    pub name: String,
    pub color: String,
}

fn validate_color(color: &str) -> Result<(), validator::ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(validator::ValidationError::new("invalid_hex_color"));
    }
    Ok(())
}

/// Picks a random `#rrggbb` color for subjects created without one.
pub fn random_color() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..=0xFF_FFFF);
    format!("#{:06x}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_color_is_always_six_hex_digits() {
        for _ in 0..200 {
            let color = random_color();
            assert!(HEX_COLOR.is_match(&color), "{}", color);
        }
    }

    #[test]
    fn color_validation() {
        let ok = CreateSubjectRequest {
            name: "Biology".to_string(),
            color: Some("#3B82F6".to_string()),
        };
        assert!(ok.validate().is_ok());

        let bad = CreateSubjectRequest {
            name: "Biology".to_string(),
            color: Some("blue".to_string()),
        };
        assert!(bad.validate().is_err());

        let absent = CreateSubjectRequest {
            name: "Biology".to_string(),
            color: None,
        };
        assert!(absent.validate().is_ok());
    }
}
