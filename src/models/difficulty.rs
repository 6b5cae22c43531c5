// src/models/difficulty.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Difficulty level of a topic or quiz.
/// Selects the prompt template and the fallback content branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Resolves any string to a difficulty. Only the exact lowercase names
    /// match; everything else, including `"EASY"`, becomes `Medium`.
    pub fn lenient(raw: &str) -> Self {
        match raw {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// Like [`Difficulty::lenient`] after lowercasing. Used for topic
    /// suggestions, where `"Hard"` still means hard.
    pub fn lenient_ignore_case(raw: &str) -> Self {
        Self::lenient(&raw.to_lowercase())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty '{}'", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = UnknownDifficulty;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One value per difficulty level.
#[derive(Debug, Clone, Copy)]
pub struct ByDifficulty<T> {
    pub easy: T,
    pub medium: T,
    pub hard: T,
}

impl<T> ByDifficulty<T> {
    pub fn get(&self, difficulty: Difficulty) -> &T {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn lenient_falls_back_to_medium() {
        assert_eq!(Difficulty::lenient("expert"), Difficulty::Medium);
        assert_eq!(Difficulty::lenient(""), Difficulty::Medium);
        assert_eq!(Difficulty::lenient("EASY"), Difficulty::Medium);
        assert_eq!(Difficulty::lenient(" hard "), Difficulty::Medium);
        assert_eq!(Difficulty::lenient("hard"), Difficulty::Hard);
    }

    #[test]
    fn ignore_case_variant_lowercases_first() {
        assert_eq!(Difficulty::lenient_ignore_case("EASY"), Difficulty::Easy);
        assert_eq!(Difficulty::lenient_ignore_case("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::lenient_ignore_case("expert"), Difficulty::Medium);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
        let d: Difficulty = serde_json::from_str("\"Hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
        assert!(serde_json::from_str::<Difficulty>("\"expert\"").is_err());
    }
}
