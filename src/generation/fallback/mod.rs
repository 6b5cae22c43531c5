// src/generation/fallback/mod.rs

//! Hand-authored content served when the model call fails.
//!
//! Lookup lower-cases the request string and compares it with each known key
//! by substring containment in either direction. The first key that matches
//! wins; otherwise the generic templates are filled in with the literal
//! request string.

mod quizzes;
mod summaries;
mod topics;

pub use quizzes::quiz;
pub use summaries::summary;
pub use topics::topic;

use crate::models::quiz::Question;

/// Placeholder replaced by the requested topic in generic templates.
const TOPIC_PLACEHOLDER: &str = "{topic}";

/// `true` when either string contains the other. `input` must already be
/// lower-cased.
pub fn matches_key(input: &str, key: &str) -> bool {
    input.contains(key) || key.contains(input)
}

/// First entry whose key matches `input`, case-insensitively.
fn lookup<'a, T>(input: &str, entries: &'a [(&'static str, T)]) -> Option<&'a T> {
    let lowered = input.to_lowercase();
    entries
        .iter()
        .find(|(key, _)| matches_key(&lowered, key))
        .map(|(_, value)| value)
}

fn fill(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

/// Static question definition; generic ones carry `{topic}` placeholders.
#[derive(Debug, Clone, Copy)]
struct CannedQuestion {
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

impl CannedQuestion {
    fn render(&self, topic: &str) -> Question {
        Question {
            question: fill(self.question, topic),
            options: self.options.iter().map(|o| fill(o, topic)).collect(),
            correct_answer: self.correct,
            explanation: fill(self.explanation, topic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_works_both_ways() {
        assert!(matches_key("photosynthesis in plants", "photosynthesis"));
        assert!(matches_key("photo", "photosynthesis"));
        assert!(!matches_key("biology", "photosynthesis"));
    }

    #[test]
    fn lookup_is_case_insensitive_and_ordered() {
        let entries = [("evolution", 1), ("climate change", 2), ("climate", 3)];
        assert_eq!(lookup("Climate Change Basics", &entries), Some(&2));
        assert_eq!(lookup("EVOLUTION", &entries), Some(&1));
        assert_eq!(lookup("Geometry", &entries), None);
    }

    #[test]
    fn fill_replaces_every_placeholder() {
        assert_eq!(fill("{topic} and {topic}", "Rust"), "Rust and Rust");
    }
}
