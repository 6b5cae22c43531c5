// src/generation/fallback/topics.rs

use rand::seq::SliceRandom;

use crate::models::difficulty::{ByDifficulty, Difficulty};

type TopicList = ByDifficulty<[&'static str; 3]>;

const MATHS: TopicList = ByDifficulty {
    easy: ["Basic Arithmetic", "Fractions", "Decimals"],
    medium: ["Algebra Basics", "Quadratic Equations", "Functions"],
    hard: ["Calculus Fundamentals", "Complex Numbers", "Vector Spaces"],
};

const SUBJECT_TOPICS: [(&str, TopicList); 4] = [
    ("maths", MATHS),
    (
        "english",
        ByDifficulty {
            easy: ["Pronouns", "Verb Tenses", "Parts of Speech"],
            medium: ["Essay Writing", "Figurative Language", "Literary Analysis"],
            hard: ["Rhetoric and Persuasion", "Postmodern Literature", "Critical Theory"],
        },
    ),
    (
        "science",
        ByDifficulty {
            easy: ["States of Matter", "Basic Cells", "Newton's Laws"],
            medium: ["Photosynthesis", "Genetics", "Chemical Reactions"],
            hard: ["Quantum Mechanics", "Thermodynamics", "Relativity"],
        },
    ),
    (
        "history",
        ByDifficulty {
            easy: ["Ancient Egypt", "Medieval Europe", "Industrial Revolution"],
            medium: ["World War II", "American Civil War", "French Revolution"],
            hard: ["Cold War Politics", "Fall of Rome", "Ottoman Empire Decline"],
        },
    ),
];

/// Candidate topic names for a subject; unknown subjects use the maths list.
pub(super) fn candidates(subject: &str, difficulty: Difficulty) -> &'static [&'static str; 3] {
    super::lookup(subject, &SUBJECT_TOPICS)
        .unwrap_or(&MATHS)
        .get(difficulty)
}

/// Picks one of the canned topics for `subject` at random.
pub fn topic(subject: &str, difficulty: Difficulty) -> String {
    let list = candidates(subject, difficulty);
    list.choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(list[0])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_subject_picks_from_its_list() {
        for _ in 0..20 {
            let topic = topic("History", Difficulty::Hard);
            assert!(SUBJECT_TOPICS[3].1.hard.contains(&topic.as_str()), "{}", topic);
        }
    }

    #[test]
    fn subject_match_is_symmetric_substring() {
        assert_eq!(candidates("Science 101", Difficulty::Easy), &SUBJECT_TOPICS[2].1.easy);
        assert_eq!(candidates("Eng", Difficulty::Medium), &SUBJECT_TOPICS[1].1.medium);
    }

    #[test]
    fn unknown_subject_uses_maths() {
        assert_eq!(candidates("Underwater Basket Weaving", Difficulty::Easy), &MATHS.easy);
    }

    #[test]
    fn unknown_difficulty_uses_medium() {
        let difficulty = Difficulty::lenient("legendary");
        assert_eq!(candidates("english", difficulty), &SUBJECT_TOPICS[1].1.medium);
    }
}
