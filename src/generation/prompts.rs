// src/generation/prompts.rs

//! Prompt templates for the hosted model, keyed by difficulty.

use crate::{
    config::{OPTIONS_PER_QUESTION, QUIZ_QUESTION_COUNT},
    models::difficulty::{ByDifficulty, Difficulty},
};

use super::CompletionRequest;

pub const TOPIC_MAX_TOKENS: u32 = 100;
pub const SUMMARY_MAX_TOKENS: u32 = 1000;
pub const QUIZ_MAX_TOKENS: u32 = 1500;

const SUMMARY_GUIDE: ByDifficulty<&str> = ByDifficulty {
    easy: "Create an easy to understand, beginner-friendly summary (3-4 paragraphs) covering basic concepts and key points. Use simple language and everyday examples.",
    medium: "Create a comprehensive, intermediate-level summary (4-5 paragraphs) covering theory, applications, important details, and interconnected concepts.",
    hard: "Create an advanced, detailed summary (5-6 paragraphs) covering complex concepts, research, theoretical frameworks, cutting-edge developments, and nuanced understanding.",
};

const QUIZ_GUIDE: ByDifficulty<&str> = ByDifficulty {
    easy: "Create straightforward multiple-choice questions suitable for beginners. Questions should test basic understanding and definitions.",
    medium: "Create moderate multiple-choice questions that require understanding of concepts and their applications.",
    hard: "Create challenging multiple-choice questions that test deep understanding, analysis, and application of advanced concepts.",
};

pub fn topic(subject: &str, difficulty: Difficulty) -> CompletionRequest {
    CompletionRequest {
        prompt: format!(
            "Generate a {difficulty} level topic for studying {subject}. \
             Provide only the topic name, no explanation."
        ),
        max_tokens: TOPIC_MAX_TOKENS,
        json: false,
    }
}

pub fn summary(topic: &str, difficulty: Difficulty) -> CompletionRequest {
    let guide = SUMMARY_GUIDE.get(difficulty);
    CompletionRequest {
        prompt: format!(
            "You are an expert educator. Create an ACCURATE and INFORMATIVE summary about: \"{topic}\"\n\n\
             {guide}\n\n\
             Guidelines:\n\
             - Focus on FACTUAL, EDUCATIONAL content\n\
             - Include important concepts, definitions, and practical applications\n\
             - Use accurate information from current knowledge\n\
             - Format with clear paragraphs\n\
             - Make it suitable for student learning at the {difficulty} level\n\
             - Avoid generic information - be specific to \"{topic}\""
        ),
        max_tokens: SUMMARY_MAX_TOKENS,
        json: false,
    }
}

pub fn quiz(topic: &str, difficulty: Difficulty) -> CompletionRequest {
    let guide = QUIZ_GUIDE.get(difficulty);
    let count = QUIZ_QUESTION_COUNT;
    let options = OPTIONS_PER_QUESTION;
    let last = OPTIONS_PER_QUESTION - 1;
    CompletionRequest {
        prompt: format!(
            "Generate a {difficulty} level quiz with exactly {count} multiple choice questions about \"{topic}\".\n\n\
             {guide}\n\n\
             For each question:\n\
             - Create a clear, specific question\n\
             - Provide {options} plausible answer options (mix correct answer with realistic distractors)\n\
             - Mark the correct answer (0-{last} index)\n\
             - Provide a clear explanation of why the answer is correct\n\n\
             Return only a JSON object of the form \
             {{\"questions\": [{{\"question\": string, \"options\": [string, ...], \"correctAnswer\": number, \"explanation\": string}}]}}."
        ),
        max_tokens: QUIZ_MAX_TOKENS,
        json: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_prompt_mentions_subject_and_level() {
        let req = topic("History", Difficulty::Hard);
        assert!(req.prompt.contains("hard level topic for studying History"));
        assert_eq!(req.max_tokens, TOPIC_MAX_TOKENS);
        assert!(!req.json);
    }

    #[test]
    fn summary_prompt_uses_difficulty_guide() {
        let req = summary("Evolution", Difficulty::Easy);
        assert!(req.prompt.contains("\"Evolution\""));
        assert!(req.prompt.contains(SUMMARY_GUIDE.easy));
        assert!(!req.prompt.contains(SUMMARY_GUIDE.hard));
    }

    #[test]
    fn quiz_prompt_requests_json_schema() {
        let req = quiz("Photosynthesis", Difficulty::Medium);
        assert!(req.json);
        assert!(req.prompt.contains("exactly 5 multiple choice questions"));
        assert!(req.prompt.contains("(0-3 index)"));
        assert!(req.prompt.contains("\"correctAnswer\": number"));
        assert!(req.prompt.contains(QUIZ_GUIDE.medium));
    }
}
