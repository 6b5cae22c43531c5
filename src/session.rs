// src/session.rs

//! Quiz-taking state machine.
//!
//! A session walks over a fixed list of questions, holding one answer slot per
//! question. Navigation only moves the cursor; selecting only fills the slot
//! under the cursor. Submission is possible once every slot is filled and
//! freezes the session with a graded outcome.

use std::fmt;

use serde::Serialize;

use crate::{config::PASSING_SCORE, models::quiz::Question};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyQuiz,
    IndexOutOfRange { index: usize, len: usize },
    OptionOutOfRange { option: usize, options: usize },
    Incomplete { unanswered: usize },
    AlreadySubmitted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyQuiz => write!(f, "Quiz has no questions"),
            SessionError::IndexOutOfRange { index, len } => {
                write!(f, "Question {} does not exist (quiz has {})", index + 1, len)
            }
            SessionError::OptionOutOfRange { option, options } => {
                write!(f, "Option {} is out of range (question has {})", option, options)
            }
            SessionError::Incomplete { unanswered } => write!(
                f,
                "All questions must be answered before submitting ({} unanswered)",
                unanswered
            ),
            SessionError::AlreadySubmitted => write!(f, "Quiz was already submitted"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Per-question entry of the results screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionReview {
    pub question: String,
    pub selected: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
    pub explanation: String,
}

/// Graded result of a submitted session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizOutcome {
    pub correct_count: usize,
    pub total_questions: usize,
    /// `correct_count / total_questions`.
    pub score: f64,
    pub answers: Vec<usize>,
    pub review: Vec<QuestionReview>,
}

impl QuizOutcome {
    pub fn percentage(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }

    pub fn passed(&self) -> bool {
        self.score >= PASSING_SCORE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    InProgress { current: usize },
    Submitted(QuizOutcome),
}

#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    questions: &'q [Question],
    answers: Vec<Option<usize>>,
    state: SessionState,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [Question]) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }
        Ok(Self {
            questions,
            answers: vec![None; questions.len()],
            state: SessionState::InProgress { current: 0 },
        })
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Cursor position, or `None` once submitted.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { current } => Some(current),
            SessionState::Submitted(_) => None,
        }
    }

    pub fn current_question(&self) -> Option<&'q Question> {
        let questions = self.questions;
        self.current_index().map(|i| &questions[i])
    }

    pub fn outcome(&self) -> Option<&QuizOutcome> {
        match &self.state {
            SessionState::Submitted(outcome) => Some(outcome),
            SessionState::InProgress { .. } => None,
        }
    }

    /// Fills the slot of the current question. Does not advance.
    pub fn select(&mut self, option: usize) -> Result<(), SessionError> {
        let current = self.cursor()?;
        let options = self.questions[current].options.len();
        if option >= options {
            return Err(SessionError::OptionOutOfRange { option, options });
        }
        self.answers[current] = Some(option);
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), SessionError> {
        let current = self.cursor()?;
        let last = self.questions.len() - 1;
        self.state = SessionState::InProgress {
            current: (current + 1).min(last),
        };
        Ok(())
    }

    pub fn previous(&mut self) -> Result<(), SessionError> {
        let current = self.cursor()?;
        self.state = SessionState::InProgress {
            current: current.saturating_sub(1),
        };
        Ok(())
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        self.cursor()?;
        if index >= self.questions.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.state = SessionState::InProgress { current: index };
        Ok(())
    }

    pub fn unanswered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_none()).count()
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.state, SessionState::InProgress { .. }) && self.unanswered() == 0
    }

    /// Grades the session and freezes it.
    pub fn submit(&mut self) -> Result<&QuizOutcome, SessionError> {
        self.cursor()?;
        let unanswered = self.unanswered();
        if unanswered > 0 {
            return Err(SessionError::Incomplete { unanswered });
        }

        let answers: Vec<usize> = self.answers.iter().flatten().copied().collect();
        let review: Vec<QuestionReview> = self
            .questions
            .iter()
            .zip(&answers)
            .map(|(q, &selected)| QuestionReview {
                question: q.question.clone(),
                selected,
                correct_answer: q.correct_answer,
                is_correct: selected == q.correct_answer,
                explanation: q.explanation.clone(),
            })
            .collect();

        let correct_count = review.iter().filter(|r| r.is_correct).count();
        let total_questions = self.questions.len();

        self.state = SessionState::Submitted(QuizOutcome {
            correct_count,
            total_questions,
            score: correct_count as f64 / total_questions as f64,
            answers,
            review,
        });

        self.outcome().ok_or(SessionError::AlreadySubmitted)
    }

    /// Fills every slot from a recorded answer list, as a client would by
    /// jumping to each question and selecting. `None` entries stay empty.
    pub fn replay(&mut self, answers: &[Option<usize>]) -> Result<(), SessionError> {
        for (index, answer) in answers.iter().enumerate() {
            self.jump_to(index)?;
            if let Some(option) = answer {
                self.select(*option)?;
            }
        }
        Ok(())
    }

    fn cursor(&self) -> Result<usize, SessionError> {
        self.current_index().ok_or(SessionError::AlreadySubmitted)
    }
}
