//! Data-integrity violations of question records.

use thiserror::Error;

/// A single reason a record cannot be played.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordViolation {
    #[error("question text is empty")]
    EmptyText,

    #[error("expected at least {min} options, found {found}")]
    TooFewOptions { min: usize, found: usize },

    #[error("option '{value}' appears more than once")]
    DuplicateOption { value: String },

    #[error("answer must have exactly {expected} entries, found {found}")]
    AnswerLength { expected: usize, found: usize },

    #[error("answer value '{value}' is not among the options")]
    AnswerNotInOptions { value: String },

    #[error("category names must not be blank")]
    BlankCategory,
}

/// A record was skipped at load time.
///
/// Carries every violation found, not just the first.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("question rejected with {} violation(s)", .violations.len())]
pub struct RecordRejected {
    pub violations: Vec<RecordViolation>,
}
