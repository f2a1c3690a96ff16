//! User-input notices.

use thiserror::Error;

/// A rejected user action.
///
/// The `Display` text is the message shown to the player. State is left
/// unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputNotice {
    #[error("You have already selected this guess in the current attempt.")]
    DuplicateSelection,

    #[error("Current attempt is full. Submit your guess or delete a guess to change it.")]
    RowFull,

    #[error("Each guess must be exactly 5 answers long.")]
    RowIncomplete,

    #[error("You already used that guess.")]
    AlreadyUsed,

    #[error("This question is over. Move on to the next one.")]
    GameOver,

    #[error("No questions available.")]
    NoQuestion,
}

impl InputNotice {
    /// Whether the notice replaces the on-screen message.
    ///
    /// Input against a finished or missing question is ignored silently.
    pub fn is_displayed(self) -> bool {
        !matches!(self, Self::GameOver | Self::NoQuestion)
    }
}
