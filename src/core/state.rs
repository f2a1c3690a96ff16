//! Outcome states of a single question.
//!
//! The attempt state machine moves through a tiny lifecycle:
//! `InProgress -> Won` or `InProgress -> Lost`. Both end states are terminal.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states tracked by the engine.
///
/// All methods are pure. States are plain values that can be cloned
/// into the outcome log and serialized into UI views.
///
/// # Example
///
/// ```rust
/// use trizzle::core::{Outcome, State};
///
/// assert_eq!(Outcome::InProgress.name(), "InProgress");
/// assert!(!Outcome::InProgress.is_final());
/// assert!(Outcome::Won.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// No user input is accepted once a terminal state is reached.
    fn is_final(&self) -> bool {
        false
    }
}

/// Result of the current question.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Guesses are still accepted.
    #[default]
    InProgress,
    /// An attempt matched the canonical answer exactly.
    Won,
    /// Every attempt was used without a match.
    Lost,
}

impl State for Outcome {
    fn name(&self) -> &str {
        match self {
            Self::InProgress => "InProgress",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
