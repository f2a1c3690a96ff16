//! Pure game core.
//!
//! - Outcome states via the `State` trait
//! - Guard predicates gating input
//! - Guess slots, attempt rows and scoring
//! - Guess history and the outcome transition log
//!
//! Nothing in this module performs I/O or schedules work.

mod guard;
mod guess;
mod history;
mod scoring;
mod state;

pub use guard::Guard;
pub use guess::{AttemptRow, Guess, GuessStatus, MAX_ATTEMPTS, SEQUENCE_LENGTH};
pub use history::{GuessHistory, OutcomeLog, StateTransition, TransitionLog};
pub use scoring::{score_row, OptionStatusMap};
pub use state::{Outcome, State};
