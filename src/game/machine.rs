//! Attempt state machine: guess entry, scoring and end-of-game handling.

use crate::core::{
    score_row, AttemptRow, Guard, Guess, GuessStatus, Outcome, State, StateTransition,
    MAX_ATTEMPTS,
};
use crate::game::error::InputNotice;
use crate::game::reveal::RevealTicket;
use crate::game::state::GameState;
use chrono::Utc;

pub const WIN_MESSAGE: &str = "Correct sequence!";
pub const RETRY_MESSAGE: &str = "Incorrect sequence, try again.";
pub const REVEAL_MESSAGE: &str = "Game over. The correct sequence was:";

/// Result of a successfully submitted attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Attempt scored; the cursor moved to `next_attempt`.
    Continue {
        scored: AttemptRow,
        next_attempt: usize,
    },
    /// Attempt matched the answer exactly.
    Won { scored: AttemptRow },
    /// Last attempt used without a match. `reveal` must be applied after
    /// the reveal delay via [`AttemptMachine::apply_reveal`].
    Lost {
        scored: AttemptRow,
        reveal: RevealTicket,
    },
}

impl Evaluation {
    pub fn scored(&self) -> &AttemptRow {
        match self {
            Self::Continue { scored, .. } | Self::Won { scored } | Self::Lost { scored, .. } => {
                scored
            }
        }
    }
}

/// Exclusive owner of the [`GameState`] of the current question.
///
/// # Example
///
/// ```rust
/// use trizzle::core::{AttemptRow, Outcome};
/// use trizzle::game::{AttemptMachine, Evaluation};
///
/// let answer = AttemptRow::unset_from(&["A", "B", "C", "D", "E"]).unwrap();
/// let mut machine = AttemptMachine::new(answer);
///
/// for value in ["A", "B", "C", "D", "E"] {
///     machine.select_option(value).unwrap();
/// }
///
/// let evaluation = machine.check_answer().unwrap();
/// assert!(matches!(evaluation, Evaluation::Won { .. }));
/// assert_eq!(machine.state().outcome(), Outcome::Won);
/// assert!(machine.state().reveal_pending());
/// ```
#[derive(Debug)]
pub struct AttemptMachine {
    state: GameState,
    answer: AttemptRow,
    input_guard: Guard<Outcome>,
}

impl AttemptMachine {
    /// Fresh machine scoring against `answer`.
    pub fn new(answer: AttemptRow) -> Self {
        Self {
            state: GameState::new(),
            answer: answer.with_status(GuessStatus::Unset),
            input_guard: Guard::not_final(),
        }
    }

    /// Replace the game state with a fresh one for a new answer.
    ///
    /// The previous `game_id` is retired, so reveal tickets issued before
    /// the reset no longer apply.
    pub fn reset(&mut self, answer: AttemptRow) {
        self.state = GameState::new();
        self.answer = answer.with_status(GuessStatus::Unset);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn accepts_input(&self) -> bool {
        self.input_guard.check(&self.state.outcome)
    }

    fn reject<T>(&mut self, notice: InputNotice) -> Result<T, InputNotice> {
        if notice.is_displayed() {
            self.state.display_message = notice.to_string();
        }
        Err(notice)
    }

    fn current_row_mut(&mut self) -> &mut AttemptRow {
        let index = self.state.current_attempt;
        &mut self.state.grid[index]
    }

    /// Place `value` in the first empty slot of the current attempt.
    ///
    /// Returns the slot index filled.
    pub fn select_option(&mut self, value: &str) -> Result<usize, InputNotice> {
        if !self.accepts_input() {
            return Err(InputNotice::GameOver);
        }
        if self.state.current_row().contains_value(value) {
            return self.reject(InputNotice::DuplicateSelection);
        }
        match self.current_row_mut().fill_next(value) {
            Some(slot) => {
                self.state.display_message.clear();
                Ok(slot)
            }
            None => self.reject(InputNotice::RowFull),
        }
    }

    /// Clear the right-most filled slot of the current attempt.
    pub fn delete_last(&mut self) -> Option<Guess> {
        if !self.accepts_input() {
            return None;
        }
        self.current_row_mut().clear_last()
    }

    /// Score the current attempt.
    pub fn check_answer(&mut self) -> Result<Evaluation, InputNotice> {
        if !self.accepts_input() {
            return Err(InputNotice::GameOver);
        }
        let row = self.state.current_row();
        if !row.is_full() {
            return self.reject(InputNotice::RowIncomplete);
        }
        let key = row.key();
        if self.state.history.contains(&key) {
            return self.reject(InputNotice::AlreadyUsed);
        }

        let scored = score_row(row, &self.answer);
        self.state.history.insert(key);
        self.state.option_statuses.merge_row(&scored);
        *self.current_row_mut() = scored.clone();

        let attempt = self.state.current_attempt;
        if scored.all_exact() {
            self.transition(Outcome::Won);
            self.state.reveal_pending = true;
            self.state.display_message = WIN_MESSAGE.to_string();
            Ok(Evaluation::Won { scored })
        } else if attempt + 1 == MAX_ATTEMPTS {
            self.transition(Outcome::Lost);
            let reveal = RevealTicket::new(
                self.state.game_id,
                self.answer.with_status(GuessStatus::Exact),
            );
            Ok(Evaluation::Lost { scored, reveal })
        } else {
            self.state.current_attempt = attempt + 1;
            self.state.display_message = RETRY_MESSAGE.to_string();
            tracing::debug!(attempt = attempt + 1, "attempt scored");
            Ok(Evaluation::Continue {
                scored,
                next_attempt: attempt + 1,
            })
        }
    }

    /// Append the reveal row once the reveal delay has elapsed.
    ///
    /// Returns `false` without touching state when the ticket belongs to a
    /// superseded game or the answer is already revealed.
    pub fn apply_reveal(&mut self, ticket: &RevealTicket) -> bool {
        if ticket.game_id() != self.state.game_id {
            tracing::debug!(
                ticket = %ticket.game_id(),
                current = %self.state.game_id,
                "stale reveal ignored"
            );
            return false;
        }
        if self.state.outcome != Outcome::Lost || self.state.reveal_pending {
            return false;
        }

        self.state.grid.push(ticket.row().clone());
        self.state.reveal_pending = true;
        self.state.display_message = REVEAL_MESSAGE.to_string();
        true
    }

    fn transition(&mut self, to: Outcome) {
        let from = self.state.outcome;
        let attempt = self.state.current_attempt + 1;
        tracing::info!(from = from.name(), to = to.name(), attempt, "question finished");

        self.state.log = self.state.log.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            attempt,
        });
        self.state.outcome = to;
    }
}
