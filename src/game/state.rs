//! The per-question game state value.

use crate::core::{
    AttemptRow, GuessHistory, GuessStatus, OptionStatusMap, Outcome, OutcomeLog, State,
    MAX_ATTEMPTS,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything the attempt state machine tracks for one question.
///
/// A fresh value is created on every question load. `game_id` identifies
/// that generation so late callbacks aimed at a superseded state can be
/// recognised and dropped.
///
/// Invariant: only the row at `current_attempt` may hold `Empty`/`Unset`
/// slots; all earlier rows are fully scored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub(super) game_id: Uuid,
    pub(super) grid: Vec<AttemptRow>,
    pub(super) current_attempt: usize,
    pub(super) option_statuses: OptionStatusMap,
    pub(super) history: GuessHistory,
    pub(super) outcome: Outcome,
    pub(super) reveal_pending: bool,
    pub(super) display_message: String,
    pub(super) log: OutcomeLog,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Initial state: five empty rows, cursor 0, nothing scored.
    pub fn new() -> Self {
        Self {
            game_id: Uuid::new_v4(),
            grid: vec![AttemptRow::new(); MAX_ATTEMPTS],
            current_attempt: 0,
            option_statuses: OptionStatusMap::new(),
            history: GuessHistory::new(),
            outcome: Outcome::InProgress,
            reveal_pending: false,
            display_message: String::new(),
            log: OutcomeLog::new(),
        }
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    /// Attempt rows; a sixth row appears only after the delayed reveal.
    pub fn grid(&self) -> &[AttemptRow] {
        &self.grid
    }

    pub fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    pub fn current_row(&self) -> &AttemptRow {
        &self.grid[self.current_attempt]
    }

    pub fn option_statuses(&self) -> &OptionStatusMap {
        &self.option_statuses
    }

    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn reveal_pending(&self) -> bool {
        self.reveal_pending
    }

    pub fn display_message(&self) -> &str {
        &self.display_message
    }

    pub fn log(&self) -> &OutcomeLog {
        &self.log
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_final()
    }

    /// Grid cells (row, slot) the UI animates once the question is over.
    ///
    /// Every `Exact` cell flashes at the end, which includes the whole
    /// reveal row.
    pub fn flashing_cells(&self) -> Vec<(usize, usize)> {
        if !self.is_terminal() {
            return Vec::new();
        }
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(row_index, row)| {
                row.slots()
                    .iter()
                    .enumerate()
                    .filter(|(_, guess)| guess.status == GuessStatus::Exact)
                    .map(move |(slot_index, _)| (row_index, slot_index))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_fresh() {
        let state = GameState::new();

        assert_eq!(state.grid().len(), MAX_ATTEMPTS);
        assert!(state.grid().iter().all(AttemptRow::is_blank));
        assert_eq!(state.current_attempt(), 0);
        assert!(state.option_statuses().is_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(!state.reveal_pending());
        assert!(state.display_message().is_empty());
        assert!(state.log().transitions().is_empty());
    }

    #[test]
    fn each_state_gets_its_own_id() {
        assert_ne!(GameState::new().game_id(), GameState::new().game_id());
    }

    #[test]
    fn nothing_flashes_while_in_progress() {
        let mut state = GameState::new();
        state.grid[0] = AttemptRow::unset_from(&["A", "B", "C", "D", "E"])
            .unwrap()
            .with_status(GuessStatus::Exact);
        assert!(state.flashing_cells().is_empty());

        state.outcome = Outcome::Won;
        assert_eq!(state.flashing_cells().len(), 5);
        assert_eq!(state.flashing_cells()[4], (0, 4));
    }
}
