//! Pure scoring of attempts and aggregation of per-option feedback.

use super::guess::{AttemptRow, Guess, GuessStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score a filled row against the canonical answer.
///
/// Every slot is scored independently: `Exact` when the value sits at the
/// same position in the answer, otherwise `Present` when the value occurs
/// anywhere in the answer, otherwise `Absent`. Presence is a plain
/// membership test, so matches are not consumed.
///
/// # Example
///
/// ```rust
/// use trizzle::core::{score_row, AttemptRow, GuessStatus};
///
/// let answer = AttemptRow::unset_from(&["A", "B", "C", "D", "E"]).unwrap();
/// let guess = AttemptRow::unset_from(&["A", "C", "B", "X", "E"]).unwrap();
///
/// let statuses: Vec<_> = score_row(&guess, &answer)
///     .slots()
///     .iter()
///     .map(|g| g.status)
///     .collect();
///
/// assert_eq!(
///     statuses,
///     vec![
///         GuessStatus::Exact,
///         GuessStatus::Present,
///         GuessStatus::Present,
///         GuessStatus::Absent,
///         GuessStatus::Exact,
///     ]
/// );
/// ```
pub fn score_row(row: &AttemptRow, answer: &AttemptRow) -> AttemptRow {
    let answer_slots = answer.slots();
    let mut scored = row.slots().clone();

    for (index, slot) in scored.iter_mut().enumerate() {
        slot.status = if slot.value == answer_slots[index].value {
            GuessStatus::Exact
        } else if answer_slots.iter().any(|a| a.value == slot.value) {
            GuessStatus::Present
        } else {
            GuessStatus::Absent
        };
    }

    AttemptRow::from_slots(scored)
}

/// Best feedback seen for each option across the scored attempts of a question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionStatusMap {
    statuses: BTreeMap<String, GuessStatus>,
}

impl OptionStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record feedback for one option. Only upgrades, never downgrades.
    ///
    /// Returns `true` when the recorded status changed.
    pub fn merge(&mut self, value: &str, status: GuessStatus) -> bool {
        if !status.is_scored() {
            return false;
        }
        match self.statuses.get_mut(value) {
            Some(current) if status.outranks(*current) => {
                *current = status;
                true
            }
            Some(_) => false,
            None => {
                self.statuses.insert(value.to_string(), status);
                true
            }
        }
    }

    /// Merge every slot of a scored row.
    pub fn merge_row(&mut self, row: &AttemptRow) {
        for Guess { value, status } in row.slots() {
            self.merge(value, *status);
        }
    }

    pub fn get(&self, value: &str) -> Option<GuessStatus> {
        self.statuses.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, GuessStatus)> {
        self.statuses.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
