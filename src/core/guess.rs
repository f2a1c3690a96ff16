//! Guess slots and attempt rows.

use serde::{Deserialize, Serialize};

/// Number of slots in every attempt and in every canonical answer.
pub const SEQUENCE_LENGTH: usize = 5;

/// Number of scored attempts available per question.
pub const MAX_ATTEMPTS: usize = 5;

/// Per-slot status.
///
/// `Empty` marks a slot with no selection, `Unset` a filled slot that has
/// not been scored yet. The remaining variants are scoring feedback.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuessStatus {
    #[default]
    Empty,
    Unset,
    Exact,
    Present,
    Absent,
}

impl GuessStatus {
    /// Whether this status is scoring feedback.
    pub fn is_scored(self) -> bool {
        matches!(self, Self::Exact | Self::Present | Self::Absent)
    }

    /// Precedence used when aggregating feedback: EXACT > PRESENT > ABSENT.
    /// Unscored statuses rank below all feedback.
    pub fn rank(self) -> u8 {
        match self {
            Self::Exact => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Unset => 0,
        }
    }

    /// True if `self` is strictly better feedback than `other`.
    pub fn outranks(self, other: GuessStatus) -> bool {
        self.rank() > other.rank()
    }
}

/// A single slot of an attempt row.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Guess {
    pub value: String,
    pub status: GuessStatus,
}

impl Guess {
    /// A slot holding no selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A filled, not yet scored slot.
    pub fn unset(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status: GuessStatus::Unset,
        }
    }

    pub fn scored(value: impl Into<String>, status: GuessStatus) -> Self {
        Self {
            value: value.into(),
            status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status == GuessStatus::Empty
    }
}

/// Ordered row of exactly [`SEQUENCE_LENGTH`] slots.
///
/// The same shape carries the user's current attempt, frozen scored
/// attempts, and the canonical answer.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct AttemptRow {
    slots: [Guess; SEQUENCE_LENGTH],
}

impl AttemptRow {
    /// A row with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from exactly [`SEQUENCE_LENGTH`] slots.
    pub fn from_slots(slots: [Guess; SEQUENCE_LENGTH]) -> Self {
        Self { slots }
    }

    /// Build a canonical answer row: every value tagged `Unset`.
    ///
    /// Returns `None` unless exactly [`SEQUENCE_LENGTH`] values are given.
    pub fn unset_from<S: AsRef<str>>(values: &[S]) -> Option<Self> {
        if values.len() != SEQUENCE_LENGTH {
            return None;
        }
        let mut row = Self::new();
        for (slot, value) in row.slots.iter_mut().zip(values) {
            *slot = Guess::unset(value.as_ref());
        }
        Some(row)
    }

    pub fn slots(&self) -> &[Guess; SEQUENCE_LENGTH] {
        &self.slots
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|g| g.value.as_str())
    }

    /// Number of non-empty slots.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|g| !g.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() == SEQUENCE_LENGTH
    }

    pub fn is_blank(&self) -> bool {
        self.filled_count() == 0
    }

    /// Whether a filled slot already holds `value`.
    pub fn contains_value(&self, value: &str) -> bool {
        self.slots.iter().any(|g| !g.is_empty() && g.value == value)
    }

    /// Fill the first empty slot, left to right. Returns its index.
    pub fn fill_next(&mut self, value: &str) -> Option<usize> {
        let index = self.slots.iter().position(Guess::is_empty)?;
        self.slots[index] = Guess::unset(value);
        Some(index)
    }

    /// Clear the right-most filled slot, returning what it held.
    pub fn clear_last(&mut self) -> Option<Guess> {
        let index = self.slots.iter().rposition(|g| !g.is_empty())?;
        Some(std::mem::take(&mut self.slots[index]))
    }

    /// Concatenation of the slot values, used to detect repeated guesses.
    pub fn key(&self) -> String {
        self.values().collect()
    }

    /// Whether every slot carries scoring feedback.
    pub fn is_scored(&self) -> bool {
        self.slots.iter().all(|g| g.status.is_scored())
    }

    pub fn all_exact(&self) -> bool {
        self.slots.iter().all(|g| g.status == GuessStatus::Exact)
    }

    /// Copy of this row with every slot marked `status`.
    pub fn with_status(&self, status: GuessStatus) -> Self {
        let mut row = self.clone();
        for slot in row.slots.iter_mut() {
            slot.status = status;
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_is_blank() {
        let row = AttemptRow::new();
        assert!(row.is_blank());
        assert!(!row.is_full());
        assert_eq!(row.filled_count(), 0);
    }

    #[test]
    fn fill_next_goes_left_to_right() {
        let mut row = AttemptRow::new();
        assert_eq!(row.fill_next("A"), Some(0));
        assert_eq!(row.fill_next("B"), Some(1));
        assert_eq!(row.slots()[1], Guess::unset("B"));
    }

    #[test]
    fn fill_next_reuses_hole_left_by_clear() {
        let mut row = AttemptRow::new();
        for v in ["A", "B", "C"] {
            row.fill_next(v);
        }
        let cleared = row.clear_last().unwrap();
        assert_eq!(cleared.value, "C");
        assert_eq!(row.fill_next("D"), Some(2));
    }

    #[test]
    fn fill_next_on_full_row_returns_none() {
        let mut row = AttemptRow::unset_from(&["A", "B", "C", "D", "E"]).unwrap();
        assert!(row.is_full());
        assert_eq!(row.fill_next("F"), None);
    }

    #[test]
    fn clear_last_on_blank_row_is_none() {
        let mut row = AttemptRow::new();
        assert!(row.clear_last().is_none());
        assert!(row.is_blank());
    }

    #[test]
    fn unset_from_requires_exact_length() {
        assert!(AttemptRow::unset_from(&["A", "B"]).is_none());
        let row = AttemptRow::unset_from(&["A", "B", "C", "D", "E"]).unwrap();
        assert!(row.slots().iter().all(|g| g.status == GuessStatus::Unset));
    }

    #[test]
    fn key_concatenates_values() {
        let row = AttemptRow::unset_from(&["ab", "c", "d", "e", "f"]).unwrap();
        assert_eq!(row.key(), "abcdef");
    }

    #[test]
    fn contains_value_ignores_empty_slots() {
        let mut row = AttemptRow::new();
        assert!(!row.contains_value(""));
        row.fill_next("A");
        assert!(row.contains_value("A"));
        assert!(!row.contains_value("B"));
    }

    #[test]
    fn rank_orders_feedback() {
        assert!(GuessStatus::Exact.outranks(GuessStatus::Present));
        assert!(GuessStatus::Present.outranks(GuessStatus::Absent));
        assert!(GuessStatus::Absent.outranks(GuessStatus::Unset));
        assert!(!GuessStatus::Absent.outranks(GuessStatus::Absent));
    }

    #[test]
    fn with_status_marks_every_slot() {
        let row = AttemptRow::unset_from(&["A", "B", "C", "D", "E"]).unwrap();
        let revealed = row.with_status(GuessStatus::Exact);
        assert!(revealed.all_exact());
        assert_eq!(revealed.key(), row.key());
    }
}
