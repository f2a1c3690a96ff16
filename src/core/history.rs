//! Guess history and outcome transition tracking.

use super::state::{Outcome, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Guess sequences already submitted for the current question.
///
/// Keys are the concatenated slot values of an attempt (see
/// [`AttemptRow::key`](super::AttemptRow::key)).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessHistory {
    keys: HashSet<String>,
}

impl GuessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Record a key. Returns `false` if it was already present.
    pub fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Record of a single outcome transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// 1-based attempt number that triggered the transition
    pub attempt: usize,
}

/// Ordered, immutable log of transitions.
///
/// `record` returns a new log with the transition appended.
///
/// # Example
///
/// ```rust
/// use trizzle::core::{Outcome, OutcomeLog, StateTransition};
/// use chrono::Utc;
///
/// let log = OutcomeLog::new().record(StateTransition {
///     from: Outcome::InProgress,
///     to: Outcome::Won,
///     timestamp: Utc::now(),
///     attempt: 2,
/// });
///
/// assert_eq!(log.get_path(), vec![&Outcome::InProgress, &Outcome::Won]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    transitions: Vec<StateTransition<S>>,
}

/// Transition log of a question's outcome.
pub type OutcomeLog = TransitionLog<Outcome>;

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_history_rejects_repeats() {
        let mut history = GuessHistory::new();
        assert!(history.insert("ABCDE".to_string()));
        assert!(!history.insert("ABCDE".to_string()));
        assert!(history.contains("ABCDE"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn new_log_is_empty() {
        let log = OutcomeLog::new();
        assert!(log.transitions().is_empty());
        assert!(log.get_path().is_empty());
        assert!(log.duration().is_none());
        assert!(log.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let log = OutcomeLog::new();
        let next = log.record(StateTransition {
            from: Outcome::InProgress,
            to: Outcome::Lost,
            timestamp: Utc::now(),
            attempt: 5,
        });

        assert_eq!(log.transitions().len(), 0);
        assert_eq!(next.transitions().len(), 1);
        assert_eq!(next.last().map(|t| t.attempt), Some(5));
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let log = OutcomeLog::new().record(StateTransition {
            from: Outcome::InProgress,
            to: Outcome::Won,
            timestamp: Utc::now(),
            attempt: 1,
        });

        assert_eq!(log.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = OutcomeLog::new().record(StateTransition {
            from: Outcome::InProgress,
            to: Outcome::Won,
            timestamp: Utc::now(),
            attempt: 3,
        });

        let json = serde_json::to_string(&log).unwrap();
        let back: OutcomeLog = serde_json::from_str(&json).unwrap();

        assert_eq!(back.get_path(), vec![&Outcome::InProgress, &Outcome::Won]);
    }
}
