//! Guard predicates for gating user input.
//!
//! Guards are pure boolean functions evaluated against the current
//! outcome before a mutating operation runs.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate that decides whether an operation may run in a state.
///
/// # Example
///
/// ```rust
/// use trizzle::core::{Guard, Outcome};
///
/// let accepting = Guard::<Outcome>::not_final();
///
/// assert!(accepting.check(&Outcome::InProgress));
/// assert!(!accepting.check(&Outcome::Won));
/// assert!(!accepting.check(&Outcome::Lost));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes only while the state is not terminal.
    pub fn not_final() -> Self {
        Self::new(|state: &S| !state.is_final())
    }

    /// Check if the guard allows the operation in this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
