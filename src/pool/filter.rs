//! Category filtering and cyclic navigation over the question pool.

use crate::pool::bank::QuestionPool;
use crate::question::QuestionRecord;
use rand::Rng;
use std::collections::BTreeSet;

/// Active subset of the pool plus a navigation cursor.
///
/// The subset is stored as indices into the pool. Every change to the
/// filter or cursor must be followed by a question reload; the
/// [`Session`](crate::session::Session) does that wiring.
///
/// # Example
///
/// ```rust
/// use trizzle::pool::{PoolDocument, PoolFilter, QuestionPool};
///
/// let document: PoolDocument = serde_json::from_str(r#"{"questions": [
///     {"text": "a", "categories": ["art"]},
///     {"text": "b", "categories": ["science"]},
///     {"text": "c", "categories": ["art", "science"]}
/// ]}"#).unwrap();
///
/// let mut filter = PoolFilter::new(QuestionPool::from(document));
/// filter.set_selected_categories(["art".to_string()].into_iter().collect());
///
/// assert_eq!(filter.len(), 2);
/// assert_eq!(filter.current().unwrap().text, "a");
/// assert_eq!(filter.next().unwrap().text, "c");
/// assert_eq!(filter.next().unwrap().text, "a");
/// ```
#[derive(Clone, Debug)]
pub struct PoolFilter {
    pool: QuestionPool,
    selected: BTreeSet<String>,
    active: Vec<usize>,
    cursor: usize,
}

impl PoolFilter {
    /// Filter over `pool` with no categories selected (full pool active).
    pub fn new(pool: QuestionPool) -> Self {
        let mut filter = Self {
            pool,
            selected: BTreeSet::new(),
            active: Vec::new(),
            cursor: 0,
        };
        filter.apply();
        filter
    }

    /// Replace the category selection and reset the cursor to 0.
    ///
    /// An empty selection activates the full pool.
    pub fn set_selected_categories(&mut self, categories: BTreeSet<String>) {
        self.selected = categories;
        self.apply();
    }

    /// Add `category` to the selection, or remove it if already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected.remove(category) {
            self.selected.insert(category.to_string());
        }
        self.apply();
    }

    fn apply(&mut self) {
        self.active = if self.selected.is_empty() {
            (0..self.pool.len()).collect()
        } else {
            self.pool
                .iter()
                .enumerate()
                .filter(|(_, record)| record.matches_any(&self.selected))
                .map(|(index, _)| index)
                .collect()
        };
        self.cursor = 0;
    }

    /// Advance cyclically. `None` when the active subset is empty.
    pub fn next(&mut self) -> Option<&QuestionRecord> {
        let len = self.active.len();
        if len == 0 {
            return None;
        }
        self.cursor = (self.cursor + 1) % len;
        self.current()
    }

    /// Step back cyclically. `None` when the active subset is empty.
    pub fn previous(&mut self) -> Option<&QuestionRecord> {
        let len = self.active.len();
        if len == 0 {
            return None;
        }
        self.cursor = (self.cursor + len - 1) % len;
        self.current()
    }

    /// Place the cursor on a uniformly random record of the active subset.
    pub fn jump_random<R: Rng>(&mut self, rng: &mut R) -> Option<&QuestionRecord> {
        if self.active.is_empty() {
            return None;
        }
        self.cursor = rng.gen_range(0..self.active.len());
        self.current()
    }

    /// Record under the cursor; `None` means no questions are available.
    pub fn current(&self) -> Option<&QuestionRecord> {
        self.active
            .get(self.cursor)
            .and_then(|&index| self.pool.get(index))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Size of the active subset.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }
}
