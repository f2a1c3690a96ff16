//! The full, unfiltered question pool.

use crate::question::QuestionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shape of the question-bank document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoolDocument {
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

/// Every known question record, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionPool {
    questions: Vec<QuestionRecord>,
}

impl QuestionPool {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    /// An empty pool, the state after a failed fetch.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.questions.iter()
    }

    /// Distinct categories across all records, sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.questions
            .iter()
            .filter_map(|q| q.categories.as_ref())
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

impl From<PoolDocument> for QuestionPool {
    fn from(document: PoolDocument) -> Self {
        Self::new(document.questions)
    }
}
