//! Question records as decoded from the question bank.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Image references of a visual question.
///
/// The UI shows `question` while the game is running and `answer` once
/// the reveal is pending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualRefs {
    pub question: String,
    pub answer: String,
}

/// One puzzle: prompt text, selectable options and the ordered answer.
///
/// Decoding is lenient so that malformed records surface as validation
/// violations at load time instead of failing the whole document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<VisualRefs>,
}

impl QuestionRecord {
    pub fn is_visual(&self) -> bool {
        self.images.is_some()
    }

    /// True when the record is tagged with at least one of `selected`.
    ///
    /// A record without categories never matches.
    pub fn matches_any(&self, selected: &BTreeSet<String>) -> bool {
        self.categories
            .as_ref()
            .is_some_and(|own| !own.is_disjoint(selected))
    }
}
