//! Turns a question record into the playable form shown to the user.

use crate::config::GameConfig;
use crate::core::{AttemptRow, SEQUENCE_LENGTH};
use crate::question::prompt::prompt_lines;
use crate::question::record::{QuestionRecord, VisualRefs};
use crate::question::validate::check_record;
use crate::question::violations::{RecordRejected, RecordViolation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A validated question ready to play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedQuestion {
    prompt: Vec<String>,
    options: Vec<String>,
    answer: AttemptRow,
    visual: Option<VisualRefs>,
}

impl LoadedQuestion {
    /// Normalised prompt, one entry per display line.
    pub fn prompt_lines(&self) -> &[String] {
        &self.prompt
    }

    /// Options in shuffled display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Canonical answer, every slot `Unset`.
    pub fn answer(&self) -> &AttemptRow {
        &self.answer
    }

    pub fn visual(&self) -> Option<&VisualRefs> {
        self.visual.as_ref()
    }

    /// Image the UI should display for a visual question.
    pub fn image_for(&self, reveal_pending: bool) -> Option<&str> {
        self.visual.as_ref().map(|refs| {
            if reveal_pending {
                refs.answer.as_str()
            } else {
                refs.question.as_str()
            }
        })
    }
}

/// Uniform Fisher-Yates shuffle of a copy of `options`.
pub fn shuffle_options<R: Rng>(options: &[String], rng: &mut R) -> Vec<String> {
    let mut shuffled = options.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Owns the currently displayed question.
pub struct QuestionLoader<R: Rng = StdRng> {
    rng: R,
    current: Option<LoadedQuestion>,
}

impl QuestionLoader<StdRng> {
    /// Loader seeded from `config.shuffle_seed`, or from entropy when unset.
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> QuestionLoader<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, current: None }
    }

    /// Validate `record` and make it the current question.
    ///
    /// A rejected record leaves no current question; callers decide whether
    /// to fall through to another record.
    pub fn load(&mut self, record: &QuestionRecord) -> Result<&LoadedQuestion, RecordRejected> {
        self.current = None;
        check_record(record)?;

        let answer = AttemptRow::unset_from(&record.answer).ok_or_else(|| RecordRejected {
            violations: vec![RecordViolation::AnswerLength {
                expected: SEQUENCE_LENGTH,
                found: record.answer.len(),
            }],
        })?;

        let loaded = LoadedQuestion {
            prompt: prompt_lines(&record.text),
            options: shuffle_options(&record.options, &mut self.rng),
            answer,
            visual: record.images.clone(),
        };
        Ok(&*self.current.insert(loaded))
    }

    pub fn current(&self) -> Option<&LoadedQuestion> {
        self.current.as_ref()
    }

    /// Drop the current question.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessStatus;
    use std::collections::BTreeSet;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn record() -> QuestionRecord {
        QuestionRecord {
            text: "Order these: 1) first 2) second".to_string(),
            options: strings(&["A", "B", "C", "D", "E", "F", "G"]),
            answer: strings(&["C", "A", "E", "B", "D"]),
            categories: None,
            images: None,
        }
    }

    fn loader() -> QuestionLoader {
        QuestionLoader::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let options = strings(&["A", "B", "C", "D", "E", "F", "G"]);
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled = shuffle_options(&options, &mut rng);

        let a: BTreeSet<_> = options.iter().collect();
        let b: BTreeSet<_> = shuffled.iter().collect();
        assert_eq!(a, b);
        assert_eq!(shuffled.len(), options.len());
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let options = strings(&["A", "B", "C", "D", "E", "F", "G"]);
        let make = |seed| shuffle_options(&options, &mut StdRng::seed_from_u64(seed));
        assert_eq!(make(99), make(99));
    }

    #[test]
    fn load_does_not_mutate_record() {
        let record = record();
        let before = record.clone();
        loader().load(&record).unwrap();
        assert_eq!(record, before);
    }

    #[test]
    fn load_builds_prompt_and_answer() {
        let mut loader = loader();
        let loaded = loader.load(&record()).unwrap();

        assert_eq!(loaded.prompt_lines(), ["Order these:", "1) first", "2) second"]);
        assert_eq!(loaded.answer().key(), "CAEBD");
        assert!(loaded
            .answer()
            .slots()
            .iter()
            .all(|g| g.status == GuessStatus::Unset));
        assert_eq!(loaded.options().len(), 7);
    }

    #[test]
    fn rejected_record_clears_current() {
        let mut loader = loader();
        loader.load(&record()).unwrap();
        assert!(loader.current().is_some());

        let mut bad = record();
        bad.answer.pop();
        let err = loader.load(&bad).unwrap_err();

        assert!(err.violations.contains(&RecordViolation::AnswerLength {
            expected: 5,
            found: 4
        }));
        assert!(loader.current().is_none());
    }

    #[test]
    fn visual_question_switches_image_on_reveal() {
        let mut record = record();
        record.images = Some(VisualRefs {
            question: "blurred.png".to_string(),
            answer: "clear.png".to_string(),
        });

        let mut loader = loader();
        let loaded = loader.load(&record).unwrap();

        assert_eq!(loaded.image_for(false), Some("blurred.png"));
        assert_eq!(loaded.image_for(true), Some("clear.png"));
    }

    #[test]
    fn text_question_has_no_image() {
        let mut loader = loader();
        let loaded = loader.load(&record()).unwrap();
        assert_eq!(loaded.image_for(true), None);
    }
}
