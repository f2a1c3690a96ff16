//! Load-time validation of question records.
//!
//! Every rule runs and ALL violations are accumulated through Stillwater's
//! `Validation`, so a rejected record is logged with its full list of
//! problems in one pass.

use crate::core::SEQUENCE_LENGTH;
use crate::question::record::QuestionRecord;
use crate::question::violations::{RecordRejected, RecordViolation};
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Minimum number of selectable options.
pub const MIN_OPTIONS: usize = SEQUENCE_LENGTH;

type Check = Validation<(), NonEmptyVec<RecordViolation>>;

fn ensure(ok: bool, violation: impl FnOnce() -> RecordViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Run every integrity rule against `record`.
///
/// Returns `Validation::Success(())` when the record can reach the scoring
/// engine, otherwise `Validation::Failure` with all violations.
pub fn validate_record(record: &QuestionRecord) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    checks.push(ensure(!record.text.trim().is_empty(), || {
        RecordViolation::EmptyText
    }));

    checks.push(ensure(record.options.len() >= MIN_OPTIONS, || {
        RecordViolation::TooFewOptions {
            min: MIN_OPTIONS,
            found: record.options.len(),
        }
    }));

    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for option in &record.options {
        if !seen.insert(option.as_str()) && reported.insert(option.as_str()) {
            checks.push(Validation::fail(RecordViolation::DuplicateOption {
                value: option.clone(),
            }));
        }
    }

    checks.push(ensure(record.answer.len() == SEQUENCE_LENGTH, || {
        RecordViolation::AnswerLength {
            expected: SEQUENCE_LENGTH,
            found: record.answer.len(),
        }
    }));

    let mut missing = BTreeSet::new();
    for value in &record.answer {
        if !seen.contains(value.as_str()) && missing.insert(value.as_str()) {
            checks.push(Validation::fail(RecordViolation::AnswerNotInOptions {
                value: value.clone(),
            }));
        }
    }

    if let Some(categories) = &record.categories {
        checks.push(ensure(
            categories.iter().all(|c| !c.trim().is_empty()),
            || RecordViolation::BlankCategory,
        ));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Validate and convert to a `Result` for callers that only branch on it.
pub fn check_record(record: &QuestionRecord) -> Result<(), RecordRejected> {
    match validate_record(record) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(RecordRejected {
            violations: errors.iter().cloned().collect(),
        }),
    }
}
