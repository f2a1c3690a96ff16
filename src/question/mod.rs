//! Question records, integrity validation and the question loader.
//!
//! A [`QuestionRecord`] is immutable once decoded. The [`QuestionLoader`]
//! validates it, normalises the prompt into display lines, shuffles a copy
//! of the options and derives the canonical answer row.

mod loader;
mod prompt;
mod record;
mod validate;
mod violations;

pub use loader::{shuffle_options, LoadedQuestion, QuestionLoader};
pub use prompt::prompt_lines;
pub use record::{QuestionRecord, VisualRefs};
pub use validate::{check_record, validate_record, MIN_OPTIONS};
pub use violations::{RecordRejected, RecordViolation};
