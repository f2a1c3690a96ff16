//! Question pool, category filter and pool source.
//!
//! The pool is read once from a JSON document of the form
//! `{ "questions": [QuestionRecord, ...] }`. The filter and the game engine
//! depend only on the decoded [`QuestionPool`], never on the transport.

mod bank;
mod error;
mod filter;
mod source;

pub use bank::{PoolDocument, QuestionPool};
pub use error::PoolError;
pub use filter::PoolFilter;
pub use source::{fetch_pool, fetch_pool_or_empty, parse_pool};
