//! Trizzle: a sequence-guessing puzzle engine
//!
//! Players guess an ordered sequence of five options drawn from a question's
//! option pool. Each attempt is scored slot by slot with three-tier feedback
//! (exact position / present elsewhere / absent), five attempts are allowed,
//! and the answer is revealed either immediately on a win or after a short
//! delay once every attempt is used.
//!
//! # Modules
//!
//! - [`core`]: pure types and scoring (no I/O, no timers)
//! - [`question`]: question records, validation and the question loader
//! - [`pool`]: the question pool, category filter and pool fetching
//! - [`game`]: the attempt state machine and the delayed reveal
//! - [`session`]: orchestration of filter, loader and state machine
//! - [`config`]: tunable settings
//!
//! # Example
//!
//! ```rust
//! use trizzle::config::GameConfig;
//! use trizzle::core::Outcome;
//! use trizzle::pool::parse_pool;
//! use trizzle::session::Session;
//!
//! let pool = parse_pool(r#"{"questions": [{
//!     "text": "Order by founding year: 1) Rome 2) Athens",
//!     "options": ["Athens", "Rome", "Carthage", "Babylon", "Ur", "Troy"],
//!     "answer": ["Ur", "Babylon", "Troy", "Athens", "Rome"],
//!     "categories": ["history"]
//! }]}"#).unwrap();
//!
//! let mut session = Session::new(pool, GameConfig::default());
//! for value in ["Ur", "Babylon", "Troy", "Athens", "Rome"] {
//!     session.select_option(value).unwrap();
//! }
//! session.check_answer().unwrap();
//!
//! assert_eq!(session.game().unwrap().outcome(), Outcome::Won);
//! assert_eq!(session.display_message(), "Correct sequence!");
//! ```

pub mod config;
pub mod core;
pub mod game;
pub mod pool;
pub mod question;
pub mod session;

// Re-export commonly used types
pub use crate::config::GameConfig;
pub use crate::core::{AttemptRow, Guess, GuessStatus, Outcome};
pub use crate::game::{AttemptMachine, Evaluation, GameState, InputNotice};
pub use crate::pool::{PoolFilter, QuestionPool};
pub use crate::question::{LoadedQuestion, QuestionLoader, QuestionRecord};
pub use crate::session::Session;
