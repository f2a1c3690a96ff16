//! The attempt state machine.
//!
//! [`AttemptMachine`] owns the [`GameState`] of the current question and
//! implements the three user operations: select, delete and check. Running
//! out of attempts yields a [`RevealTicket`] that is applied after a fixed
//! delay, normally through a [`RevealScheduler`].

mod error;
mod machine;
mod reveal;
mod state;

pub use error::InputNotice;
pub use machine::{AttemptMachine, Evaluation, RETRY_MESSAGE, REVEAL_MESSAGE, WIN_MESSAGE};
pub use reveal::{RevealHandle, RevealScheduler, RevealTicket};
pub use state::GameState;
