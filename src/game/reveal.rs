//! Delayed reveal of the canonical answer after the last failed attempt.
//!
//! The reveal is a cancellable timer task. When it fires it posts a
//! [`RevealTicket`] over a channel; the owner of the game state applies it.
//! Tickets carry the `game_id` of the state that scheduled them, so a
//! ticket that outlives its question is a no-op.
//!
//! Outside a Tokio runtime no task can be spawned; the ticket is then held
//! by the handle with a deadline and released once that deadline passes.

use crate::core::AttemptRow;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Pending reveal for one game generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealTicket {
    game_id: Uuid,
    row: AttemptRow,
}

impl RevealTicket {
    pub(crate) fn new(game_id: Uuid, row: AttemptRow) -> Self {
        Self { game_id, row }
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    /// The synthetic row to append: the canonical answer, all `Exact`.
    pub fn row(&self) -> &AttemptRow {
        &self.row
    }
}

/// Spawns reveal timers that deliver tickets after a fixed delay.
#[derive(Debug)]
pub struct RevealScheduler {
    delay: Duration,
    sender: mpsc::UnboundedSender<RevealTicket>,
}

impl RevealScheduler {
    /// Scheduler plus the receiving end its tickets are delivered to.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<RevealTicket>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { delay, sender }, receiver)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start the timer for `ticket`.
    ///
    /// Inside a Tokio runtime the ticket is posted to the channel when the
    /// delay elapses. Otherwise it stays on the returned handle until
    /// [`RevealHandle::due_ticket`] releases it.
    pub fn schedule(&self, ticket: RevealTicket) -> RevealHandle {
        let game_id = ticket.game_id;
        let delay = self.delay;

        let timer = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                tracing::debug!(%game_id, ?delay, "reveal scheduled");
                let sender = self.sender.clone();
                Timer::Spawned(runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    if sender.send(ticket).is_err() {
                        tracing::debug!(%game_id, "reveal receiver dropped");
                    }
                }))
            }
            Err(_) => {
                tracing::debug!(%game_id, ?delay, "no runtime, reveal deferred to polling");
                Timer::Deferred {
                    ticket,
                    deadline: Instant::now() + delay,
                }
            }
        };

        RevealHandle { game_id, timer }
    }
}

#[derive(Debug)]
enum Timer {
    Spawned(JoinHandle<()>),
    Deferred {
        ticket: RevealTicket,
        deadline: Instant,
    },
}

/// Handle to a scheduled reveal.
#[derive(Debug)]
pub struct RevealHandle {
    game_id: Uuid,
    timer: Timer,
}

impl RevealHandle {
    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    /// Whether the delay has elapsed.
    pub fn is_finished(&self) -> bool {
        match &self.timer {
            Timer::Spawned(task) => task.is_finished(),
            Timer::Deferred { deadline, .. } => Instant::now() >= *deadline,
        }
    }

    /// Deadline of a reveal held on the handle; `None` for spawned timers.
    pub fn deferred_deadline(&self) -> Option<Instant> {
        match &self.timer {
            Timer::Spawned(_) => None,
            Timer::Deferred { deadline, .. } => Some(*deadline),
        }
    }

    /// The held ticket once its deadline has passed.
    pub fn due_ticket(&self) -> Option<&RevealTicket> {
        match &self.timer {
            Timer::Deferred { ticket, deadline } if Instant::now() >= *deadline => Some(ticket),
            _ => None,
        }
    }

    /// Stop the timer. A ticket already delivered is unaffected.
    pub fn cancel(self) {
        tracing::debug!(game_id = %self.game_id, "reveal cancelled");
        if let Timer::Spawned(task) = self.timer {
            task.abort();
        }
    }
}
