//! Session orchestration.
//!
//! A [`Session`] wires the pool filter, the question loader and the attempt
//! state machine together:
//!
//! - every filter or cursor change reloads the question and resets the game
//! - records failing validation are skipped in the direction of travel
//! - losing schedules the delayed reveal; reloading cancels it
//!
//! Inside a Tokio runtime the reveal is a timer task; without one it is
//! applied by the first [`Session::poll_reveals`] after the delay.

use crate::config::GameConfig;
use crate::core::Guess;
use crate::game::{
    AttemptMachine, Evaluation, GameState, InputNotice, RevealHandle, RevealScheduler,
    RevealTicket,
};
use crate::pool::{fetch_pool_or_empty, PoolFilter, QuestionPool};
use crate::question::{LoadedQuestion, QuestionLoader};
use reqwest::Client;
use std::collections::BTreeSet;
use std::fmt;
use tokio::sync::mpsc;

/// Message shown when the active subset is empty.
pub const NO_QUESTIONS_MESSAGE: &str = "No questions available.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// One player's game session over a question pool.
pub struct Session {
    config: GameConfig,
    filter: PoolFilter,
    loader: QuestionLoader,
    machine: Option<AttemptMachine>,
    scheduler: RevealScheduler,
    reveals: mpsc::UnboundedReceiver<RevealTicket>,
    pending_reveal: Option<RevealHandle>,
}

impl Session {
    /// Start a session over `pool` and load the first playable question.
    pub fn new(pool: QuestionPool, config: GameConfig) -> Self {
        let (scheduler, reveals) = RevealScheduler::new(config.reveal_delay());
        let mut session = Self {
            loader: QuestionLoader::from_config(&config),
            filter: PoolFilter::new(pool),
            machine: None,
            scheduler,
            reveals,
            pending_reveal: None,
            config,
        };
        session.reload(Direction::Forward);
        session
    }

    /// Fetch the pool from `config.pool_url` and start a session on it.
    ///
    /// A failed fetch is logged and yields a session with no questions.
    pub async fn connect(config: GameConfig) -> Self {
        let client = Client::new();
        let pool = fetch_pool_or_empty(&client, &config.pool_url).await;
        Self::new(pool, config)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn filter(&self) -> &PoolFilter {
        &self.filter
    }

    /// Distinct categories of the whole pool.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.filter.pool().categories()
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        self.filter.selected_categories()
    }

    pub fn set_selected_categories(&mut self, categories: BTreeSet<String>) {
        self.filter.set_selected_categories(categories);
        self.reload(Direction::Forward);
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.filter.toggle_category(category);
        self.reload(Direction::Forward);
    }

    pub fn next_question(&mut self) {
        self.filter.next();
        self.reload(Direction::Forward);
    }

    pub fn previous_question(&mut self) {
        self.filter.previous();
        self.reload(Direction::Backward);
    }

    /// Jump to a random question of the active subset.
    pub fn random_question(&mut self) {
        self.filter.jump_random(self.loader.rng_mut());
        self.reload(Direction::Forward);
    }

    fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.filter.next(),
            Direction::Backward => self.filter.previous(),
        };
    }

    fn reload(&mut self, direction: Direction) {
        self.cancel_pending_reveal();

        for _ in 0..self.filter.len() {
            let Some(record) = self.filter.current() else {
                break;
            };
            match self.loader.load(record) {
                Ok(question) => {
                    tracing::info!(
                        cursor = self.filter.cursor(),
                        options = question.options().len(),
                        "question loaded"
                    );
                    let answer = question.answer().clone();
                    match self.machine.as_mut() {
                        Some(machine) => machine.reset(answer),
                        None => self.machine = Some(AttemptMachine::new(answer)),
                    }
                    return;
                }
                Err(rejected) => {
                    tracing::warn!(
                        cursor = self.filter.cursor(),
                        violations = ?rejected.violations,
                        "skipping invalid question"
                    );
                    self.step(direction);
                }
            }
        }

        self.machine = None;
        self.loader.clear();
        tracing::info!("no questions available");
    }

    fn cancel_pending_reveal(&mut self) {
        if let Some(handle) = self.pending_reveal.take() {
            handle.cancel();
        }
    }

    fn machine_mut(&mut self) -> Result<&mut AttemptMachine, InputNotice> {
        self.machine.as_mut().ok_or(InputNotice::NoQuestion)
    }

    pub fn select_option(&mut self, value: &str) -> Result<usize, InputNotice> {
        self.machine_mut()?.select_option(value)
    }

    pub fn delete_last(&mut self) -> Option<Guess> {
        self.machine.as_mut()?.delete_last()
    }

    /// Score the current attempt, scheduling the reveal on a loss.
    pub fn check_answer(&mut self) -> Result<Evaluation, InputNotice> {
        let evaluation = self.machine_mut()?.check_answer()?;
        if let Evaluation::Lost { reveal, .. } = &evaluation {
            self.pending_reveal = Some(self.scheduler.schedule(reveal.clone()));
        }
        Ok(evaluation)
    }

    fn apply_ticket(&mut self, ticket: &RevealTicket) -> bool {
        let applied = self
            .machine
            .as_mut()
            .is_some_and(|machine| machine.apply_reveal(ticket));
        if applied {
            self.pending_reveal = None;
        }
        applied
    }

    /// Apply reveals whose delay has elapsed. Returns `true` if one applied.
    pub fn poll_reveals(&mut self) -> bool {
        let mut applied = false;
        while let Ok(ticket) = self.reveals.try_recv() {
            applied |= self.apply_ticket(&ticket);
        }
        let due = self
            .pending_reveal
            .as_ref()
            .and_then(RevealHandle::due_ticket)
            .cloned();
        if let Some(ticket) = due {
            applied |= self.apply_ticket(&ticket);
        }
        applied
    }

    /// Wait for the scheduled reveal and apply it.
    ///
    /// Returns `false` immediately when no reveal is pending.
    pub async fn wait_for_reveal(&mut self) -> bool {
        while let Some(handle) = &self.pending_reveal {
            if let Some(deadline) = handle.deferred_deadline() {
                tokio::time::sleep_until(deadline.into()).await;
                return self.poll_reveals();
            }
            let Some(ticket) = self.reveals.recv().await else {
                return false;
            };
            if self.apply_ticket(&ticket) {
                return true;
            }
        }
        false
    }

    pub fn reveal_is_scheduled(&self) -> bool {
        self.pending_reveal.is_some()
    }

    /// The displayed question, if any.
    pub fn question(&self) -> Option<&LoadedQuestion> {
        self.loader.current()
    }

    /// Game state of the displayed question, if any.
    pub fn game(&self) -> Option<&GameState> {
        self.machine.as_ref().map(AttemptMachine::state)
    }

    pub fn display_message(&self) -> &str {
        self.game()
            .map_or(NO_QUESTIONS_MESSAGE, GameState::display_message)
    }

    /// Image for a visual question, switching to the answer side on reveal.
    pub fn current_image(&self) -> Option<&str> {
        let reveal_pending = self.game().is_some_and(GameState::reveal_pending);
        self.question()?.image_for(reveal_pending)
    }

    /// Whether the UI may offer moving on: the question is over.
    pub fn can_advance(&self) -> bool {
        self.game().is_some_and(GameState::is_terminal)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("filter", &self.filter)
            .field("question", &self.loader.current())
            .field("machine", &self.machine)
            .field("scheduler", &self.scheduler)
            .field("pending_reveal", &self.pending_reveal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, MAX_ATTEMPTS};
    use crate::question::QuestionRecord;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn record(text: &str, answer: [&str; 5], categories: &[&str]) -> QuestionRecord {
        let mut options = strings(&answer);
        options.push("decoy".to_string());
        QuestionRecord {
            text: text.to_string(),
            options,
            answer: strings(&answer),
            categories: Some(categories.iter().map(|c| c.to_string()).collect()),
            images: None,
        }
    }

    fn invalid(text: &str) -> QuestionRecord {
        QuestionRecord {
            text: text.to_string(),
            options: strings(&["a", "b"]),
            answer: strings(&["a"]),
            categories: Some(["broken".to_string()].into_iter().collect()),
            images: None,
        }
    }

    fn config() -> GameConfig {
        GameConfig {
            shuffle_seed: Some(11),
            ..GameConfig::default()
        }
    }

    fn session(records: Vec<QuestionRecord>) -> Session {
        Session::new(QuestionPool::new(records), config())
    }

    fn prompt(session: &Session) -> Option<&str> {
        session
            .question()
            .map(|q| q.prompt_lines()[0].as_str())
    }

    #[test]
    fn starts_on_first_valid_question() {
        let session = session(vec![
            invalid("bad"),
            record("first", ["A", "B", "C", "D", "E"], &["art"]),
        ]);

        assert_eq!(prompt(&session), Some("first"));
        assert_eq!(session.filter().cursor(), 1);
        assert_eq!(session.game().unwrap().outcome(), Outcome::InProgress);
    }

    #[test]
    fn empty_pool_shows_no_questions() {
        let mut session = session(Vec::new());

        assert!(session.question().is_none());
        assert!(session.game().is_none());
        assert_eq!(session.display_message(), NO_QUESTIONS_MESSAGE);
        assert_eq!(session.select_option("A"), Err(InputNotice::NoQuestion));
        assert_eq!(session.check_answer(), Err(InputNotice::NoQuestion));
        assert!(session.delete_last().is_none());
        assert!(!session.can_advance());
    }

    #[test]
    fn all_invalid_records_show_no_questions() {
        let session = session(vec![invalid("x"), invalid("y")]);
        assert!(session.question().is_none());
        assert_eq!(session.display_message(), NO_QUESTIONS_MESSAGE);
    }

    #[test]
    fn debug_output_names_session_state() {
        let session = session(vec![record("one", ["A", "B", "C", "D", "E"], &["art"])]);
        let output = format!("{session:?}");

        assert!(output.starts_with("Session {"));
        assert!(output.contains("machine"));
        assert!(output.contains("pending_reveal: None"));
    }

    #[test]
    fn navigation_resets_game_state() {
        let mut session = session(vec![
            record("one", ["A", "B", "C", "D", "E"], &["art"]),
            record("two", ["V", "W", "X", "Y", "Z"], &["science"]),
        ]);
        session.select_option("A").unwrap();
        let first_id = session.game().unwrap().game_id();

        session.next_question();
        assert_eq!(prompt(&session), Some("two"));
        let game = session.game().unwrap();
        assert_ne!(game.game_id(), first_id);
        assert!(game.current_row().is_blank());

        session.next_question();
        assert_eq!(prompt(&session), Some("one"));
    }

    #[test]
    fn backward_navigation_skips_invalid_records_backwards() {
        let mut session = session(vec![
            record("one", ["A", "B", "C", "D", "E"], &["art"]),
            record("two", ["V", "W", "X", "Y", "Z"], &["art"]),
            invalid("bad"),
        ]);

        session.previous_question();
        assert_eq!(prompt(&session), Some("two"));
        assert_eq!(session.filter().cursor(), 1);
    }

    #[test]
    fn category_selection_reloads() {
        let mut session = session(vec![
            record("one", ["A", "B", "C", "D", "E"], &["art"]),
            record("two", ["V", "W", "X", "Y", "Z"], &["science"]),
        ]);

        session.toggle_category("science");
        assert_eq!(prompt(&session), Some("two"));
        assert_eq!(session.filter().len(), 1);

        session.set_selected_categories(["sports".to_string()].into_iter().collect());
        assert!(session.question().is_none());

        session.set_selected_categories(BTreeSet::new());
        assert_eq!(prompt(&session), Some("one"));
        assert_eq!(session.categories().len(), 2);
    }

    #[test]
    fn winning_allows_advance() {
        let mut session = session(vec![record("one", ["A", "B", "C", "D", "E"], &["art"])]);
        for value in ["A", "B", "C", "D", "E"] {
            session.select_option(value).unwrap();
        }

        assert!(matches!(session.check_answer(), Ok(Evaluation::Won { .. })));
        assert!(session.can_advance());
        assert!(!session.reveal_is_scheduled());
    }

    #[test]
    fn random_question_stays_within_filter() {
        let mut session = session(vec![
            record("one", ["A", "B", "C", "D", "E"], &["art"]),
            record("two", ["V", "W", "X", "Y", "Z"], &["science"]),
            record("three", ["A", "B", "C", "D", "E"], &["science"]),
        ]);
        session.toggle_category("science");

        for _ in 0..10 {
            session.random_question();
            let text = prompt(&session).unwrap();
            assert!(text == "two" || text == "three");
        }
    }

    #[test]
    fn visual_question_image_follows_reveal() {
        let mut visual = record("pic", ["A", "B", "C", "D", "E"], &["art"]);
        visual.images = Some(crate::question::VisualRefs {
            question: "q.png".to_string(),
            answer: "a.png".to_string(),
        });
        let mut session = session(vec![visual]);
        assert_eq!(session.current_image(), Some("q.png"));

        for value in ["A", "B", "C", "D", "E"] {
            session.select_option(value).unwrap();
        }
        session.check_answer().unwrap();
        assert_eq!(session.current_image(), Some("a.png"));
        assert_eq!(session.game().unwrap().grid().len(), MAX_ATTEMPTS);
    }
}
