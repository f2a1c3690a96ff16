//! Scripted Game
//!
//! Plays two questions end to end against an embedded pool:
//! - a win on the second attempt, after a repeated guess is rejected
//! - a loss that waits for the delayed answer reveal
//!
//! Pass `--online` to fetch the pool from the configured URL instead.
//! Set `RUST_LOG=trizzle=debug` for engine logs.
//!
//! Run with: cargo run --example play

use trizzle::config::GameConfig;
use trizzle::core::{AttemptRow, GuessStatus};
use trizzle::pool::parse_pool;
use trizzle::session::Session;

const POOL: &str = r#"{"questions": [
    {
        "text": "Order these events chronologically: 1) earliest 5) latest",
        "options": ["Moon landing", "Printing press", "Magna Carta", "French Revolution", "World Wide Web", "Steam engine"],
        "answer": ["Magna Carta", "Printing press", "French Revolution", "Moon landing", "World Wide Web"],
        "categories": ["history"]
    },
    {
        "text": "Order the planets by distance from the sun",
        "options": ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn"],
        "answer": ["Mercury", "Venus", "Earth", "Mars", "Jupiter"],
        "categories": ["science"]
    }
]}"#;

const CONFIG: &str = r#"
reveal_delay_ms = 3000
shuffle_seed = 7
"#;

fn symbol(status: GuessStatus) -> char {
    match status {
        GuessStatus::Exact => '#',
        GuessStatus::Present => '+',
        GuessStatus::Absent => '.',
        GuessStatus::Unset | GuessStatus::Empty => ' ',
    }
}

fn render(row: &AttemptRow) -> String {
    row.slots()
        .iter()
        .map(|guess| format!("[{} {}]", symbol(guess.status), guess.value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn show(session: &Session) {
    if let Some(question) = session.question() {
        for line in question.prompt_lines() {
            println!("  {line}");
        }
        println!("  options: {}", question.options().join(", "));
    }
}

fn play(session: &mut Session, guesses: &[[&str; 5]]) {
    show(session);
    for guess in guesses {
        for value in guess {
            if let Err(notice) = session.select_option(value) {
                println!("  ! {notice}");
            }
        }
        match session.check_answer() {
            Ok(evaluation) => println!("  {}", render(evaluation.scored())),
            Err(notice) => {
                println!("  ! {notice}");
                // Rejected attempts stay in the row; clear it for the next try.
                while session.delete_last().is_some() {}
            }
        }
        println!("  > {}", session.display_message());
        if session.can_advance() {
            break;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    println!("=== Trizzle ===\n");

    let config = GameConfig::from_toml_str(CONFIG)?;
    let mut session = if std::env::args().any(|arg| arg == "--online") {
        Session::connect(config).await
    } else {
        Session::new(parse_pool(POOL)?, config)
    };

    println!(
        "Categories: {}",
        session.categories().into_iter().collect::<Vec<_>>().join(", ")
    );

    println!("\n--- Winning game ---");
    session.toggle_category("science");
    play(
        &mut session,
        &[
            ["Venus", "Mercury", "Earth", "Mars", "Saturn"],
            ["Venus", "Mercury", "Earth", "Mars", "Saturn"],
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter"],
        ],
    );
    if let Some(game) = session.game() {
        println!("  flashing cells: {:?}", game.flashing_cells());
    }

    println!("\n--- Losing game ---");
    session.toggle_category("science");
    session.toggle_category("history");
    play(
        &mut session,
        &[
            ["Moon landing", "Printing press", "Magna Carta", "French Revolution", "World Wide Web"],
            ["Printing press", "Magna Carta", "French Revolution", "Moon landing", "World Wide Web"],
            ["Magna Carta", "Steam engine", "French Revolution", "Moon landing", "World Wide Web"],
            ["Magna Carta", "Printing press", "Moon landing", "French Revolution", "World Wide Web"],
            ["Magna Carta", "Printing press", "French Revolution", "World Wide Web", "Moon landing"],
        ],
    );

    println!("  waiting {:?} for the answer...", session.config().reveal_delay());
    if session.wait_for_reveal().await {
        if let Some(row) = session.game().and_then(|game| game.grid().last()) {
            println!("  > {}", session.display_message());
            println!("  {}", render(row));
        }
    }

    println!("\n=== Done ===");
    Ok(())
}
