//! Terminal frontend for the oxo engine.
//!
//! Presentation only: reads events from stdin, forwards them to the game
//! controller, and renders the board and status line after each one.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use oxo::{Difficulty, Game, Mark, Outcome, Phase};
use std::io::{self, BufRead};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

/// An event emitted by the user, in the shape the controller consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    /// Human move on a cell (0-8).
    Move(usize),
    /// Difficulty change.
    Level(Difficulty),
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
}

/// Rejected user input.
#[derive(Debug, derive_more::Display, derive_more::Error)]
enum InputError {
    /// The line matched no command shape.
    #[display("unknown command {command:?}; try 1-9, level <name>, reset, or quit")]
    UnknownCommand {
        /// The offending line.
        command: String,
    },
    /// `level` named a difficulty that does not exist.
    #[display("unknown difficulty {name:?}; options are easy, medium, hard")]
    UnknownLevel {
        /// The offending name.
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut game = match cli.seed {
        Some(seed) => Game::seeded(cli.difficulty, seed),
        None => Game::new(cli.difficulty),
    };

    let levels: Vec<String> = Difficulty::iter().map(|d| d.to_string()).collect();
    println!("oxo - tic-tac-toe. You are X; cells are numbered 1-9.");
    println!(
        "Commands: 1-9 to move, level <{}>, reset, quit.",
        levels.join("|")
    );
    render(&game, cli.json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_event(&line) {
            Ok(Event::Move(index)) => {
                if game.submit_human_move(index) {
                    render(&game, cli.json)?;
                } else if matches!(game.phase(), Phase::Over(_)) {
                    println!("The game is over; type reset to play again.");
                } else {
                    println!("Cell {} is unavailable.", index + 1);
                }
            }
            Ok(Event::Level(difficulty)) => {
                game.set_difficulty(difficulty);
                println!("Difficulty set to {difficulty}.");
            }
            Ok(Event::Reset) => {
                game.reset();
                render(&game, cli.json)?;
            }
            Ok(Event::Quit) => break,
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Parses one input line into an event.
fn parse_event(line: &str) -> Result<Event, InputError> {
    let input = line.trim();

    if let Ok(cell) = input.parse::<usize>()
        && (1..=9).contains(&cell)
    {
        return Ok(Event::Move(cell - 1));
    }

    let mut words = input.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("level"), Some(name), None) => {
            name.parse::<Difficulty>()
                .map(Event::Level)
                .map_err(|_| InputError::UnknownLevel {
                    name: name.to_string(),
                })
        }
        (Some("reset"), None, None) => Ok(Event::Reset),
        (Some("quit" | "q"), None, None) => Ok(Event::Quit),
        _ => Err(InputError::UnknownCommand {
            command: input.to_string(),
        }),
    }
}

/// Renders the board and the status line, plus a JSON snapshot on request.
fn render(game: &Game, json: bool) -> Result<()> {
    println!("\n{}", game.board().display());
    match game.phase() {
        Phase::Over(Outcome::Win(mark)) => println!("Winner: {mark}"),
        Phase::Over(_) => println!("Draw"),
        Phase::AwaitingHuman => println!("Next turn: {}", Mark::X),
        Phase::AwaitingComputer => println!("Next turn: {}", Mark::O),
    }
    if json {
        println!("{}", serde_json::to_string(&game.snapshot())?);
    }
    Ok(())
}
