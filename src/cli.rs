//! Command-line options for the terminal frontend.

use clap::Parser;
use oxo::Difficulty;

/// Play tic-tac-toe against the computer in the terminal.
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting computer difficulty (easy, medium, hard)
    #[arg(short, long, default_value = "easy")]
    pub difficulty: Difficulty,

    /// Seed for the computer's random strategies, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON snapshot of the game after every accepted event
    #[arg(long)]
    pub json: bool,
}
