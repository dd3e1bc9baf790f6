//! Move selection strategies for the computer player.

mod blocking;
mod minimax;
mod random;

pub use blocking::Blocking;
pub use minimax::Minimax;
pub use random::Random;

use crate::types::{Board, Difficulty, Mark};

/// A policy that picks the computer's next move.
pub trait Strategy: Send {
    /// Selects an empty cell for `mark` to play.
    ///
    /// Returns `None` only when the board has no empty cell; the game
    /// controller checks the outcome first and never calls a strategy on a
    /// finished board.
    fn select_move(&mut self, board: &Board, mark: Mark) -> Option<usize>;

    /// The strategy's display name.
    fn name(&self) -> &'static str;
}

impl Difficulty {
    /// Builds the strategy for this difficulty with fresh entropy.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(Random::new()),
            Difficulty::Medium => Box::new(Blocking::new()),
            Difficulty::Hard => Box::new(Minimax),
        }
    }

    /// Builds the strategy for this difficulty with a seeded random source,
    /// so move sequences are reproducible.
    pub fn seeded_strategy(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(Random::with_seed(seed)),
            Difficulty::Medium => Box::new(Blocking::with_seed(seed)),
            Difficulty::Hard => Box::new(Minimax),
        }
    }
}
