//! One-ply lookahead (medium difficulty).
//!
//! Scans for a cell that wins the game for its own mark immediately and
//! takes the first one found. It does not look for cells that would deny
//! the opponent a win; with no winning cell of its own it falls back to
//! random play.

use super::{Random, Strategy};
use crate::rules::evaluate;
use crate::types::{Board, Mark, Outcome};
use tracing::debug;

/// Takes an immediate win when one exists, otherwise plays randomly.
#[derive(Debug, Clone)]
pub struct Blocking {
    fallback: Random,
}

impl Blocking {
    /// Creates the strategy with fresh entropy for its random fallback.
    pub fn new() -> Self {
        Self {
            fallback: Random::new(),
        }
    }

    /// Creates the strategy with a seeded random fallback.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            fallback: Random::with_seed(seed),
        }
    }
}

impl Default for Blocking {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Blocking {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        for index in board.empties() {
            let mut probe = board.clone();
            probe.place(index, mark);
            if evaluate(&probe) == Outcome::Win(mark) {
                debug!(strategy = self.name(), position = index, "Taking the win");
                return Some(index);
            }
        }
        self.fallback.select_move(board, mark)
    }

    fn name(&self) -> &'static str {
        "blocking"
    }
}
