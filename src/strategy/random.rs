//! Uniformly random move selection (easy difficulty).

use super::Strategy;
use crate::types::{Board, Mark};
use tracing::debug;

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct Random {
    rng: fastrand::Rng,
}

impl Random {
    /// Creates a random strategy seeded from the system entropy source.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a random strategy with a fixed seed for reproducible play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Random {
    fn select_move(&mut self, board: &Board, _mark: Mark) -> Option<usize> {
        let open: Vec<usize> = board.empties().collect();
        if open.is_empty() {
            return None;
        }
        let choice = open[self.rng.usize(..open.len())];
        debug!(strategy = self.name(), position = choice, "Chose move");
        Some(choice)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
