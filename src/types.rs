//! Core domain types for the tic-tac-toe engine.

use serde::{Deserialize, Serialize};

/// A mark on the board. X is always the human, O is always the computer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// The human's mark (moves first).
    #[display("X")]
    X,
    /// The computer's mark (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// 3x3 board, cells indexed 0-8 in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn get(&self, index: usize) -> Square {
        self.squares[index]
    }

    /// Checks whether the cell at `index` holds no mark.
    pub fn is_empty(&self, index: usize) -> bool {
        self.squares[index] == Square::Empty
    }

    /// Places `mark` at `index`. The cell must be empty; the public move
    /// APIs guard occupancy before calling this.
    pub fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.is_empty(index), "cell {index} is already occupied");
        self.squares[index] = Square::Occupied(mark);
    }

    /// Reverts a hypothetical placement. Only the search is allowed to
    /// vacate a cell; everything else goes through [`Board::new`].
    pub(crate) fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }

    /// Indices of the empty cells, in ascending order.
    pub fn empties(&self) -> impl Iterator<Item = usize> + '_ {
        (0..9).filter(|&i| self.is_empty(i))
    }

    /// Checks whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(mark))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable grid. Empty cells show their
    /// one-based cell number so the frontend can prompt with it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of evaluating a board. Derived on demand, never stored on the
/// board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and no line is complete.
    Ongoing,
    /// A line of three equal marks exists.
    Win(Mark),
    /// The board is full with no winner.
    Draw,
}

/// Computer skill level. Selects which move strategy answers the human;
/// switchable at any time and effective on the next computer move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Random play.
    #[default]
    Easy,
    /// Takes an immediate win when one exists, otherwise plays randomly.
    Medium,
    /// Full-depth minimax search.
    Hard,
}
