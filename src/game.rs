//! Game controller: board ownership, turn sequencing, difficulty selection.

use crate::rules::evaluate;
use crate::strategy::Strategy;
use crate::types::{Board, Difficulty, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHuman,
    /// The human has moved; the computer's reply is owed. Transient: the
    /// controller resolves it synchronously within the same call.
    AwaitingComputer,
    /// The game has ended.
    Over(Outcome),
}

/// Serializable view of the game for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current board contents.
    pub board: Board,
    /// Active difficulty.
    pub difficulty: Difficulty,
    /// Current phase.
    pub phase: Phase,
    /// Whose mark moves next, if the game is still open.
    pub to_move: Option<Mark>,
}

/// A human-versus-computer game. The human always plays X and moves first;
/// the computer answers every accepted human move within the same call.
///
/// Invalid submissions (occupied cell, out-of-range index, game already
/// over) are silent no-ops rather than errors, so the presentation layer
/// can forward events without pre-validating them.
pub struct Game {
    board: Board,
    phase: Phase,
    difficulty: Difficulty,
    strategy: Box<dyn Strategy>,
    seed: Option<u64>,
}

impl Game {
    /// Creates a new game awaiting the human's first move.
    pub fn new(difficulty: Difficulty) -> Self {
        info!(%difficulty, "Starting new game");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHuman,
            difficulty,
            strategy: difficulty.strategy(),
            seed: None,
        }
    }

    /// Creates a new game whose strategies draw from a seeded random
    /// source, making the computer's play reproducible.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        info!(%difficulty, seed, "Starting new seeded game");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHuman,
            difficulty,
            strategy: difficulty.seeded_strategy(seed),
            seed: Some(seed),
        }
    }

    /// Resumes play from an arbitrary board position.
    ///
    /// A terminal board enters [`Phase::Over`] directly. On an open board
    /// the mark counts decide the turn: balanced counts await the human,
    /// and an X surplus means the computer owes a reply, which is played
    /// immediately.
    pub fn from_board(board: Board, difficulty: Difficulty) -> Self {
        let mut game = Self {
            board,
            phase: Phase::AwaitingHuman,
            difficulty,
            strategy: difficulty.strategy(),
            seed: None,
        };
        match evaluate(&game.board) {
            Outcome::Ongoing => {
                if game.board.count(Mark::X) > game.board.count(Mark::O) {
                    game.phase = Phase::AwaitingComputer;
                    game.take_computer_turn();
                }
            }
            outcome => game.phase = Phase::Over(outcome),
        }
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the active difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Evaluates the board. Recomputed on demand; never cached.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Whose mark moves next, if the game is still open.
    pub fn to_move(&self) -> Option<Mark> {
        match self.phase {
            Phase::AwaitingHuman => Some(Mark::X),
            Phase::AwaitingComputer => Some(Mark::O),
            Phase::Over(_) => None,
        }
    }

    /// Returns a serializable view of the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            difficulty: self.difficulty,
            phase: self.phase,
            to_move: self.to_move(),
        }
    }

    /// Submits the human's move at `index` (0-8).
    ///
    /// Returns `true` if the move was applied. Returns `false`, changing
    /// nothing, when it is not the human's turn, the game is over, the
    /// index is out of range, or the cell is occupied.
    ///
    /// An accepted move that leaves the game open hands the turn to the
    /// computer, whose reply is resolved before this method returns.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) -> bool {
        if self.phase != Phase::AwaitingHuman {
            debug!(phase = ?self.phase, "Rejecting move: not the human's turn");
            return false;
        }
        if index >= 9 || !self.board.is_empty(index) {
            debug!(index, "Rejecting move: cell unavailable");
            return false;
        }

        self.board.place(index, Mark::X);
        info!(index, "Human placed X");

        match evaluate(&self.board) {
            Outcome::Ongoing => {
                self.phase = Phase::AwaitingComputer;
                self.take_computer_turn();
            }
            outcome => {
                info!(?outcome, "Game over");
                self.phase = Phase::Over(outcome);
            }
        }
        true
    }

    /// Plays the computer's move. Fires exactly once per transition into
    /// [`Phase::AwaitingComputer`]: the phase guard makes a redundant call
    /// a no-op.
    fn take_computer_turn(&mut self) {
        if self.phase != Phase::AwaitingComputer {
            return;
        }

        // The controller only enters AwaitingComputer on an ongoing board,
        // so at least one cell is open.
        let index = self
            .strategy
            .select_move(&self.board, Mark::O)
            .expect("open game must offer the strategy a move");
        self.board.place(index, Mark::O);
        info!(index, strategy = self.strategy.name(), "Computer placed O");

        self.phase = match evaluate(&self.board) {
            Outcome::Ongoing => Phase::AwaitingHuman,
            outcome => {
                info!(?outcome, "Game over");
                Phase::Over(outcome)
            }
        };
    }

    /// Switches the computer difficulty. Takes effect on the next computer
    /// move; never triggers one. Selecting the current difficulty keeps the
    /// active strategy (and its random stream) untouched.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty {
            return;
        }
        info!(from = %self.difficulty, to = %difficulty, "Switching difficulty");
        self.difficulty = difficulty;
        self.strategy = match self.seed {
            Some(seed) => difficulty.seeded_strategy(seed),
            None => difficulty.strategy(),
        };
    }

    /// Clears the board and returns to the human's turn. The difficulty
    /// and the active strategy carry over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.phase = Phase::AwaitingHuman;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
