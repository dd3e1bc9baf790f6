//! Tic-tac-toe engine with selectable computer difficulty.
//!
//! The human plays X against a computer playing O at one of three skill
//! levels: random play, one-ply lookahead, or full-depth minimax. The
//! crate owns the board model, win/draw detection, the move strategies,
//! and the turn-sequencing controller; rendering and input belong to the
//! embedding frontend, which submits human moves and reads state back.
//!
//! # Example
//!
//! ```
//! use oxo::{Difficulty, Game, Outcome, Phase};
//!
//! let mut game = Game::seeded(Difficulty::Hard, 7);
//!
//! // Human opens in the center; the computer replies within the call.
//! assert!(game.submit_human_move(4));
//! assert_eq!(game.outcome(), Outcome::Ongoing);
//! assert_eq!(game.phase(), Phase::AwaitingHuman);
//!
//! // Occupied cells are silently rejected.
//! assert!(!game.submit_human_move(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod rules;
mod strategy;
mod types;

pub use game::{Game, Phase, Snapshot};
pub use rules::{LINES, evaluate};
pub use strategy::{Blocking, Minimax, Random, Strategy};
pub use types::{Board, Difficulty, Mark, Outcome, Square};
