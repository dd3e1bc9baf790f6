//! Exhaustive game-tree search (hard difficulty).

use super::Strategy;
use crate::rules::evaluate;
use crate::types::{Board, Mark, Outcome};
use tracing::debug;

/// Full-depth minimax over the remaining game tree.
///
/// The 3x3 tree is small enough to search exhaustively on every move, so
/// there is no pruning and no memoization. The search is generic over the
/// mark it plays for: it maximizes for `mark` and assumes the opponent
/// minimizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Strategy for Minimax {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        let mut scratch = board.clone();
        let mut best_score = i32::MIN;
        let mut best_move = None;

        // Ascending scan with a strictly-greater comparison: among equally
        // scored moves the lowest index wins.
        for index in 0..9 {
            if !scratch.is_empty(index) {
                continue;
            }
            scratch.place(index, mark);
            let score = search(&mut scratch, mark, 1, false);
            scratch.clear(index);

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
        }

        if let Some(index) = best_move {
            debug!(
                strategy = self.name(),
                position = index,
                score = best_score,
                "Chose move"
            );
        }
        best_move
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Scores the board for `mark`: +1 for its win, -1 for the opponent's, 0
/// for a draw. `depth` counts plies from the root but does not weight the
/// score, so a win in one move and a win in five are worth the same.
///
/// Every hypothetical placement is undone before the function returns, so
/// sibling branches never observe each other's moves.
fn search(board: &mut Board, mark: Mark, depth: u32, maximizing: bool) -> i32 {
    match evaluate(board) {
        Outcome::Win(winner) => return if winner == mark { 1 } else { -1 },
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let to_move = if maximizing { mark } else { mark.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..9 {
        if !board.is_empty(index) {
            continue;
        }
        board.place(index, to_move);
        let score = search(board, mark, depth + 1, !maximizing);
        board.clear(index);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
