//! Win and draw detection.

use crate::types::{Board, Outcome, Square};

/// The eight winning lines, scanned in this fixed order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Evaluates a board: the first line holding three equal marks wins, a full
/// board with no winner is a draw, anything else is still in play.
///
/// Pure and cheap; the minimax search calls this on every node it visits.
pub fn evaluate(board: &Board) -> Outcome {
    for [a, b, c] in LINES {
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Outcome::Win(mark);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
