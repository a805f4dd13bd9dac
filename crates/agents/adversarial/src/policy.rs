//! Pre-search move selection shared by both engines.

use isolation_core::{Board, Move};

/// The one-entry opening book: open at roughly a quarter of the board's
/// height and width. Applied on the very first move of the game instead of
/// searching an empty board.
pub fn opening_move(board: &Board) -> Move {
    Move::new(
        (board.height as f64 / 4.0).round() as i32,
        (board.width as f64 / 4.0).round() as i32,
    )
}

/// Positions that never reach the search engine: no legal move (sentinel),
/// the true game start (opening book), or a single forced reply.
pub(crate) fn shortcut(board: &Board) -> Option<Move> {
    let moves = board.legal_moves(board.active_player());
    if moves.is_empty() {
        return Some(Move::NONE);
    }
    if board.move_count == 0 {
        return Some(opening_move(board));
    }
    if let [only] = moves.as_slice() {
        return Some(*only);
    }
    None
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
