use crate::board::Board;
use crate::types::{Move, Player};

/// Knight move deltas in canonical order. Tie-breaking in the search engines
/// depends on this order staying stable.
pub const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);
    legal_moves_into(board, player, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// A placed player may jump to any open cell a knight's move away. A player
/// who has not been placed yet may open on any open cell; those are listed
/// row-major, which is the canonical order for placement plies.
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    match board.location(player) {
        Some(at) => {
            for (dr, dc) in KNIGHT_DELTAS {
                let (row, col) = (at.row + dr, at.col + dc);
                if board.is_open(row, col) {
                    out.push(Move::new(row, col));
                }
            }
        }
        None => {
            for row in 0..board.height {
                for col in 0..board.width {
                    if board.is_open(row, col) {
                        out.push(Move::new(row, col));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
