//! Random-move Isolation agent.
//!
//! Selects uniformly at random from the legal moves. Useful for:
//! - Testing the harness before pitting real agents against each other
//! - An Elo floor (any search agent should easily beat this)
//! - Stress testing move generation

use isolation_core::{Agent, Board, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An agent that plays random legal moves.
///
/// It never looks at the clock and never evaluates a position; it simply
/// picks one of the active player's moves, or the sentinel when there is
/// none.
#[derive(Debug, Clone, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _time_left: &dyn Fn() -> f64) -> Move {
        let moves = board.legal_moves(board.active_player());
        moves.choose(&mut thread_rng()).copied().unwrap_or(Move::NONE)
    }

    fn name(&self) -> &str {
        "random"
    }
}
