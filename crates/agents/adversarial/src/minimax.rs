//! Depth-limited minimax search.

use isolation_core::{Agent, Board, Clock, Move, Player, SearchTimeout};

use crate::heuristic::Heuristic;
use crate::policy;
use crate::SearchConfig;

/// Game-playing agent that chooses a move with fixed-depth exhaustive
/// minimax.
pub struct MinimaxAgent {
    heuristic: Box<dyn Heuristic>,
    config: SearchConfig,
    nodes: u64,
}

impl MinimaxAgent {
    pub fn new(heuristic: impl Heuristic + 'static) -> Self {
        Self::with_config(heuristic, SearchConfig::default())
    }

    pub fn with_config(heuristic: impl Heuristic + 'static, config: SearchConfig) -> Self {
        Self {
            heuristic: Box::new(heuristic),
            config,
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, time_left: &dyn Fn() -> f64) -> Move {
        self.nodes = 0;
        if let Some(mv) = policy::shortcut(board) {
            return mv;
        }

        let clock = Clock::new(time_left, self.config.timeout_threshold_ms);
        // A timeout wipes the half-scanned root; fixed-depth mode degrades to
        // the sentinel.
        search(
            board,
            self.config.depth,
            self.heuristic.as_ref(),
            board.active_player(),
            &clock,
            &mut self.nodes,
        )
        .unwrap_or(Move::NONE)
    }

    fn name(&self) -> &str {
        "minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Root of the fixed-depth search: the best move for the active player, or
/// the sentinel when depth is exhausted or no move exists.
pub(crate) fn search(
    board: &Board,
    depth: u8,
    heuristic: &dyn Heuristic,
    player: Player,
    clock: &Clock<'_>,
    nodes: &mut u64,
) -> Result<Move, SearchTimeout> {
    let mut best_move = Move::NONE;
    let mut best_score = f64::NEG_INFINITY;

    let moves = board.legal_moves(board.active_player());
    if depth == 0 || moves.is_empty() {
        return Ok(best_move);
    }

    for mv in moves {
        let value = min_value(
            &board.forecast_move(mv),
            depth - 1,
            heuristic,
            player,
            clock,
            nodes,
        )?;
        // `>=` keeps the last move seen among equal scores.
        if value >= best_score {
            best_move = mv;
            best_score = value;
        }
    }
    Ok(best_move)
}

pub(crate) fn max_value(
    board: &Board,
    depth: u8,
    heuristic: &dyn Heuristic,
    player: Player,
    clock: &Clock<'_>,
    nodes: &mut u64,
) -> Result<f64, SearchTimeout> {
    clock.check()?;
    *nodes += 1;

    let moves = board.legal_moves(board.active_player());
    if depth == 0 || moves.is_empty() {
        return Ok(heuristic.evaluate(board, player));
    }

    let mut best_score = f64::NEG_INFINITY;
    for mv in moves {
        best_score = best_score.max(min_value(
            &board.forecast_move(mv),
            depth - 1,
            heuristic,
            player,
            clock,
            nodes,
        )?);
    }
    Ok(best_score)
}

pub(crate) fn min_value(
    board: &Board,
    depth: u8,
    heuristic: &dyn Heuristic,
    player: Player,
    clock: &Clock<'_>,
    nodes: &mut u64,
) -> Result<f64, SearchTimeout> {
    clock.check()?;
    *nodes += 1;

    let moves = board.legal_moves(board.active_player());
    if depth == 0 || moves.is_empty() {
        return Ok(heuristic.evaluate(board, player));
    }

    let mut best_score = f64::INFINITY;
    for mv in moves {
        best_score = best_score.min(max_value(
            &board.forecast_move(mv),
            depth - 1,
            heuristic,
            player,
            clock,
            nodes,
        )?);
    }
    Ok(best_score)
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
