//! Iterative-deepening minimax with alpha-beta pruning.

use isolation_core::{Agent, Board, Clock, Move, Player, SearchTimeout};

use crate::heuristic::Heuristic;
use crate::policy;
use crate::SearchConfig;

/// Game-playing agent that deepens an alpha-beta search one ply at a time
/// until the turn clock runs out, keeping the move from the last completed
/// iteration.
pub struct AlphaBetaAgent {
    heuristic: Box<dyn Heuristic>,
    threshold_ms: f64,
    window: (f64, f64),
    nodes: u64,
    depth_reached: u8,
}

impl AlphaBetaAgent {
    pub fn new(heuristic: impl Heuristic + 'static) -> Self {
        Self {
            heuristic: Box::new(heuristic),
            threshold_ms: SearchConfig::default().timeout_threshold_ms,
            window: (f64::NEG_INFINITY, f64::INFINITY),
            nodes: 0,
            depth_reached: 0,
        }
    }

    /// Overrides the abort threshold in milliseconds.
    pub fn with_threshold(mut self, threshold_ms: f64) -> Self {
        self.threshold_ms = threshold_ms;
        self
    }

    /// Restarts every deepening iteration from this root window instead of
    /// the full open interval. Not required for correctness.
    pub fn with_window(mut self, alpha: f64, beta: f64) -> Self {
        self.window = (alpha, beta);
        self
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Deepest fully completed iteration of the most recent search.
    pub fn depth_reached(&self) -> u8 {
        self.depth_reached
    }
}

impl Agent for AlphaBetaAgent {
    fn select_move(&mut self, board: &Board, time_left: &dyn Fn() -> f64) -> Move {
        self.nodes = 0;
        self.depth_reached = 0;
        if let Some(mv) = policy::shortcut(board) {
            return mv;
        }

        let clock = Clock::new(time_left, self.threshold_ms);
        let player = board.active_player();
        let mut best_move = Move::NONE;

        // The game tree is no deeper than the number of open cells; past that
        // every iteration would repeat the same result.
        let ceiling = board.open_cells().min(u8::MAX as u32) as u8;
        for depth in 1..=ceiling {
            let (alpha, beta) = self.window;
            match search(
                board,
                depth,
                alpha,
                beta,
                self.heuristic.as_ref(),
                player,
                &clock,
                &mut self.nodes,
            ) {
                Ok(mv) => {
                    best_move = mv;
                    self.depth_reached = depth;
                }
                Err(SearchTimeout) => break,
            }
        }
        best_move
    }

    fn name(&self) -> &str {
        "alphabeta"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.depth_reached = 0;
    }
}

/// One bounded search from the root. Tracks the best move under the same
/// `>=` tie-break as the fixed-depth engine and cuts off once a child value
/// reaches the caller's `beta`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn search(
    board: &Board,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    heuristic: &dyn Heuristic,
    player: Player,
    clock: &Clock<'_>,
    nodes: &mut u64,
) -> Result<Move, SearchTimeout> {
    clock.check()?;
    *nodes += 1;

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
            alpha,
            beta,
            heuristic,
            player,
            clock,
            nodes,
        )?;
        alpha = alpha.max(value);
        if value >= best_score {
            best_move = mv;
            best_score = value;
        }
        if value >= beta {
            return Ok(best_move);
        }
    }
    Ok(best_move)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn max_value(
    board: &Board,
    depth: u8,
    mut alpha: f64,
    beta: f64,
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
            alpha,
            beta,
            heuristic,
            player,
            clock,
            nodes,
        )?);
        if best_score >= beta {
            return Ok(best_score); // beta cutoff
        }
        alpha = alpha.max(best_score);
    }
    Ok(best_score)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn min_value(
    board: &Board,
    depth: u8,
    alpha: f64,
    mut beta: f64,
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
            alpha,
            beta,
            heuristic,
            player,
            clock,
            nodes,
        )?);
        if best_score <= alpha {
            return Ok(best_score); // alpha cutoff
        }
        beta = beta.min(best_score);
    }
    Ok(best_score)
}

#[cfg(test)]
#[path = "alphabeta_tests.rs"]
mod alphabeta_tests;
