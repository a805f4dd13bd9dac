//! Adversarial search agents for Isolation.
//!
//! Two engines share one move-selection policy and one set of heuristics:
//! - [`MinimaxAgent`]: fixed-depth exhaustive minimax
//! - [`AlphaBetaAgent`]: iterative-deepening minimax with alpha-beta pruning,
//!   refining its answer until the turn clock runs out

mod alphabeta;
mod heuristic;
mod minimax;
mod policy;

pub use alphabeta::AlphaBetaAgent;
pub use heuristic::{by_name, Aggressive, Balanced, Centering, Heuristic};
pub use minimax::MinimaxAgent;
pub use policy::opening_move;

/// Construction-time knobs shared by the search agents.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies to explore in fixed-depth mode.
    pub depth: u8,
    /// Remaining-time floor in milliseconds below which search aborts. Must
    /// cover the cost of unwinding the recursion.
    pub timeout_threshold_ms: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            timeout_threshold_ms: 10.0,
        }
    }
}
