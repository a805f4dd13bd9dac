pub mod board;
pub mod clock;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not agent-specific)
pub use board::*;
pub use clock::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Agent trait — implemented by all isolation agents (search, random, etc.)
// =============================================================================

/// Trait that all isolation agents implement.
///
/// This is the sole entry point the harness calls: given the current state
/// and a time source, produce a move before the turn clock runs out.
pub trait Agent: Send {
    /// Choose a move for the active player.
    ///
    /// # Arguments
    /// * `board` - The current game state
    /// * `time_left` - Milliseconds remaining in the current turn, polled
    ///   synchronously and frequently during search
    ///
    /// # Returns
    /// A legal move, or [`Move::NONE`] if the active player has none.
    fn select_move(&mut self, board: &Board, time_left: &dyn Fn() -> f64) -> Move;

    /// Returns the agent's name for reporting and Elo tracking.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
