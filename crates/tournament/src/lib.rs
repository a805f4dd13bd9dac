//! Tournament Runner for Isolation agents
//!
//! This crate provides infrastructure for:
//! - Running matches between different agents
//! - Tracking Elo ratings across agent configurations
//! - Generating reports for heuristic comparison
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the alpha-beta and minimax agents
//! cargo run -p tournament -- match alphabeta minimax:3:balanced --games 20
//!
//! # Run a gauntlet (one agent vs the standard field)
//! cargo run -p tournament -- gauntlet alphabeta:aggressive --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
