//! Match runner for playing games between agents

use std::time::Duration;

use isolation_core::{countdown, Agent, Board, Player};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Board dimensions
    pub board_width: i32,
    pub board_height: i32,
    /// Wall-clock budget per move in milliseconds
    pub move_time_ms: u64,
    /// Play one random ply per player before handing over to the agents, so
    /// deterministic agents do not replay the same game num_games times
    pub random_openings: bool,
    /// Whether to alternate who moves first each game
    pub alternate_first: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            board_width: 7,
            board_height: 7,
            move_time_ms: 150,
            random_openings: true,
            alternate_first: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file; missing keys fall back to defaults.
    pub fn from_toml_file(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

/// Runs matches between two agents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two agents
    ///
    /// Returns the result from agent1's perspective
    pub fn run_match(&self, agent1: &mut dyn Agent, agent2: &mut dyn Agent) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate who moves first if configured
            let agent1_first = !self.config.alternate_first || game_num % 2 == 0;

            let game_result = if agent1_first {
                self.play_game(agent1, agent2)
            } else {
                // Flip result since agent1 moved second
                match self.play_game(agent2, agent1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
            }

            if self.config.verbose {
                let seat = if agent1_first { "1st" } else { "2nd" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    seat,
                    result.wins,
                    result.losses
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from the first mover's
    /// perspective
    fn play_game(&self, first: &mut dyn Agent, second: &mut dyn Agent) -> GameResult {
        let mut board = Board::new(self.config.board_width, self.config.board_height);
        first.new_game();
        second.new_game();

        if self.config.random_openings {
            let mut rng = thread_rng();
            for _ in 0..2 {
                let moves = board.legal_moves(board.active_player());
                if let Some(&mv) = moves.choose(&mut rng) {
                    board
                        .apply_move(mv)
                        .expect("opening ply drawn from the legal list");
                }
            }
        }

        // Each move blocks one cell, so this loop always terminates.
        loop {
            let mover = board.active_player();
            if board.legal_moves(mover).is_empty() {
                return loss_for(mover);
            }

            // Fresh budget per turn
            let time_left = countdown(Duration::from_millis(self.config.move_time_ms));
            let mv = match mover {
                Player::One => first.select_move(&board, &time_left),
                Player::Two => second.select_move(&board, &time_left),
            };

            // A sentinel or illegal move from a position with moves left is
            // a forfeit.
            if board.apply_move(mv).is_err() {
                return loss_for(mover);
            }
        }
    }
}

/// Result from the first mover's perspective when `loser` is out of the game.
fn loss_for(loser: Player) -> GameResult {
    match loser {
        Player::One => GameResult::Loss,
        Player::Two => GameResult::Win,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    agent1: &mut dyn Agent,
    agent2: &mut dyn Agent,
    num_games: u32,
    move_time_ms: u64,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        move_time_ms,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(agent1, agent2)
}
