//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::elo::MatchResult;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating agents
    pub participants: Vec<String>,
    /// All match results (indexed by participant pairs)
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub agent1: String,
    pub agent2: String,
    pub result: MatchResult,
}

/// Tournament configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub move_time_ms: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            move_time_ms: 150,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, agent1: &str, agent2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            agent1: agent1.to_string(),
            agent2: agent2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, {} ms/move\n\n",
            self.config.games_per_match, self.config.move_time_ms
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<22} vs {:<22} {:>5}-{:<5}\n",
            "Agent 1", "Agent 2", "W", "L"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<22} vs {:<22} {:>5}-{:<5}\n",
                entry.agent1, entry.agent2, entry.result.wins, entry.result.losses
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_every_match() {
        let mut results = TournamentResults::new(
            "smoke",
            vec!["alphabeta".into(), "random".into()],
            TournamentConfig::default(),
        );
        results.add_match("alphabeta", "random", MatchResult { wins: 9, losses: 1 });

        let report = results.generate_report();
        assert!(report.contains("=== Tournament: smoke ==="));
        assert!(report.contains("alphabeta"));
        assert!(report.contains("9"));
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut results = TournamentResults::new(
            "roundtrip",
            vec!["a".into(), "b".into()],
            TournamentConfig::default(),
        );
        results.add_match("a", "b", MatchResult { wins: 2, losses: 3 });

        let json = serde_json::to_string(&results).unwrap();
        let back: TournamentResults = serde_json::from_str(&json).unwrap();
        assert_eq!(back.matches.len(), 1);
        assert_eq!(back.matches[0].result.losses, 3);
    }
}
