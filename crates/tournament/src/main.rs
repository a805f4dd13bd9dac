//! Tournament CLI
//!
//! Run matches between Isolation agents and track Elo ratings.

use std::env;

use adversarial_agent::{by_name, AlphaBetaAgent, Balanced, Heuristic, MinimaxAgent, SearchConfig};
use isolation_core::Agent;
use random_agent::RandomAgent;
use tournament::{
    quick_match, EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};

const ELO_FILE: &str = "isolation_elo.json";

fn print_usage() {
    println!("Isolation Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <agent1> <agent2> [--games N] [--time MS] [--config FILE]");
    println!("  tournament gauntlet <challenger> [--games N] [--time MS]");
    println!("  tournament leaderboard");
    println!();
    println!("Agents:");
    println!("  minimax[:DEPTH[:HEURISTIC]]  - fixed-depth minimax (default depth 3)");
    println!("  alphabeta[:HEURISTIC]        - iterative deepening with alpha-beta pruning");
    println!("  random                       - uniform random baseline");
    println!();
    println!("Heuristics: balanced (default), aggressive, centering");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta minimax:4 --games 20");
    println!("  tournament gauntlet alphabeta:aggressive --games 10");
}

fn heuristic_or_default(name: &str) -> Box<dyn Heuristic> {
    by_name(name).unwrap_or_else(|| {
        eprintln!("Unknown heuristic: {}, using balanced", name);
        Box::new(Balanced)
    })
}

fn create_agent(spec: &str) -> Box<dyn Agent> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "minimax" | "mm" => {
            let depth = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
            let heuristic = heuristic_or_default(parts.get(2).copied().unwrap_or("balanced"));
            Box::new(MinimaxAgent::with_config(
                heuristic,
                SearchConfig {
                    depth,
                    ..SearchConfig::default()
                },
            ))
        }
        "alphabeta" | "ab" => {
            let heuristic = heuristic_or_default(parts.get(1).copied().unwrap_or("balanced"));
            Box::new(AlphaBetaAgent::new(heuristic))
        }
        "random" => Box::new(RandomAgent::new()),
        _ => {
            eprintln!("Unknown agent: {}", spec);
            Box::new(AlphaBetaAgent::new(Balanced))
        }
    }
}

/// Parses `--games`, `--time` and `--config` out of the trailing arguments.
fn parse_config(args: &[String], start: usize) -> MatchConfig {
    let mut config = MatchConfig::default();

    // An explicit config file is the base; flags override it.
    let mut i = start;
    while i < args.len() {
        if matches!(args[i].as_str(), "--config" | "-c") {
            if let Some(path) = args.get(i + 1) {
                match MatchConfig::from_toml_file(path) {
                    Ok(loaded) => config = loaded,
                    Err(e) => eprintln!("Warning: ignoring config file: {}", e),
                }
            }
        }
        i += 1;
    }

    let mut i = start;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if let Some(v) = args.get(i + 1) {
                    config.num_games = v.parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--time" | "-t" => {
                if let Some(v) = args.get(i + 1) {
                    config.move_time_ms = v.parse().unwrap_or(config.move_time_ms);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two agent specifications");
        print_usage();
        return;
    }

    let agent1_spec = &args[0];
    let agent2_spec = &args[1];
    let config = parse_config(args, 2);

    println!("=== Match: {} vs {} ===", agent1_spec, agent2_spec);
    println!(
        "Games: {}, Time/move: {} ms",
        config.num_games, config.move_time_ms
    );
    println!();

    let mut agent1 = create_agent(agent1_spec);
    let mut agent2 = create_agent(agent2_spec);

    let num_games = config.num_games;
    let runner = MatchRunner::new(config);
    let result = runner.run_match(agent1.as_mut(), agent2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses (of {})",
        agent1_spec, result.wins, result.losses, num_games
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    // Update Elo tracker
    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(agent1_spec, agent2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger agent");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let config = parse_config(args, 1);

    let opponents = vec!["random", "minimax:3:balanced", "alphabeta"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!(
        "Games per match: {}, Time/move: {} ms",
        config.num_games, config.move_time_ms
    );
    println!();

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: config.num_games,
            move_time_ms: config.move_time_ms,
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_agent(challenger_spec);
        let mut opp_agent = create_agent(opponent);

        let result = quick_match(
            challenger.as_mut(),
            opp_agent.as_mut(),
            config.num_games,
            config.move_time_ms,
        );

        println!(
            "Result: {}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
