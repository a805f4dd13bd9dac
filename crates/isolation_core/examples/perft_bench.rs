//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p isolation_core -- [depth] [width] [height]
//!
//! Examples:
//!   # Default: depth 4 on an empty 7x7 board
//!   cargo flamegraph --example perft_bench -p isolation_core
//!
//!   # Custom depth and board size
//!   cargo flamegraph --example perft_bench -p isolation_core -- 5 5 5

use std::env;
use std::time::Instant;

use isolation_core::{perft, Board};

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let width: i32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(7);
    let height: i32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(7);

    let board = Board::new(width, height);

    println!("Board: {width}x{height}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&board, depth - 2);
    }

    let start = Instant::now();
    let nodes = perft(&board, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}
