use std::cell::Cell;

use super::*;
use crate::heuristic::Balanced;
use crate::minimax::{self, MinimaxAgent};

/// Player 1 at (4, 2) can win immediately by taking player 2's only exit.
fn win_in_one() -> Board {
    let mut board = Board::new(5, 5);
    board.locations = [Some(Move::new(4, 2)), Some(Move::new(0, 0))];
    for i in [22usize, 0, 7] {
        board.blocked[i] = true;
    }
    board.active = Player::One;
    board.move_count = 5;
    board
}

/// 7x7 position four plies in, player 1 to move with 7 exits.
fn midgame_board() -> Board {
    let mut board = Board::new(7, 7);
    board.apply_move(Move::new(2, 2)).unwrap();
    board.apply_move(Move::new(4, 4)).unwrap();
    board.apply_move(Move::new(3, 4)).unwrap();
    board.apply_move(Move::new(2, 3)).unwrap();
    board
}

#[test]
fn test_finds_the_winning_move() {
    let mut agent = AlphaBetaAgent::new(Balanced);
    let plenty = || 1_000_000.0;
    assert_eq!(agent.select_move(&win_in_one(), &plenty), Move::new(2, 1));
    assert!(agent.depth_reached() >= 1);
}

#[test]
fn test_root_scores_match_plain_minimax() {
    // Pruning may change the chosen move under ties, never the root value.
    let board = midgame_board();
    let plenty = || 1_000_000.0;
    let clock = Clock::new(&plenty, 10.0);

    for depth in 1..=3 {
        let mut mm_nodes = 0;
        let mm = minimax::max_value(
            &board,
            depth,
            &Balanced,
            Player::One,
            &clock,
            &mut mm_nodes,
        )
        .unwrap();

        let mut ab_nodes = 0;
        let ab = max_value(
            &board,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            &Balanced,
            Player::One,
            &clock,
            &mut ab_nodes,
        )
        .unwrap();

        assert_eq!(mm, ab, "depth {depth}");
        assert!(ab_nodes <= mm_nodes, "depth {depth}");
    }
}

#[test]
fn test_pruning_expands_fewer_nodes() {
    let board = midgame_board();
    let plenty = || 1_000_000.0;

    let mut mm = MinimaxAgent::with_config(
        Balanced,
        SearchConfig {
            depth: 4,
            ..SearchConfig::default()
        },
    );
    mm.select_move(&board, &plenty);

    let clock = Clock::new(&plenty, 10.0);
    let mut ab_nodes = 0;
    search(
        &board,
        4,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &Balanced,
        Player::One,
        &clock,
        &mut ab_nodes,
    )
    .unwrap();

    assert!(ab_nodes < mm.nodes());
}

#[test]
fn test_expired_clock_from_the_start_returns_sentinel() {
    let mut agent = AlphaBetaAgent::new(Balanced);
    let expired = || 0.0;
    assert_eq!(agent.select_move(&midgame_board(), &expired), Move::NONE);
    assert_eq!(agent.depth_reached(), 0);
}

#[test]
fn test_timeout_keeps_the_last_completed_depth() {
    let board = midgame_board();

    // Depth 1 costs exactly 8 clock polls here (root + 7 children); the 9th
    // poll is the depth-2 root check, which must fail.
    let polls = Cell::new(0u32);
    let budget = move || {
        polls.set(polls.get() + 1);
        if polls.get() <= 8 {
            1_000.0
        } else {
            0.0
        }
    };

    let mut agent = AlphaBetaAgent::new(Balanced);
    let picked = agent.select_move(&board, &budget);
    assert_eq!(agent.depth_reached(), 1);

    // The answer is exactly what a direct depth-1 search produces.
    let plenty = || 1_000_000.0;
    let clock = Clock::new(&plenty, 10.0);
    let mut nodes = 0;
    let direct = search(
        &board,
        1,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &Balanced,
        Player::One,
        &clock,
        &mut nodes,
    )
    .unwrap();
    assert_eq!(picked, direct);
    assert!(!picked.is_none());
}

#[test]
fn test_deepening_runs_out_the_whole_tree_on_a_small_board() {
    // 3x3 with both pawns placed: seven open cells bound the game tree, so
    // with no clock pressure the agent visits every depth up to that ceiling.
    let mut board = Board::new(3, 3);
    board.apply_move(Move::new(0, 0)).unwrap();
    board.apply_move(Move::new(2, 2)).unwrap();

    let mut agent = AlphaBetaAgent::new(Balanced);
    let plenty = || 1_000_000.0;
    let mv = agent.select_move(&board, &plenty);

    assert!(board.legal_moves(board.active_player()).contains(&mv));
    assert_eq!(agent.depth_reached() as u32, board.open_cells());
}

#[test]
fn test_opening_book_bypasses_search() {
    let mut agent = AlphaBetaAgent::new(Balanced);
    let plenty = || 1_000_000.0;
    assert_eq!(agent.select_move(&Board::new(7, 7), &plenty), Move::new(2, 2));
    assert_eq!(agent.nodes(), 0);
    assert_eq!(agent.depth_reached(), 0);
}
