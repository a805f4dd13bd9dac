use super::*;
use crate::heuristic::Balanced;

/// Player 1 (to move) has no legal move at all.
fn stuck_board() -> Board {
    let mut board = Board::new(3, 3);
    board.locations = [Some(Move::new(0, 0)), Some(Move::new(2, 2))];
    for i in [0usize, 8, 5, 7] {
        board.blocked[i] = true;
    }
    board.active = Player::One;
    board.move_count = 4;
    board
}

/// Player 1 at (4, 2) can win immediately: player 2's only exit from the
/// corner is (2, 1), and (2, 1) is a knight's move from (4, 2).
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

/// Player 2 is already stuck, so every one of player 1's three moves wins.
fn every_move_wins() -> Board {
    let mut board = Board::new(5, 5);
    board.locations = [Some(Move::new(4, 2)), Some(Move::new(0, 0))];
    for i in [22usize, 0, 7, 11] {
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
fn test_sentinel_without_invoking_search() {
    let mut agent = MinimaxAgent::new(Balanced);
    let plenty = || 1_000_000.0;
    assert_eq!(agent.select_move(&stuck_board(), &plenty), Move::NONE);
    assert_eq!(agent.nodes(), 0);
}

#[test]
fn test_opening_book_without_invoking_search() {
    let mut agent = MinimaxAgent::new(Balanced);
    let plenty = || 1_000_000.0;
    assert_eq!(agent.select_move(&Board::new(7, 7), &plenty), Move::new(2, 2));
    assert_eq!(agent.nodes(), 0);
}

#[test]
fn test_forced_reply_ignores_the_clock() {
    let mut board = Board::new(5, 5);
    board.locations = [Some(Move::new(0, 0)), Some(Move::new(4, 4))];
    for i in [0usize, 7, 24] {
        board.blocked[i] = true;
    }
    board.active = Player::One;
    board.move_count = 4;

    let mut agent = MinimaxAgent::new(Balanced);
    // Even an already-expired clock returns the only move.
    let expired = || 0.0;
    assert_eq!(agent.select_move(&board, &expired), Move::new(2, 1));
    assert_eq!(agent.nodes(), 0);
}

#[test]
fn test_finds_the_winning_move() {
    let mut agent = MinimaxAgent::new(Balanced);
    let plenty = || 1_000_000.0;
    assert_eq!(agent.select_move(&win_in_one(), &plenty), Move::new(2, 1));
}

#[test]
fn test_tie_break_keeps_the_last_equal_move() {
    // All three moves score +inf; the canonical order is (2,3), (3,0), (3,4)
    // and the `>=` comparison keeps the last one.
    let mut agent = MinimaxAgent::new(Balanced);
    let plenty = || 1_000_000.0;
    assert_eq!(agent.select_move(&every_move_wins(), &plenty), Move::new(3, 4));
}

#[test]
fn test_timeout_degrades_to_the_sentinel() {
    let mut agent = MinimaxAgent::new(Balanced);
    let expired = || 0.0;
    assert_eq!(agent.select_move(&win_in_one(), &expired), Move::NONE);
}

#[test]
fn test_deeper_search_returns_a_legal_move() {
    let board = midgame_board();
    let mut agent = MinimaxAgent::with_config(
        Balanced,
        SearchConfig {
            depth: 3,
            ..SearchConfig::default()
        },
    );
    let plenty = || 1_000_000.0;
    let mv = agent.select_move(&board, &plenty);
    assert!(board.legal_moves(board.active_player()).contains(&mv));
    assert!(agent.nodes() > 0);
}
