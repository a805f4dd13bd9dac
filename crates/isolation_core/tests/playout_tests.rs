use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use isolation_core::{perft, Board, Player};

/// Every random game must terminate within `total_cells` plies with a loser
/// who is to move and has zero legal moves.
#[test]
fn random_playouts_end_with_a_stuck_loser() {
    (0u64..64).into_par_iter().for_each(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(7, 7);
        let mut plies = 0;

        loop {
            let moves = board.legal_moves(board.active_player());
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board
                .apply_move(mv)
                .expect("a move drawn from the legal list must apply");
            plies += 1;
            assert!(plies <= board.total_cells(), "game outlived the board");
        }

        let loser = board.active_player();
        assert!(board.is_loser(loser));
        assert!(board.is_winner(loser.opponent()));
    });
}

#[test]
fn perft_counts_placement_plies() {
    let board = Board::new(3, 3);
    assert_eq!(perft(&board, 0), 1);
    assert_eq!(perft(&board, 1), 9);
    assert_eq!(perft(&board, 2), 9 * 8);
}

#[test]
fn perft_dead_board_has_no_continuations() {
    // No knight move fits on a 2x2 board, so every game ends after the two
    // placement plies.
    let board = Board::new(2, 2);
    assert_eq!(perft(&board, 2), 4 * 3);
    assert_eq!(perft(&board, 3), 0);
}

#[test]
fn perft_matches_across_first_player_choices() {
    // Summing perft over each first placement must equal perft from the root.
    let board = Board::new(4, 4);
    let total: u64 = board
        .legal_moves(Player::One)
        .into_iter()
        .map(|mv| perft(&board.forecast_move(mv), 2))
        .sum();
    assert_eq!(total, perft(&board, 3));
}
