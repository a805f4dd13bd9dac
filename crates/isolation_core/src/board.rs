use std::fmt;

use thiserror::Error;

use crate::movegen::legal_moves_into;
use crate::types::{Move, Player};

/// Returned by [`Board::apply_move`] when the move is not in the active
/// player's legal-move list. The tournament harness treats this as a forfeit;
/// inside search it never occurs because engines only forecast legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{player} cannot move to {mv}")]
pub struct IllegalMove {
    pub player: Player,
    pub mv: Move,
}

/// State of one Isolation game.
///
/// Each player occupies at most one cell; every cell a player has ever
/// occupied stays blocked for the rest of the game. Players move like chess
/// knights. A player with no legal move on their turn has lost.
///
/// `forecast_move` is the only successor primitive search uses: it clones,
/// applies, and returns an independent child state, so sibling nodes never
/// observe each other's tentative moves.
#[derive(Clone, Debug)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub blocked: Vec<bool>,
    pub locations: [Option<Move>; 2],
    pub active: Player,
    pub move_count: u32,
}

impl Board {
    /// Creates an empty board. Player 1 moves first.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Board {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    pub fn total_cells(&self) -> i32 {
        self.width * self.height
    }

    /// Number of cells no player has occupied yet.
    pub fn open_cells(&self) -> u32 {
        self.blocked.iter().filter(|&&b| !b).count() as u32
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    /// Current cell of the given player, `None` until their first placement.
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.idx()]
    }

    /// True when the cell is on the board and not blocked.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.height && col >= 0 && col < self.width && !self.blocked[self.idx(row, col)]
    }

    /// Legal destinations for the given player in canonical order.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut out = Vec::with_capacity(8);
        legal_moves_into(self, player, &mut out);
        out
    }

    /// Pure successor: returns a new state with the move applied to the
    /// active player. The receiver is untouched.
    pub fn forecast_move(&self, mv: Move) -> Board {
        let mut child = self.clone();
        child.place(mv);
        child
    }

    /// In-place variant for the game loop; rejects anything not in the
    /// active player's legal-move list.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if !self.legal_moves(self.active).contains(&mv) {
            return Err(IllegalMove {
                player: self.active,
                mv,
            });
        }
        self.place(mv);
        Ok(())
    }

    fn place(&mut self, mv: Move) {
        debug_assert!(self.is_open(mv.row, mv.col), "placing on a blocked cell");
        let i = self.idx(mv.row, mv.col);
        self.blocked[i] = true;
        self.locations[self.active.idx()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    /// True when it is `player`'s turn and they have nowhere to go.
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves(player).is_empty()
    }

    /// True when the opponent is to move and has nowhere to go.
    pub fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && self.legal_moves(self.active).is_empty()
    }

    fn idx(&self, row: i32, col: i32) -> usize {
        (row * self.width + col) as usize
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let here = Move::new(row, col);
                let cell = if self.locations[0] == Some(here) {
                    " 1 "
                } else if self.locations[1] == Some(here) {
                    " 2 "
                } else if self.blocked[self.idx(row, col)] {
                    " - "
                } else {
                    " . "
                };
                f.write_str(cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
