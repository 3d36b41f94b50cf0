//! Per-square attack counts for one side.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Side, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackMap {
    attacker: Side,
    counts: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl AttackMap {
    pub fn new(attacker: Side) -> Self {
        Self {
            attacker,
            counts: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Side whose moves were counted.
    #[inline]
    pub fn attacker(&self) -> Side {
        self.attacker
    }

    #[inline]
    pub fn pressure(&self, square: Square) -> u8 {
        self.counts[square.row() as usize][square.column() as usize]
    }

    #[inline]
    pub fn is_attacked(&self, square: Square) -> bool {
        self.pressure(square) > 0
    }

    #[inline]
    pub fn add_pressure(&mut self, square: Square) {
        let cell = &mut self.counts[square.row() as usize][square.column() as usize];
        *cell = cell.saturating_add(1);
    }
}
