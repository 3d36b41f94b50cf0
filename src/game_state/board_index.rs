//! Square -> slot lookup kept in lockstep with the piece register.
//!
//! The index is a cache: `GameState` rebuilds it from the register at setup
//! and updates both together on every make/unmake.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Slot, Square};
use crate::game_state::piece_register::PieceRegister;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardIndex {
    cells: [[Option<Slot>; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of every active piece in `register`.
    pub fn from_register(register: &PieceRegister) -> Self {
        let mut index = Self::new();
        for (slot, record) in register.iter() {
            if record.active {
                index.place(record.square, slot);
            }
        }
        index
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<Slot> {
        self.cells[square.row() as usize][square.column() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    #[inline]
    pub fn place(&mut self, square: Square, slot: Slot) {
        self.cells[square.row() as usize][square.column() as usize] = Some(slot);
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.cells[square.row() as usize][square.column() as usize] = None;
    }

    /// Occupied squares with their slot, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Slot)> + '_ {
        Square::all().filter_map(|square| self.occupant(square).map(|slot| (square, slot)))
    }
}
