//! Move value type pushed onto the history stack.

use std::fmt;

use crate::game_state::chess_types::{Slot, Square};
use crate::game_state::piece_register::PieceRecord;

/// A single piece move. Carries a snapshot of the mover so unmaking restores
/// `has_moved` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub piece: Slot,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Slot>,
    pub moved_before: PieceRecord,
}

impl ChessMove {
    pub fn new(piece: Slot, moved_before: PieceRecord, to: Square, captured: Option<Slot>) -> Self {
        Self {
            piece,
            from: moved_before.square,
            to,
            captured,
            moved_before,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
