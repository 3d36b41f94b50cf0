//! Canonical chess-rule constants.
//!
//! Board geometry, register and history capacities, material point values,
//! and the standard starting layout used to seed a new game.

use crate::game_state::chess_types::{PieceKind, Side};

pub const BOARD_SIZE: usize = 8;

/// Number of piece slots in the register (16 per side).
pub const PIECE_SLOTS: usize = 32;

/// History capacity; well above the longest plausible game plus search depth.
pub const HISTORY_CAPACITY: usize = 4096;

pub const DEFAULT_SEARCH_DEPTH: u8 = 5;

/// Back rank layout from column a to column h.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Unsigned material value of a piece kind.
#[inline]
pub const fn piece_points(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 50,
    }
}

#[inline]
pub const fn back_rank_row(side: Side) -> u8 {
    match side {
        Side::White => 0,
        Side::Black => 7,
    }
}

/// Row the side's pawns start on; double steps are only allowed from here.
#[inline]
pub const fn pawn_start_row(side: Side) -> u8 {
    match side {
        Side::White => 1,
        Side::Black => 6,
    }
}
