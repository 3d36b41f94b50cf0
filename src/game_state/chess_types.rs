//! Primitive chess value types shared by every subsystem.
//!
//! Squares are addressed by `(column, row)` with `column 0 == a` and
//! `row 0 == rank 1`. Piece identity is a `Slot`, an index into the piece
//! register that never changes for the lifetime of a game.

use std::fmt;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;

/// Index of a piece record inside the piece register.
pub type Slot = usize;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// `+1` for White, `-1` for Black. Used to orient material scores.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

/// Piece kind. Side is stored separately on the piece record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A board coordinate, always inside the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    column: u8,
    row: u8,
}

impl Square {
    pub fn new(column: u8, row: u8) -> ChessResult<Self> {
        if usize::from(column) >= BOARD_SIZE || usize::from(row) >= BOARD_SIZE {
            return Err(ChessErrors::OutOfBounds { column, row });
        }
        Ok(Self { column, row })
    }

    #[inline]
    pub fn try_new(column: i8, row: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&column) && (0..size).contains(&row) {
            Some(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Builds a square from coordinates the caller already knows are on the
    /// board (rule constants, loop bounds). Coordinates wrap modulo 8.
    #[inline]
    pub(crate) const fn on_board(column: u8, row: u8) -> Self {
        Self {
            column: column & 7,
            row: row & 7,
        }
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Square displaced by `(d_column, d_row)`, or `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_column: i8, d_row: i8) -> Option<Self> {
        Self::try_new(self.column as i8 + d_column, self.row as i8 + d_row)
    }

    /// All 64 squares, row by row starting at a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |column| Square { column, row }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.column),
            char::from(b'1' + self.row)
        )
    }
}
