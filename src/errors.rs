//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by setup, move execution,
//! selection handling and search. Input-style variants (`InvalidSelection`,
//! `IllegalDestination`, `InvalidAlgebraic`, ...) are meant to be shown to the
//! user and recovered from. `BoardIndexMismatch` and `StaleMove` indicate a
//! caller handing the engine data that no longer matches the board.

use thiserror::Error;

use crate::game_state::chess_types::{Side, Slot, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Coordinates outside `0..=7` on either axis.
    #[error("square ({column}, {row}) is off the board")]
    OutOfBounds { column: u8, row: u8 },

    /// Slot index that was never assigned in the piece register.
    #[error("piece slot {0} does not exist")]
    InvalidSlot(Slot),

    /// Slot exists but the piece was captured.
    #[error("piece slot {0} is not on the board")]
    InactivePiece(Slot),

    #[error("piece register is full ({0} slots)")]
    PieceRegisterFull(usize),

    /// Two pieces were placed on the same square during setup.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("{side:?} must have exactly one king, found {count}")]
    KingCount { side: Side, count: usize },

    /// Pushing onto a history stack that reached its configured capacity.
    #[error("move history is full ({capacity} entries)")]
    HistoryFull { capacity: usize },

    /// Empty square, opponent piece, or game already finished.
    #[error("no legal action for square {0}")]
    InvalidSelection(Square),

    #[error("{from} -> {to} is not a legal move for the selected piece")]
    IllegalDestination { from: Square, to: Square },

    #[error("the game is over")]
    GameOver,

    /// Move record no longer describes the board (wrong occupant or capture).
    #[error("stale move: {0}")]
    StaleMove(String),

    #[error("search depth must be at least 1")]
    InvalidSearchDepth,

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// The board index and the piece register disagree.
    #[error("board index and piece register disagree: {0}")]
    BoardIndexMismatch(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
