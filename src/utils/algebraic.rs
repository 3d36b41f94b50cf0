//! Conversions between coordinate text (`e4`, `e2e4`) and board squares.
//!
//! Used by the command-line front end; the engine itself works on `Square`.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Parses a square such as `"e4"`.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    Square::new(file - b'a', rank - b'1')
}

/// Parses an origin/destination pair such as `"e2e4"`.
pub fn long_algebraic_to_squares(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    Ok((algebraic_to_square(&text[..2])?, algebraic_to_square(&text[2..])?))
}
