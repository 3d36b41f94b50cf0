//! Terminal-oriented Unicode board renderer.

use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::game_state::GameState;

/// Renders the board with White at the bottom, rank 8 first.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");
    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for column in 0..8u8 {
            let square = Square::on_board(column, row);
            match game_state.piece_at(square) {
                Some((_, record)) => out.push(piece_to_unicode(record.side, record.kind)),
                None => out.push('·'),
            }
            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(side: Side, kind: PieceKind) -> char {
    match (side, kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}
