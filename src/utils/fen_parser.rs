//! FEN-to-GameState parser.
//!
//! Reads the piece placement and side-to-move fields. Castling, en-passant
//! and clock fields may be present and are ignored, since those rules are not
//! played. Slots are assigned White first, then Black, each from a1 upwards.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::{PieceRecord, PieceRegister};

pub fn parse_fen(fen: &str, history_capacity: usize) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();
    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen("missing board layout".to_owned()))?;
    let side_to_move = match parts.next() {
        None | Some("w") => Side::White,
        Some("b") => Side::Black,
        Some(other) => {
            return Err(ChessErrors::InvalidFen(format!(
                "invalid side-to-move field '{other}'"
            )))
        }
    };

    let mut placed = parse_board(board_part)?;
    placed.sort_by_key(|(side, _, square)| (side.index(), square.row(), square.column()));

    let mut register = PieceRegister::new();
    for (side, kind, square) in placed {
        register.add(PieceRecord::new(kind, side, square))?;
    }
    GameState::from_register(register, side_to_move, history_capacity)
}

fn parse_board(board_part: &str) -> ChessResult<Vec<(Side, PieceKind, Square)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut placed = Vec::with_capacity(32);
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx;
        let mut column = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                column += empty_count as usize;
                if column > BOARD_SIZE {
                    return Err(too_many_files(row));
                }
                continue;
            }

            let (side, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            if column >= BOARD_SIZE {
                return Err(too_many_files(row));
            }
            placed.push((side, kind, Square::on_board(column as u8, row as u8)));
            column += 1;
        }

        if column != BOARD_SIZE {
            return Err(ChessErrors::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                row + 1
            )));
        }
    }
    Ok(placed)
}

fn too_many_files(row: usize) -> ChessErrors {
    ChessErrors::InvalidFen(format!("rank {} has too many files", row + 1))
}

fn piece_from_fen_char(ch: char) -> Option<(Side, PieceKind)> {
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else {
        Side::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((side, kind))
}
