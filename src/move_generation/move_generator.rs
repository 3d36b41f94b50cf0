//! Pseudo-legal move generation entry points.
//!
//! Dispatches on piece kind to the per-piece generators. Results ignore
//! whether the mover's own King is left attacked (except for King moves,
//! which are pruned against the opponent's pressure at generation time).

use crate::errors::ChessResult;
use crate::game_state::chess_types::{PieceKind, Slot, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::PieceRecord;
use crate::move_generation::pseudo_moves_king::generate_king_targets;
use crate::move_generation::pseudo_moves_knight::generate_knight_targets;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_targets;
use crate::move_generation::pseudo_moves_sliders::generate_slider_targets;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Playable destinations.
    Moves,
    /// Every square the piece bears on, including squares held by its own
    /// side. Feeds the attack map.
    Pressure,
}

/// Destination squares of the piece in `slot`. Captured pieces yield nothing.
pub fn pseudo_legal_targets(
    game_state: &GameState,
    slot: Slot,
    mode: GenerationMode,
) -> ChessResult<Vec<Square>> {
    let record = game_state.pieces().get(slot)?;
    let mut out = Vec::with_capacity(16);
    if record.active {
        generate_targets_for(game_state, record, mode, &mut out);
    }
    Ok(out)
}

pub(crate) fn generate_targets_for(
    game_state: &GameState,
    record: &PieceRecord,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    match record.kind {
        PieceKind::Pawn => generate_pawn_targets(game_state, record, mode, out),
        PieceKind::Knight => generate_knight_targets(game_state, record, mode, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_targets(game_state, record, mode, out)
        }
        PieceKind::King => generate_king_targets(game_state, record, mode, out),
    }
}

/// Pseudo-legal moves of the piece in `slot`, in generation order.
pub fn pseudo_legal_moves(game_state: &GameState, slot: Slot) -> ChessResult<Vec<ChessMove>> {
    let record = *game_state.pieces().get(slot)?;
    let targets = pseudo_legal_targets(game_state, slot, GenerationMode::Moves)?;
    Ok(targets
        .into_iter()
        .map(|to| ChessMove::new(slot, record, to, game_state.board().occupant(to)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Side;

    #[test]
    fn start_position_has_twenty_pseudo_moves_per_side() {
        let state = GameState::new_game();
        for side in [Side::White, Side::Black] {
            let total: usize = state
                .pieces()
                .active_slots(side)
                .map(|slot| pseudo_legal_moves(&state, slot).unwrap().len())
                .sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn captured_piece_generates_nothing() {
        let mut register = crate::game_state::piece_register::PieceRegister::standard();
        register.set_active(9, false).unwrap();
        let state = GameState::from_register(register, Side::White, 16).unwrap();
        assert!(pseudo_legal_moves(&state, 9).unwrap().is_empty());
    }

    #[test]
    fn capture_moves_record_the_victim_slot() {
        let e4 = Square::new(4, 3).unwrap();
        let d5 = Square::new(3, 4).unwrap();
        let state = GameState::from_pieces(
            Side::White,
            &[
                (Side::White, PieceKind::King, Square::new(0, 0).unwrap()),
                (Side::Black, PieceKind::King, Square::new(7, 7).unwrap()),
                (Side::White, PieceKind::Pawn, e4),
                (Side::Black, PieceKind::Pawn, d5),
            ],
        )
        .unwrap();
        let moves = pseudo_legal_moves(&state, 2).unwrap();
        let capture = moves.iter().find(|mv| mv.to == d5).unwrap();
        assert_eq!(capture.captured, Some(3));
        assert_eq!(capture.from, e4);
    }
}
