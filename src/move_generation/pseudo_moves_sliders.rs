//! Bishop, Rook and Queen ray generation.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::PieceRecord;
use crate::move_generation::move_generator::GenerationMode;
use crate::move_generation::pseudo_move_shared::push_ray_targets;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[inline]
pub fn directions_for(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
        (1, 1),
        (1, -1),
        (-1, -1),
        (-1, 1),
        (0, 1),
        (1, 0),
        (0, -1),
        (-1, 0),
    ];
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

pub fn generate_slider_targets(
    game_state: &GameState,
    slider: &PieceRecord,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    for direction in directions_for(slider.kind) {
        push_ray_targets(game_state, slider.side, slider.square, *direction, mode, out);
    }
}
