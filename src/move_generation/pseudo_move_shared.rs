//! Target admission rules shared by the per-piece generators.

use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::GenerationMode;

/// Knight/King style single-step admission: empty or enemy-held squares, or
/// any on-board square in pressure mode.
#[inline]
pub fn push_step_target(
    game_state: &GameState,
    side: Side,
    target: Option<Square>,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    let Some(target) = target else {
        return;
    };
    if mode == GenerationMode::Pressure || !is_friendly(game_state, side, target) {
        out.push(target);
    }
}

/// Slides from `from` along `(d_column, d_row)` until the board edge or the
/// first occupied square. An enemy blocker is included, a friendly one is
/// not (pressure mode includes both). In pressure mode the ray continues
/// through the enemy King so the squares behind it stay covered.
pub fn push_ray_targets(
    game_state: &GameState,
    side: Side,
    from: Square,
    (d_column, d_row): (i8, i8),
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    let mut cursor = from.offset(d_column, d_row);
    while let Some(target) = cursor {
        match game_state.piece_at(target) {
            None => out.push(target),
            Some((_, blocker)) => {
                let friendly = blocker.side == side;
                if !friendly || mode == GenerationMode::Pressure {
                    out.push(target);
                }
                let xray_king =
                    mode == GenerationMode::Pressure && !friendly && blocker.kind == PieceKind::King;
                if !xray_king {
                    return;
                }
            }
        }
        cursor = target.offset(d_column, d_row);
    }
}

#[inline]
pub fn is_friendly(game_state: &GameState, side: Side, square: Square) -> bool {
    matches!(game_state.piece_at(square), Some((_, record)) if record.side == side)
}

#[inline]
pub fn is_enemy(game_state: &GameState, side: Side, square: Square) -> bool {
    matches!(game_state.piece_at(square), Some((_, record)) if record.side != side)
}
