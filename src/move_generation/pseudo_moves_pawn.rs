use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::PieceRecord;
use crate::move_generation::move_generator::GenerationMode;
use crate::move_generation::pseudo_move_shared::is_enemy;

const CAPTURE_COLUMNS: [i8; 2] = [-1, 1];

/// Forward steps and diagonal captures. No en-passant and no promotion.
///
/// In pressure mode only the two diagonals are reported, occupied or not,
/// since a pawn push never attacks.
pub fn generate_pawn_targets(
    game_state: &GameState,
    pawn: &PieceRecord,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    let forward = pawn.side.forward();

    if mode == GenerationMode::Pressure {
        out.extend(
            CAPTURE_COLUMNS
                .iter()
                .filter_map(|d_column| pawn.square.offset(*d_column, forward)),
        );
        return;
    }

    if let Some(one_step) = pawn.square.offset(0, forward) {
        if game_state.board().is_empty(one_step) {
            out.push(one_step);

            let on_start_row = pawn.square.row() == pawn_start_row(pawn.side);
            if !pawn.has_moved && on_start_row {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if game_state.board().is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_column in CAPTURE_COLUMNS {
        if let Some(target) = pawn.square.offset(d_column, forward) {
            if is_enemy(game_state, pawn.side, target) {
                out.push(target);
            }
        }
    }
}
