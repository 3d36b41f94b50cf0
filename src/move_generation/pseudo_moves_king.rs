use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::PieceRecord;
use crate::move_generation::legal_move_checks::compute_attack_map;
use crate::move_generation::move_generator::GenerationMode;
use crate::move_generation::pseudo_move_shared::push_step_target;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Adjacent squares. Outside pressure mode, squares under any pressure from
/// the opponent are pruned here, so King moves need no later legality probe.
/// No castling.
pub fn generate_king_targets(
    game_state: &GameState,
    king: &PieceRecord,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    let mut adjacent = Vec::with_capacity(KING_OFFSETS.len());
    for (d_column, d_row) in KING_OFFSETS {
        push_step_target(
            game_state,
            king.side,
            king.square.offset(d_column, d_row),
            mode,
            &mut adjacent,
        );
    }

    if mode == GenerationMode::Moves {
        let opponent_pressure = compute_attack_map(game_state, king.side.opposite());
        adjacent.retain(|target| !opponent_pressure.is_attacked(*target));
    }
    out.extend(adjacent);
}
