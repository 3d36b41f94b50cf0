use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::PieceRecord;
use crate::move_generation::move_generator::GenerationMode;
use crate::move_generation::pseudo_move_shared::push_step_target;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_targets(
    game_state: &GameState,
    knight: &PieceRecord,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    for (d_column, d_row) in KNIGHT_OFFSETS {
        push_step_target(
            game_state,
            knight.side,
            knight.square.offset(d_column, d_row),
            mode,
            out,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Side};

    #[test]
    fn centralized_knight_has_eight_targets() {
        let d4 = Square::new(3, 3).unwrap();
        let state = GameState::from_pieces(
            Side::White,
            &[
                (Side::White, PieceKind::King, Square::new(0, 0).unwrap()),
                (Side::Black, PieceKind::King, Square::new(7, 7).unwrap()),
                (Side::White, PieceKind::Knight, d4),
            ],
        )
        .unwrap();
        let (_, knight) = state.piece_at(d4).unwrap();
        let mut out = Vec::new();
        generate_knight_targets(&state, knight, GenerationMode::Moves, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn friendly_squares_only_count_in_pressure_mode() {
        let state = GameState::new_game();
        let b1 = Square::new(1, 0).unwrap();
        let (_, knight) = state.piece_at(b1).unwrap();

        let mut moves = Vec::new();
        generate_knight_targets(&state, knight, GenerationMode::Moves, &mut moves);
        assert_eq!(moves, vec![Square::new(2, 2).unwrap(), Square::new(0, 2).unwrap()]);

        let mut pressure = Vec::new();
        generate_knight_targets(&state, knight, GenerationMode::Pressure, &mut pressure);
        assert_eq!(pressure.len(), 3);
        assert!(pressure.contains(&Square::new(3, 1).unwrap()));
    }
}
