//! Pluggable board evaluation interfaces and the material baseline.
//!
//! Search stays independent of the heuristic by delegating static scoring to
//! `BoardScorer`.

use crate::game_state::chess_types::Side;
use crate::game_state::game_state::GameState;

pub trait BoardScorer {
    /// Score from `perspective`'s point of view: positive is good for it.
    fn score(&self, game_state: &GameState, perspective: Side) -> i32;
}

/// Sum of signed piece points over active pieces (Pawn 1 ... King 50).
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    #[inline]
    fn score(&self, game_state: &GameState, perspective: Side) -> i32 {
        game_state.pieces().material_balance() * perspective.sign()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Square};

    #[test]
    fn start_position_is_level() {
        let state = GameState::new_game();
        assert_eq!(MaterialScorer.score(&state, Side::White), 0);
        assert_eq!(MaterialScorer.score(&state, Side::Black), 0);
    }

    #[test]
    fn extra_rook_is_plus_five_for_its_owner() {
        let state = GameState::from_pieces(
            Side::White,
            &[
                (Side::White, PieceKind::King, Square::new(4, 0).unwrap()),
                (Side::White, PieceKind::Rook, Square::new(0, 0).unwrap()),
                (Side::Black, PieceKind::King, Square::new(4, 7).unwrap()),
            ],
        )
        .unwrap();
        assert_eq!(MaterialScorer.score(&state, Side::White), 5);
        assert_eq!(MaterialScorer.score(&state, Side::Black), -5);
    }
}
