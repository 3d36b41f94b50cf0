//! Legal move filtering and game-end classification.
//!
//! Non-King candidates are executed speculatively and discarded when the
//! mover's King ends up attacked. The speculative guard unmakes each probe
//! before the next one, whatever the outcome of the check.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{PieceKind, Side, Slot};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOver {
    Checkmate { winner: Side },
    /// No legal move and not in check; scored as a draw.
    Stalemate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionStatus {
    pub in_check: bool,
    pub legal_move_count: usize,
    pub game_over: Option<GameOver>,
}

/// Legal moves of the piece in `slot`, whichever side it belongs to.
pub fn legal_moves(game_state: &mut GameState, slot: Slot) -> ChessResult<Vec<ChessMove>> {
    let record = *game_state.pieces().get(slot)?;
    if !record.active {
        return Ok(Vec::new());
    }

    let candidates = pseudo_legal_moves(game_state, slot)?;
    if record.kind == PieceKind::King {
        return Ok(candidates);
    }

    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        let probe = game_state.speculate(mv)?;
        if !is_king_in_check(&probe, record.side) {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// Legal moves of every active piece of `side`, in register order and then
/// generation order.
pub fn all_legal_moves(game_state: &mut GameState, side: Side) -> ChessResult<Vec<ChessMove>> {
    let slots: Vec<Slot> = game_state.pieces().active_slots(side).collect();
    let mut moves = Vec::with_capacity(48);
    for slot in slots {
        moves.extend(legal_moves(game_state, slot)?);
    }
    Ok(moves)
}

/// Check and game-end status for `side` as the side to move. A committed
/// position answers the check test from its cached attack map.
pub fn position_status(game_state: &mut GameState, side: Side) -> ChessResult<PositionStatus> {
    let cached = if side == game_state.side_to_move() {
        game_state.cached_check()
    } else {
        None
    };
    let in_check = cached.unwrap_or_else(|| is_king_in_check(game_state, side));
    let legal_move_count = all_legal_moves(game_state, side)?.len();
    let game_over = match (legal_move_count, in_check) {
        (0, true) => Some(GameOver::Checkmate {
            winner: side.opposite(),
        }),
        (0, false) => Some(GameOver::Stalemate),
        _ => None,
    };
    Ok(PositionStatus {
        in_check,
        legal_move_count,
        game_over,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;
    use pretty_assertions::assert_eq;

    fn sq(column: u8, row: u8) -> Square {
        Square::new(column, row).unwrap()
    }

    #[test]
    fn start_position_has_twenty_legal_moves_and_leaves_state_untouched() {
        let mut state = GameState::new_game();
        let before = state.clone();
        assert_eq!(all_legal_moves(&mut state, Side::White).unwrap().len(), 20);
        assert_eq!(all_legal_moves(&mut state, Side::Black).unwrap().len(), 20);
        assert_eq!(state, before);
    }

    #[test]
    fn e2_pawn_has_single_and_double_step() {
        let mut state = GameState::new_game();
        let slot = state.board().occupant(sq(4, 1)).unwrap();
        let targets: Vec<Square> = legal_moves(&mut state, slot)
            .unwrap()
            .into_iter()
            .map(|mv| mv.to)
            .collect();
        assert_eq!(targets, vec![sq(4, 2), sq(4, 3)]);
    }

    #[test]
    fn pinned_bishop_cannot_leave_the_file() {
        let mut state = GameState::from_pieces(
            Side::White,
            &[
                (Side::White, PieceKind::King, sq(4, 0)),
                (Side::White, PieceKind::Bishop, sq(4, 1)),
                (Side::Black, PieceKind::Rook, sq(4, 7)),
                (Side::Black, PieceKind::King, sq(0, 7)),
            ],
        )
        .unwrap();
        assert!(!crate::move_generation::move_generator::pseudo_legal_moves(&state, 1)
            .unwrap()
            .is_empty());
        assert!(legal_moves(&mut state, 1).unwrap().is_empty());
    }

    #[test]
    fn only_blocking_or_capturing_moves_answer_a_check() {
        // White king e1 is checked by the rook on e8; the a4 rook can only
        // answer by interposing on e4.
        let mut state = GameState::from_pieces(
            Side::White,
            &[
                (Side::White, PieceKind::King, sq(4, 0)),
                (Side::White, PieceKind::Rook, sq(0, 3)),
                (Side::Black, PieceKind::Rook, sq(4, 7)),
                (Side::Black, PieceKind::King, sq(7, 7)),
            ],
        )
        .unwrap();
        let rook_moves = legal_moves(&mut state, 1).unwrap();
        assert_eq!(rook_moves.len(), 1);
        assert_eq!(rook_moves[0].to, sq(4, 3));
    }

    #[test]
    fn back_rank_queen_mate_is_checkmate() {
        let mut state = GameState::from_pieces(
            Side::Black,
            &[
                (Side::White, PieceKind::King, sq(4, 5)),
                (Side::White, PieceKind::Queen, sq(4, 6)),
                (Side::Black, PieceKind::King, sq(4, 7)),
            ],
        )
        .unwrap();
        let status = position_status(&mut state, Side::Black).unwrap();
        assert!(status.in_check);
        assert_eq!(status.legal_move_count, 0);
        assert_eq!(
            status.game_over,
            Some(GameOver::Checkmate {
                winner: Side::White
            })
        );
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        let mut state = GameState::from_pieces(
            Side::Black,
            &[
                (Side::White, PieceKind::King, sq(5, 6)),
                (Side::White, PieceKind::Queen, sq(6, 5)),
                (Side::Black, PieceKind::King, sq(7, 7)),
            ],
        )
        .unwrap();
        let status = position_status(&mut state, Side::Black).unwrap();
        assert!(!status.in_check);
        assert_eq!(status.game_over, Some(GameOver::Stalemate));
    }
}
