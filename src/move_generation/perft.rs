//! Legal move tree counting for move generator validation.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Side;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf counts of the legal move tree `depth` plies deep with `side` moving
/// first. The position is restored before returning.
pub fn perft(game_state: &mut GameState, side: Side, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(game_state, side)? {
        total.merge(perft_move(game_state, side, mv, depth)?);
    }
    Ok(total)
}

/// Per-root-move node counts, useful for locating generator disagreements.
pub fn perft_divide(
    game_state: &mut GameState,
    side: Side,
    depth: u8,
) -> ChessResult<Vec<(ChessMove, u64)>> {
    let mut split = Vec::new();
    if depth == 0 {
        return Ok(split);
    }
    for mv in all_legal_moves(game_state, side)? {
        let counts = perft_move(game_state, side, mv, depth)?;
        split.push((mv, counts.nodes));
    }
    Ok(split)
}

fn perft_move(
    game_state: &mut GameState,
    side: Side,
    mv: ChessMove,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut probe = game_state.speculate(mv)?;
    if depth > 1 {
        return perft(&mut probe, side.opposite(), depth - 1);
    }

    let mut leaf = PerftCounts {
        nodes: 1,
        captures: u64::from(mv.is_capture()),
        ..PerftCounts::default()
    };
    if is_king_in_check(&probe, side.opposite()) {
        leaf.checks = 1;
        if all_legal_moves(&mut probe, side.opposite())?.is_empty() {
            leaf.checkmates = 1;
        }
    }
    Ok(leaf)
}
