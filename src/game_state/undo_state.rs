use crate::game_state::chess_types::Side;
use crate::moves::chess_move::ChessMove;

/// Whether a make/unmake is a real game move or a search/legality probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Flips the side to move and refreshes the attack map.
    Committed,
    /// Leaves turn state and the attack map untouched.
    Speculative,
}

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub mode: MoveMode,
    pub prev_side_to_move: Side,
}
