//! Engine abstraction used by the game session.
//!
//! Lets the session drive different move-selection strategies behind a
//! single interface.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

pub trait Engine {
    fn name(&self) -> &str;

    /// Picks a move for the side to move. `None` means there is no legal move.
    /// Implementations may probe the position but must leave it as they found it.
    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<Option<ChessMove>>;
}
