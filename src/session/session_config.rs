use crate::game_state::chess_rules::{DEFAULT_SEARCH_DEPTH, HISTORY_CAPACITY};
use crate::game_state::chess_types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Plies searched by `request_engine_move` callers that use the default.
    pub search_depth: u8,
    /// Side played by the engine; `None` for two human players.
    pub engine_side: Option<Side>,
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            engine_side: Some(Side::Black),
            history_capacity: HISTORY_CAPACITY,
        }
    }
}
