//! Fixed-depth alpha-beta engine on material scoring.

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::{best_move, SearchConfig, SearchResult};

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
    scorer: MaterialScorer,
    last_result: Option<SearchResult>,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: MaterialScorer,
            last_result: None,
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchConfig { depth })
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Score and node count of the most recent search.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Plum Minimax"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<Option<ChessMove>> {
        let result = best_move(game_state, &self.scorer, self.config)?;
        self.last_result = Some(result);
        Ok(result.best_move)
    }
}
