//! Random-move engine.
//!
//! Picks uniformly among legal moves. Used for diagnostics, randomized
//! testing, and as a weak opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::chess_move::ChessMove;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<Option<ChessMove>> {
        let side = game_state.side_to_move();
        let legal_moves = all_legal_moves(game_state, side)?;
        Ok(legal_moves.choose(&mut self.rng).copied())
    }
}
