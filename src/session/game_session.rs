//! Interactive game surface for a presentation layer.
//!
//! Tracks the selected piece and its legal moves, validates and commits
//! moves, runs the engine on its turn, and reports check and game-end
//! results after every committed move.

use log::{info, warn};

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Side, Slot, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::MoveMode;
use crate::move_generation::legal_move_generator::{legal_moves, position_status, GameOver};
use crate::moves::chess_move::ChessMove;
use crate::session::session_config::SessionConfig;

/// Result of a committed move, as seen by the side that must reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: ChessMove,
    pub captured: Option<Slot>,
    pub next_side_to_move: Side,
    /// The side now to move is in check.
    pub in_check: bool,
    pub game_over: Option<GameOver>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    config: SessionConfig,
    selection: Option<Slot>,
    selection_moves: Vec<ChessMove>,
    game_over: Option<GameOver>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: GameState::with_history_capacity(config.history_capacity),
            config,
            selection: None,
            selection_moves: Vec::new(),
            game_over: None,
        }
    }

    /// Starts from an arbitrary position; an already finished position is
    /// reported through `game_over`.
    pub fn from_state(mut state: GameState, config: SessionConfig) -> ChessResult<Self> {
        let side = state.side_to_move();
        let status = position_status(&mut state, side)?;
        Ok(Self {
            state,
            config,
            selection: None,
            selection_moves: Vec::new(),
            game_over: status.game_over,
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move()
    }

    #[inline]
    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    #[inline]
    pub fn selection(&self) -> Option<Slot> {
        self.selection
    }

    pub fn is_engine_turn(&self) -> bool {
        self.game_over.is_none() && self.config.engine_side == Some(self.side_to_move())
    }

    /// Most recent committed move, without undoing it.
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.state.history().peek().map(|entry| &entry.mv)
    }

    /// Selects the piece on `square` and returns its legal moves. Empty
    /// squares, opponent pieces, and finished games give `None` and clear the
    /// selection.
    pub fn select_piece(&mut self, square: Square) -> ChessResult<Option<Vec<ChessMove>>> {
        self.clear_selection();
        if self.game_over.is_some() {
            warn!("selection on {square} ignored: game is over");
            return Ok(None);
        }
        let Some((slot, record)) = self.state.piece_at(square) else {
            return Ok(None);
        };
        if record.side != self.side_to_move() {
            return Ok(None);
        }

        let moves = legal_moves(&mut self.state, slot)?;
        self.selection = Some(slot);
        self.selection_moves = moves.clone();
        Ok(Some(moves))
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.selection_moves.clear();
    }

    /// Moves the selected piece to `to`.
    pub fn move_selected_to(&mut self, to: Square) -> ChessResult<MoveOutcome> {
        let Some(slot) = self.selection else {
            return Err(ChessErrors::InvalidSelection(to));
        };
        let Some(mv) = self.selection_moves.iter().find(|mv| mv.to == to).copied() else {
            let from = self.state.pieces().get(slot)?.square;
            warn!("rejected {from}{to}: not a legal destination");
            return Err(ChessErrors::IllegalDestination { from, to });
        };
        self.commit(mv)
    }

    /// Validates `mv` against the legal moves of its piece and commits it.
    pub fn apply_move(&mut self, mv: ChessMove) -> ChessResult<MoveOutcome> {
        if self.game_over.is_some() {
            return Err(ChessErrors::GameOver);
        }
        let record = *self.state.pieces().get(mv.piece)?;
        if !record.active || record.side != self.side_to_move() {
            warn!("rejected {mv}: piece is not movable by {:?}", self.side_to_move());
            return Err(ChessErrors::InvalidSelection(mv.from));
        }
        if !legal_moves(&mut self.state, mv.piece)?.contains(&mv) {
            warn!("rejected {mv}: not a legal move");
            return Err(ChessErrors::IllegalDestination {
                from: mv.from,
                to: mv.to,
            });
        }
        self.commit(mv)
    }

    /// Runs the minimax engine at `depth` and commits its move. `Ok(None)`
    /// means the side to move had no legal move and the game is now over.
    pub fn request_engine_move(&mut self, depth: u8) -> ChessResult<Option<MoveOutcome>> {
        let mut engine = MinimaxEngine::with_depth(depth);
        self.play_engine_move(&mut engine)
    }

    /// Runs the minimax engine at the configured `search_depth`.
    pub fn request_default_engine_move(&mut self) -> ChessResult<Option<MoveOutcome>> {
        self.request_engine_move(self.config.search_depth)
    }

    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> ChessResult<Option<MoveOutcome>> {
        if self.game_over.is_some() {
            return Err(ChessErrors::GameOver);
        }
        match engine.choose_move(&mut self.state)? {
            Some(mv) => {
                info!("{} plays {mv} for {:?}", engine.name(), self.side_to_move());
                self.commit(mv).map(Some)
            }
            None => {
                let side = self.side_to_move();
                self.game_over = position_status(&mut self.state, side)?.game_over;
                Ok(None)
            }
        }
    }

    /// Reverses the last committed move. `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self) -> ChessResult<bool> {
        self.clear_selection();
        match self.state.unmake_move()? {
            Some(_) => {
                self.game_over = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn commit(&mut self, mv: ChessMove) -> ChessResult<MoveOutcome> {
        self.state.make_move(mv, MoveMode::Committed)?;
        self.clear_selection();

        let next = self.side_to_move();
        let status = position_status(&mut self.state, next)?;
        self.game_over = status.game_over;
        match status.game_over {
            Some(GameOver::Checkmate { winner }) => info!("checkmate, {winner:?} wins"),
            Some(GameOver::Stalemate) => info!("stalemate, {next:?} has no legal move"),
            None if status.in_check => info!("{next:?} is in check"),
            None => {}
        }

        Ok(MoveOutcome {
            mv,
            captured: mv.captured,
            next_side_to_move: next,
            in_check: status.in_check,
            game_over: status.game_over,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
