//! Core incremental board state representation.
//!
//! `GameState` owns the piece register, the board index derived from it, the
//! bounded move history, the side to move, and the attack map of the side
//! that just moved. All mutation goes through `make_move` / `unmake_move`,
//! which update the register and the index together.

use std::ops::{Deref, DerefMut};

use log::{debug, error};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::attack_map::AttackMap;
use crate::game_state::board_index::BoardIndex;
use crate::game_state::chess_rules::HISTORY_CAPACITY;
use crate::game_state::chess_types::{PieceKind, Side, Slot, Square};
use crate::game_state::move_history::MoveHistory;
use crate::game_state::piece_register::{PieceRecord, PieceRegister};
use crate::game_state::undo_state::{MoveMode, UndoState};
use crate::move_generation::legal_move_checks::compute_attack_map;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pieces: PieceRegister,
    board: BoardIndex,
    history: MoveHistory,
    side_to_move: Side,
    attack_map: AttackMap,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move.
    pub fn new_game() -> Self {
        Self::with_history_capacity(HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        let pieces = PieceRegister::standard();
        let board = BoardIndex::from_register(&pieces);
        let mut state = Self {
            pieces,
            board,
            history: MoveHistory::with_capacity(capacity),
            side_to_move: Side::White,
            attack_map: AttackMap::new(Side::Black),
        };
        state.refresh_attack_map();
        state
    }

    /// Builds a position from `(side, kind, square)` triples. Slots are
    /// assigned in the order given.
    pub fn from_pieces(
        side_to_move: Side,
        pieces: &[(Side, PieceKind, Square)],
    ) -> ChessResult<Self> {
        let mut register = PieceRegister::new();
        for &(side, kind, square) in pieces {
            register.add(PieceRecord::new(kind, side, square))?;
        }
        Self::from_register(register, side_to_move, HISTORY_CAPACITY)
    }

    pub fn from_register(
        pieces: PieceRegister,
        side_to_move: Side,
        history_capacity: usize,
    ) -> ChessResult<Self> {
        let mut board = BoardIndex::new();
        for (slot, record) in pieces.iter().filter(|(_, r)| r.active) {
            if board.occupant(record.square).is_some() {
                return Err(ChessErrors::SquareOccupied(record.square));
            }
            board.place(record.square, slot);
        }

        for side in [Side::White, Side::Black] {
            let count = pieces
                .active_slots(side)
                .filter(|slot| matches!(pieces.get(*slot), Ok(r) if r.kind == PieceKind::King))
                .count();
            if count != 1 {
                return Err(ChessErrors::KingCount { side, count });
            }
        }

        let mut state = Self {
            pieces,
            board,
            history: MoveHistory::with_capacity(history_capacity),
            side_to_move,
            attack_map: AttackMap::new(side_to_move.opposite()),
        };
        state.refresh_attack_map();
        Ok(state)
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen, HISTORY_CAPACITY)
    }

    #[inline]
    pub fn pieces(&self) -> &PieceRegister {
        &self.pieces
    }

    #[inline]
    pub fn board(&self) -> &BoardIndex {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Attack map of the side that is not to move, as of the last committed move.
    #[inline]
    pub fn attack_map(&self) -> &AttackMap {
        &self.attack_map
    }

    /// Whether the side to move is in check, read from the cached attack
    /// map. `None` while a speculative move is outstanding, since the cache
    /// then still describes the last committed position.
    pub fn cached_check(&self) -> Option<bool> {
        if matches!(self.history.peek(), Some(entry) if entry.mode == MoveMode::Speculative) {
            return None;
        }
        Some(
            self.king_square(self.side_to_move)
                .is_some_and(|king| self.attack_map.is_attacked(king)),
        )
    }

    pub fn piece_at(&self, square: Square) -> Option<(Slot, &PieceRecord)> {
        let slot = self.board.occupant(square)?;
        self.pieces.get(slot).ok().map(|record| (slot, record))
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        let slot = self.pieces.king_slot(side)?;
        self.pieces.get(slot).ok().map(|record| record.square)
    }

    /// Executes `mv`. Committed moves flip the side to move and refresh the
    /// attack map; speculative moves only change the board.
    ///
    /// The history entry is pushed before anything is mutated, so a full
    /// history leaves the position untouched.
    pub fn make_move(&mut self, mv: ChessMove, mode: MoveMode) -> ChessResult<()> {
        self.check_move_matches_board(&mv)?;

        self.history.push(UndoState {
            mv,
            mode,
            prev_side_to_move: self.side_to_move,
        })?;

        if let Some(captured) = mv.captured {
            self.pieces.set_active(captured, false)?;
            self.board.clear(mv.to);
        }
        self.board.clear(mv.from);
        self.board.place(mv.to, mv.piece);
        self.pieces.relocate(mv.piece, mv.to)?;

        if mode == MoveMode::Committed {
            self.side_to_move = self.side_to_move.opposite();
            self.refresh_attack_map();
            debug!(
                "committed {mv} (slot {}, captured {:?}), {:?} to move",
                mv.piece, mv.captured, self.side_to_move
            );
        }
        Ok(())
    }

    /// Reverses the most recent history entry. Returns `Ok(None)` when the
    /// history is empty.
    pub fn unmake_move(&mut self) -> ChessResult<Option<UndoState>> {
        let Some(entry) = self.history.pop() else {
            return Ok(None);
        };
        let mv = entry.mv;

        self.board.clear(mv.to);
        self.pieces.restore(mv.piece, mv.moved_before)?;
        self.board.place(mv.from, mv.piece);
        if let Some(captured) = mv.captured {
            self.pieces.set_active(captured, true)?;
            self.board.place(mv.to, captured);
        }

        if entry.mode == MoveMode::Committed {
            self.side_to_move = entry.prev_side_to_move;
            self.refresh_attack_map();
            debug!("undid {mv}, {:?} to move", self.side_to_move);
        }
        Ok(Some(entry))
    }

    /// Makes `mv` speculatively and returns a guard that unmakes it on drop.
    pub fn speculate(&mut self, mv: ChessMove) -> ChessResult<SpeculativeMove<'_>> {
        self.make_move(mv, MoveMode::Speculative)?;
        Ok(SpeculativeMove { state: self })
    }

    pub fn refresh_attack_map(&mut self) {
        self.attack_map = compute_attack_map(self, self.side_to_move.opposite());
    }

    /// Confirms every active piece is indexed on its own square and every
    /// indexed square points back at an active piece standing there.
    pub fn verify_consistency(&self) -> ChessResult<()> {
        for (slot, record) in self.pieces.iter() {
            if record.active && self.board.occupant(record.square) != Some(slot) {
                return Err(ChessErrors::BoardIndexMismatch(format!(
                    "slot {slot} is active on {} but the index holds {:?}",
                    record.square,
                    self.board.occupant(record.square)
                )));
            }
        }
        for (square, slot) in self.board.occupied() {
            let record = self.pieces.get(slot)?;
            if !record.active || record.square != square {
                return Err(ChessErrors::BoardIndexMismatch(format!(
                    "{square} indexes slot {slot} which is {} on {}",
                    if record.active { "active" } else { "captured" },
                    record.square
                )));
            }
        }
        Ok(())
    }

    fn check_move_matches_board(&self, mv: &ChessMove) -> ChessResult<()> {
        let record = self.pieces.get(mv.piece)?;
        if !record.active {
            return Err(ChessErrors::InactivePiece(mv.piece));
        }
        if *record != mv.moved_before || self.board.occupant(mv.from) != Some(mv.piece) {
            return Err(ChessErrors::StaleMove(format!(
                "slot {} is not on {} in the recorded state",
                mv.piece, mv.from
            )));
        }
        let occupant = self.board.occupant(mv.to);
        if occupant != mv.captured {
            return Err(ChessErrors::StaleMove(format!(
                "{} holds {:?}, move expects {:?}",
                mv.to, occupant, mv.captured
            )));
        }
        if let Some(captured) = mv.captured {
            if self.pieces.get(captured)?.side == record.side {
                return Err(ChessErrors::StaleMove(format!(
                    "{mv} would capture a piece of its own side"
                )));
            }
        }
        Ok(())
    }
}

/// Scoped speculative move. The position is restored when the guard drops,
/// on every exit path.
pub struct SpeculativeMove<'a> {
    state: &'a mut GameState,
}

impl Deref for SpeculativeMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for SpeculativeMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for SpeculativeMove<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.state.unmake_move() {
            error!("failed to unmake speculative move: {err}");
        }
    }
}
