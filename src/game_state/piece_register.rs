//! Slot-stable register of every piece in the game.
//!
//! Pieces are never removed: a capture clears `active` and leaves the last
//! coordinates in place, so a slot index identifies the same logical piece
//! for the whole game.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{
    back_rank_row, pawn_start_row, piece_points, BACK_RANK, PIECE_SLOTS,
};
use crate::game_state::chess_types::{PieceKind, Side, Slot, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub kind: PieceKind,
    pub side: Side,
    pub square: Square,
    pub has_moved: bool,
    pub active: bool,
}

impl PieceRecord {
    pub fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Self {
            kind,
            side,
            square,
            has_moved: false,
            active: true,
        }
    }

    /// Material score, positive for White and negative for Black.
    #[inline]
    pub fn point_value(&self) -> i32 {
        self.side.sign() * piece_points(self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceRegister {
    slots: Vec<PieceRecord>,
}

impl PieceRegister {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(PIECE_SLOTS),
        }
    }

    /// Standard initial position. White occupies slots `0..16` (pawns a..h,
    /// then the back rank a..h), Black the same layout in `16..32`.
    pub fn standard() -> Self {
        let mut register = Self::new();
        for side in [Side::White, Side::Black] {
            for column in 0..8u8 {
                register.push_unchecked(PieceRecord::new(
                    PieceKind::Pawn,
                    side,
                    Square::on_board(column, pawn_start_row(side)),
                ));
            }
            for (column, kind) in BACK_RANK.iter().enumerate() {
                register.push_unchecked(PieceRecord::new(
                    *kind,
                    side,
                    Square::on_board(column as u8, back_rank_row(side)),
                ));
            }
        }
        register
    }

    fn push_unchecked(&mut self, record: PieceRecord) {
        self.slots.push(record);
    }

    /// Appends a piece and returns its slot.
    pub fn add(&mut self, record: PieceRecord) -> ChessResult<Slot> {
        if self.slots.len() >= PIECE_SLOTS {
            return Err(ChessErrors::PieceRegisterFull(PIECE_SLOTS));
        }
        self.slots.push(record);
        Ok(self.slots.len() - 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: Slot) -> ChessResult<&PieceRecord> {
        self.slots.get(slot).ok_or(ChessErrors::InvalidSlot(slot))
    }

    fn get_mut(&mut self, slot: Slot) -> ChessResult<&mut PieceRecord> {
        self.slots.get_mut(slot).ok_or(ChessErrors::InvalidSlot(slot))
    }

    pub fn set_active(&mut self, slot: Slot, active: bool) -> ChessResult<()> {
        self.get_mut(slot)?.active = active;
        Ok(())
    }

    /// Moves a piece to `square` and marks it as having moved.
    pub fn relocate(&mut self, slot: Slot, square: Square) -> ChessResult<()> {
        let record = self.get_mut(slot)?;
        record.square = square;
        record.has_moved = true;
        Ok(())
    }

    /// Overwrites a slot with a previously captured snapshot.
    pub fn restore(&mut self, slot: Slot, snapshot: PieceRecord) -> ChessResult<()> {
        *self.get_mut(slot)? = snapshot;
        Ok(())
    }

    pub fn point_value(&self, slot: Slot) -> ChessResult<i32> {
        Ok(self.get(slot)?.point_value())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &PieceRecord)> {
        self.slots.iter().enumerate()
    }

    /// Active slots of `side` in register order.
    pub fn active_slots(&self, side: Side) -> impl Iterator<Item = Slot> + '_ {
        self.iter()
            .filter(move |(_, record)| record.active && record.side == side)
            .map(|(slot, _)| slot)
    }

    pub fn king_slot(&self, side: Side) -> Option<Slot> {
        self.iter()
            .find(|(_, record)| record.active && record.side == side && record.kind == PieceKind::King)
            .map(|(slot, _)| slot)
    }

    /// White material minus Black material over active pieces.
    pub fn material_balance(&self) -> i32 {
        self.slots
            .iter()
            .filter(|record| record.active)
            .map(PieceRecord::point_value)
            .sum()
    }
}
