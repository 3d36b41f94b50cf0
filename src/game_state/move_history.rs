//! Bounded last-in-first-out log of executed moves.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::undo_state::UndoState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<UndoState>,
    capacity: usize,
}

impl MoveHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Fails with `HistoryFull` instead of dropping the entry.
    pub fn push(&mut self, entry: UndoState) -> ChessResult<()> {
        if self.is_full() {
            return Err(ChessErrors::HistoryFull {
                capacity: self.capacity,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<UndoState> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&UndoState> {
        self.entries.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &UndoState> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Side, Square};
    use crate::game_state::piece_register::PieceRecord;
    use crate::game_state::undo_state::MoveMode;
    use crate::moves::chess_move::ChessMove;

    fn entry(column: u8) -> UndoState {
        let pawn = PieceRecord::new(PieceKind::Pawn, Side::White, Square::new(column, 1).unwrap());
        UndoState {
            mv: ChessMove::new(column as usize, pawn, Square::new(column, 2).unwrap(), None),
            mode: MoveMode::Committed,
            prev_side_to_move: Side::White,
        }
    }

    #[test]
    fn pop_returns_entries_in_reverse_order() {
        let mut history = MoveHistory::with_capacity(4);
        history.push(entry(0)).unwrap();
        history.push(entry(1)).unwrap();
        assert_eq!(history.pop(), Some(entry(1)));
        assert_eq!(history.pop(), Some(entry(0)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn iter_runs_oldest_first() {
        let mut history = MoveHistory::with_capacity(4);
        for column in 0..3 {
            history.push(entry(column)).unwrap();
        }
        let columns: Vec<u8> = history.iter().map(|e| e.mv.from.column()).collect();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut history = MoveHistory::with_capacity(4);
        history.push(entry(3)).unwrap();
        assert_eq!(history.peek(), Some(&entry(3)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn push_past_capacity_is_recoverable() {
        let mut history = MoveHistory::with_capacity(1);
        history.push(entry(0)).unwrap();
        assert_eq!(
            history.push(entry(1)),
            Err(ChessErrors::HistoryFull { capacity: 1 })
        );
        assert_eq!(history.len(), 1);
    }
}
