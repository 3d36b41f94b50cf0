//! Depth-limited minimax with alpha-beta pruning.
//!
//! The root side maximizes, its opponent minimizes, and the static score is
//! always taken from the root side's perspective. Every child is searched
//! inside a speculative guard, so the position, register and history are
//! unchanged when `best_move` returns, including after pruning cut-offs and
//! errors.

use log::{debug, trace};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::Side;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::BoardScorer;

pub const SCORE_INF: i32 = i32::MAX / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search; must be at least 1.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub nodes: u64,
}

/// Searches for the side to move. Ties keep the first move in generation order.
pub fn best_move<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    if config.depth == 0 {
        return Err(ChessErrors::InvalidSearchDepth);
    }

    let mut search = Search {
        scorer,
        root_side: game_state.side_to_move(),
        nodes: 0,
        best_move: None,
    };
    let score = search.minimax(game_state, config.depth, -SCORE_INF, SCORE_INF, true, true)?;

    trace!(
        "searched {} nodes at depth {} for {:?}",
        search.nodes,
        config.depth,
        search.root_side
    );
    if let Some(mv) = search.best_move {
        debug!("best move {mv} scores {score} for {:?}", search.root_side);
    }

    Ok(SearchResult {
        best_move: search.best_move,
        score,
        nodes: search.nodes,
    })
}

struct Search<'a, S: BoardScorer> {
    scorer: &'a S,
    root_side: Side,
    nodes: u64,
    best_move: Option<ChessMove>,
}

impl<S: BoardScorer> Search<'_, S> {
    fn minimax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        is_root: bool,
    ) -> ChessResult<i32> {
        self.nodes += 1;

        if depth == 0 {
            return Ok(self.evaluate(game_state));
        }

        let side = if maximizing {
            self.root_side
        } else {
            self.root_side.opposite()
        };
        let moves = all_legal_moves(game_state, side)?;
        if moves.is_empty() {
            return Ok(self.evaluate(game_state));
        }

        if maximizing {
            for mv in moves {
                let score = {
                    let mut child = game_state.speculate(mv)?;
                    self.minimax(&mut child, depth - 1, alpha, beta, false, false)?
                };
                if score > alpha {
                    alpha = score;
                    if is_root {
                        self.best_move = Some(mv);
                    }
                }
                if beta <= alpha {
                    break;
                }
            }
            Ok(alpha)
        } else {
            for mv in moves {
                let score = {
                    let mut child = game_state.speculate(mv)?;
                    self.minimax(&mut child, depth - 1, alpha, beta, true, false)?
                };
                if score < beta {
                    beta = score;
                }
                if beta <= alpha {
                    break;
                }
            }
            Ok(beta)
        }
    }

    #[inline]
    fn evaluate(&self, game_state: &GameState) -> i32 {
        self.scorer.score(game_state, self.root_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::search::board_scoring::MaterialScorer;
    use pretty_assertions::assert_eq;

    fn sq(column: u8, row: u8) -> Square {
        Square::new(column, row).unwrap()
    }

    #[test]
    fn depth_zero_is_rejected() {
        let mut state = GameState::new_game();
        assert_eq!(
            best_move(&mut state, &MaterialScorer, SearchConfig { depth: 0 }),
            Err(ChessErrors::InvalidSearchDepth)
        );
    }

    #[test]
    fn default_depth_is_five_plies() {
        assert_eq!(SearchConfig::default().depth, 5);
    }

    #[test]
    fn takes_a_hanging_queen() {
        let mut state = GameState::from_pieces(
            Side::White,
            &[
                (Side::White, PieceKind::King, sq(0, 0)),
                (Side::White, PieceKind::Rook, sq(3, 0)),
                (Side::Black, PieceKind::Queen, sq(3, 5)),
                (Side::Black, PieceKind::King, sq(7, 7)),
            ],
        )
        .unwrap();
        let result = best_move(&mut state, &MaterialScorer, SearchConfig { depth: 1 }).unwrap();
        let mv = result.best_move.unwrap();
        assert_eq!((mv.from, mv.to), (sq(3, 0), sq(3, 5)));
        assert_eq!(result.score, 55 - 50);
    }

    #[test]
    fn avoids_a_defended_pawn_at_depth_two() {
        // Qxd5 wins a pawn but loses the queen to the e6 pawn.
        let mut state = GameState::from_pieces(
            Side::White,
            &[
                (Side::White, PieceKind::King, sq(0, 0)),
                (Side::White, PieceKind::Queen, sq(3, 0)),
                (Side::Black, PieceKind::Pawn, sq(3, 4)),
                (Side::Black, PieceKind::Pawn, sq(4, 5)),
                (Side::Black, PieceKind::King, sq(7, 7)),
            ],
        )
        .unwrap();
        let result = best_move(&mut state, &MaterialScorer, SearchConfig { depth: 2 }).unwrap();
        let mv = result.best_move.unwrap();
        assert_ne!(mv.to, sq(3, 4));
        assert_eq!(result.score, 9 + 50 - 50 - 2);
    }

    #[test]
    fn search_leaves_the_position_untouched_and_is_deterministic() {
        let mut state = GameState::new_game();
        let before = state.clone();
        let first = best_move(&mut state, &MaterialScorer, SearchConfig { depth: 3 }).unwrap();
        assert_eq!(state, before);
        let second = best_move(&mut state, &MaterialScorer, SearchConfig { depth: 3 }).unwrap();
        assert_eq!(state, before);
        assert_eq!(first, second);
        assert!(first.best_move.is_some());
    }

    #[test]
    fn no_move_at_the_root_when_mated() {
        let mut state = GameState::from_pieces(
            Side::Black,
            &[
                (Side::White, PieceKind::King, sq(4, 5)),
                (Side::White, PieceKind::Queen, sq(4, 6)),
                (Side::Black, PieceKind::King, sq(4, 7)),
            ],
        )
        .unwrap();
        let result = best_move(&mut state, &MaterialScorer, SearchConfig { depth: 2 }).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -9);
    }
}
