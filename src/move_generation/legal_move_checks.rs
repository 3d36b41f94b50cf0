//! Attack map construction and check detection.

use crate::game_state::attack_map::AttackMap;
use crate::game_state::chess_types::{Side, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{generate_targets_for, GenerationMode};

/// Pressure of every active `attacker` piece, counted per square.
pub fn compute_attack_map(game_state: &GameState, attacker: Side) -> AttackMap {
    let mut map = AttackMap::new(attacker);
    let mut targets = Vec::with_capacity(32);
    for (_, record) in game_state
        .pieces()
        .iter()
        .filter(|(_, r)| r.active && r.side == attacker)
    {
        targets.clear();
        generate_targets_for(game_state, record, GenerationMode::Pressure, &mut targets);
        for square in &targets {
            map.add_pressure(*square);
        }
    }
    map
}

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker: Side) -> bool {
    compute_attack_map(game_state, attacker).is_attacked(square)
}

/// Whether `side`'s King stands on a square the opponent bears on. The map
/// is rebuilt from the current board, so this is also valid mid-search.
pub fn is_king_in_check(game_state: &GameState, side: Side) -> bool {
    game_state
        .king_square(side)
        .is_some_and(|king| is_square_attacked(game_state, king, side.opposite()))
}
