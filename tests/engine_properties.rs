use pretty_assertions::assert_eq;

use plum_engine::engines::engine_random::RandomEngine;
use plum_engine::engines::engine_trait::Engine;
use plum_engine::game_state::chess_types::{PieceKind, Side, Square};
use plum_engine::game_state::game_state::GameState;
use plum_engine::game_state::undo_state::MoveMode;
use plum_engine::move_generation::legal_move_checks::is_king_in_check;
use plum_engine::move_generation::legal_move_generator::{all_legal_moves, legal_moves, GameOver};
use plum_engine::search::board_scoring::MaterialScorer;
use plum_engine::search::minimax::{best_move, SearchConfig};
use plum_engine::session::game_session::GameSession;
use plum_engine::session::session_config::SessionConfig;
use plum_engine::utils::algebraic::long_algebraic_to_squares;

fn sq(column: u8, row: u8) -> Square {
    Square::new(column, row).unwrap()
}

fn play(session: &mut GameSession, text: &str) {
    let (from, to) = long_algebraic_to_squares(text).unwrap();
    assert!(session.select_piece(from).unwrap().is_some(), "nothing to move on {from}");
    session.move_selected_to(to).unwrap();
}

#[test]
fn random_games_keep_the_board_consistent_and_unwind_to_the_start() {
    for seed in [1u64, 2, 3] {
        let mut state = GameState::new_game();
        let mut engine = RandomEngine::with_seed(seed);

        for _ in 0..80 {
            let side = state.side_to_move();
            for mv in all_legal_moves(&mut state, side).unwrap() {
                let probe = state.speculate(mv).unwrap();
                assert!(!is_king_in_check(&probe, side), "{mv} leaves {side:?} in check");
            }

            let Some(mv) = engine.choose_move(&mut state).unwrap() else {
                break;
            };
            state.make_move(mv, MoveMode::Committed).unwrap();
            state.verify_consistency().unwrap();
            let fresh = is_king_in_check(&state, state.side_to_move());
            assert_eq!(state.cached_check(), Some(fresh));
        }

        while state.unmake_move().unwrap().is_some() {}
        assert_eq!(state, GameState::new_game());
    }
}

#[test]
fn opening_pawn_has_two_moves_and_the_boxed_in_king_none() {
    let mut state = GameState::new_game();
    let pawn = state.board().occupant(sq(4, 1)).unwrap();
    assert_eq!(legal_moves(&mut state, pawn).unwrap().len(), 2);

    let king = state.board().occupant(sq(4, 7)).unwrap();
    assert!(legal_moves(&mut state, king).unwrap().is_empty());
}

#[test]
fn fools_mate_ends_the_session() {
    let mut session = GameSession::new(SessionConfig {
        engine_side: None,
        ..SessionConfig::default()
    });
    for text in ["f2f3", "e7e5", "g2g4"] {
        play(&mut session, text);
    }

    let (from, to) = long_algebraic_to_squares("d8h4").unwrap();
    session.select_piece(from).unwrap();
    let outcome = session.move_selected_to(to).unwrap();
    assert!(outcome.in_check);
    assert_eq!(
        outcome.game_over,
        Some(GameOver::Checkmate {
            winner: Side::Black
        })
    );
    assert_eq!(session.game_over(), outcome.game_over);

    assert!(session.undo().unwrap());
    assert_eq!(session.game_over(), None);
    assert_eq!(session.side_to_move(), Side::Black);
}

#[test]
fn knight_capture_and_undo_restore_the_captured_pawn() {
    let mut state = GameState::from_pieces(
        Side::White,
        &[
            (Side::White, PieceKind::King, sq(0, 0)),
            (Side::White, PieceKind::Knight, sq(3, 3)),
            (Side::Black, PieceKind::Pawn, sq(4, 5)),
            (Side::Black, PieceKind::King, sq(7, 7)),
        ],
    )
    .unwrap();
    let before = state.clone();

    let capture = legal_moves(&mut state, 1)
        .unwrap()
        .into_iter()
        .find(|mv| mv.to == sq(4, 5))
        .unwrap();
    assert_eq!(capture.captured, Some(2));

    state.make_move(capture, MoveMode::Committed).unwrap();
    assert!(!state.pieces().get(2).unwrap().active);
    assert_eq!(state.piece_at(sq(4, 5)).map(|(slot, _)| slot), Some(1));

    state.unmake_move().unwrap();
    let pawn = state.pieces().get(2).unwrap();
    assert!(pawn.active);
    assert_eq!(pawn.square, sq(4, 5));
    assert_eq!(state.pieces().get(1).unwrap().square, sq(3, 3));
    assert_eq!(state, before);
}

#[test]
fn search_is_repeatable_and_side_effect_free() {
    let mut state = GameState::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4",
    )
    .unwrap();
    let before = state.clone();

    let first = best_move(&mut state, &MaterialScorer, SearchConfig { depth: 2 }).unwrap();
    let second = best_move(&mut state, &MaterialScorer, SearchConfig { depth: 2 }).unwrap();
    assert_eq!(first, second);
    assert!(first.best_move.is_some());
    assert_eq!(state, before);
}

#[test]
fn engine_session_answers_a_human_move() {
    let mut session = GameSession::default();
    play(&mut session, "e2e4");
    assert!(session.is_engine_turn());

    let outcome = session.request_engine_move(2).unwrap().unwrap();
    assert_eq!(outcome.next_side_to_move, Side::White);
    assert_eq!(session.state().history().len(), 2);
    session.state().verify_consistency().unwrap();
}
