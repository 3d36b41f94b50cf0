//! Terminal front end: play against the engine or play both sides by hand.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{error, info};

use plum_engine::engines::engine_random::RandomEngine;
use plum_engine::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use plum_engine::game_state::chess_types::Side;
use plum_engine::game_state::game_state::GameState;
use plum_engine::move_generation::legal_move_generator::GameOver;
use plum_engine::session::game_session::{GameSession, MoveOutcome};
use plum_engine::session::session_config::SessionConfig;
use plum_engine::utils::algebraic::{algebraic_to_square, long_algebraic_to_squares};
use plum_engine::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineSide {
    White,
    Black,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the Plum engine", long_about = None)]
struct Args {
    /// Search depth in plies for the minimax engine
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    /// Side played by the engine
    #[arg(long, value_enum, default_value_t = EngineSide::Black)]
    engine_side: EngineSide,

    /// Move selection strategy of the engine
    #[arg(long, value_enum, default_value_t = Opponent::Minimax)]
    opponent: Opponent,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Starting position (placement and side to move are read)
    #[arg(long)]
    fen: Option<String>,
}

/// Engine turn: the minimax engine runs at the session's configured depth.
fn play_engine_turn(
    session: &mut GameSession,
    random: Option<&mut RandomEngine>,
) -> Result<Option<MoveOutcome>> {
    let outcome = match random {
        Some(engine) => session.play_engine_move(engine)?,
        None => session.request_default_engine_move()?,
    };
    Ok(outcome)
}

fn print_outcome(outcome: &MoveOutcome) {
    println!("played {}", outcome.mv);
    match outcome.game_over {
        Some(GameOver::Checkmate { winner }) => println!("checkmate: {winner:?} wins"),
        Some(GameOver::Stalemate) => println!("stalemate"),
        None if outcome.in_check => println!("{:?} is in check", outcome.next_side_to_move),
        None => {}
    }
}

fn print_help() {
    println!("commands: <from><to> (e.g. e2e4), moves <square>, undo, board, history, quit");
}

/// Handles one line of human input. Returns `false` when the user quits.
fn handle_command(session: &mut GameSession, line: &str) -> Result<bool> {
    let mut words = line.split_whitespace();
    match words.next() {
        None => {}
        Some("quit") | Some("exit") => return Ok(false),
        Some("help") => print_help(),
        Some("board") => println!("{}", render_game_state(session.state())),
        Some("history") => {
            let moves: Vec<String> = session
                .state()
                .history()
                .iter()
                .map(|entry| entry.mv.to_string())
                .collect();
            println!("{}", moves.join(" "));
        }
        Some("undo") => {
            // Against an engine, take back the engine reply and our own move.
            let plies = if session.config().engine_side.is_some() { 2 } else { 1 };
            for _ in 0..plies {
                if !session.undo()? {
                    println!("nothing to undo");
                    break;
                }
            }
            println!("{}", render_game_state(session.state()));
        }
        Some("moves") => {
            let Some(text) = words.next() else {
                bail!("usage: moves <square>");
            };
            let square = algebraic_to_square(text)?;
            match session.select_piece(square)? {
                Some(moves) => {
                    let targets: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();
                    println!("{square}: {}", targets.join(" "));
                }
                None => println!("{square}: no piece of the side to move"),
            }
            session.clear_selection();
        }
        Some(text) => {
            let (from, to) = long_algebraic_to_squares(text)?;
            if session.select_piece(from)?.is_none() {
                bail!("no piece of the side to move on {from}");
            }
            let outcome = session.move_selected_to(to)?;
            print_outcome(&outcome);
            println!("{}", render_game_state(session.state()));
        }
    }
    Ok(true)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let engine_side = match args.engine_side {
        EngineSide::White => Some(Side::White),
        EngineSide::Black => Some(Side::Black),
        EngineSide::None => None,
    };
    let config = SessionConfig {
        search_depth: args.depth,
        engine_side,
        ..SessionConfig::default()
    };

    let mut session = match &args.fen {
        Some(fen) => GameSession::from_state(GameState::from_fen(fen)?, config)?,
        None => GameSession::new(config),
    };
    let mut random = (args.opponent == Opponent::Random).then(RandomEngine::new);
    info!(
        "starting game: {:?} engine plays {:?} at depth {}",
        args.opponent,
        engine_side,
        session.config().search_depth
    );

    println!("{}", render_game_state(session.state()));
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if let Some(result) = session.game_over() {
            println!("game over: {result:?}");
            break;
        }

        if session.is_engine_turn() {
            if let Some(outcome) = play_engine_turn(&mut session, random.as_mut())? {
                print_outcome(&outcome);
                println!("{}", render_game_state(session.state()));
            }
            continue;
        }

        print!("{:?} to move> ", session.side_to_move());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match handle_command(&mut session, line?.trim()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                error!("{err}");
                println!("error: {err}");
            }
        }
    }
    Ok(())
}
