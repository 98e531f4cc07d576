//! Interactive two-player front-end.
//!
//! Usage:
//! `cargo run`
//! `cargo run -- --forward-captures`
//! `cargo run -- --position "8/8/8/4n3/3r4/8/8/8 r"`
//!
//! Each prompt reads `from_row from_col to_row to_col`; `quit` or EOF ends
//! the session. Set `RUST_LOG=debug` to trace accepted moves.

use std::io::{self, BufRead, Write};

use plum_checkers::game_state::checkers_rules::RulesConfig;
use plum_checkers::game_state::checkers_types::MoveRejection;
use plum_checkers::game_state::game_state::GameState;
use plum_checkers::move_generation::legal_move_checks::capturing_pieces;
use plum_checkers::utils::cli_args::{arg_value, has_flag};
use plum_checkers::utils::move_notation::parse_move;
use plum_checkers::utils::position_parser::parse_position_with_rules;
use plum_checkers::utils::render_game_state::render_game_state;

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let rules = RulesConfig {
        capture_requires_forward_direction: has_flag(&args, "--forward-captures"),
    };
    let mut game = match arg_value(&args, "--position") {
        Some(position) => parse_position_with_rules(&position, rules).map_err(|e| e.to_string())?,
        None => GameState::with_rules(rules),
    };

    run_stdio_loop(&mut game).map_err(|e| e.to_string())
}

fn run_stdio_loop(game: &mut GameState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        let outcome = game.outcome();
        writeln!(stdout, "{}", render_game_state(game))?;
        if outcome.is_over() {
            writeln!(stdout, "Game over: {outcome}")?;
            return Ok(());
        }

        write!(stdout, "Move (from_row from_col to_row to_col): ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        let mv = match parse_move(trimmed) {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(stdout, "Could not read move: {err}")?;
                continue;
            }
        };

        match game.play(mv) {
            Ok(applied) if applied.must_continue_capturing => {
                writeln!(stdout, "You can continue capturing!")?;
            }
            Ok(_) => {}
            Err(rejection) => {
                writeln!(stdout, "Illegal move {mv}: {rejection}")?;
                if rejection == MoveRejection::CaptureMandatory {
                    let capturers = match game.pending_capture() {
                        Some(pending) => vec![pending],
                        None => capturing_pieces(game.board(), &game.rules(), game.side_to_move()),
                    };
                    let listed: Vec<String> = capturers.iter().map(ToString::to_string).collect();
                    writeln!(stdout, "Pieces that can capture: {}", listed.join(" "))?;
                }
            }
        }
    }
}
