//! Perft counts and timing from a position.
//!
//! Usage:
//! `cargo run --release --bin perft_report`
//! `cargo run --release --bin perft_report -- --depth 8 --threads`
//! `cargo run --release --bin perft_report -- --position "7n/8/3n4/8/1n6/r7/8/8 r"`

use std::sync::Arc;
use std::time::Instant;

use plum_checkers::game_state::checkers_rules::{RulesConfig, STARTING_POSITION};
use plum_checkers::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_checkers::move_generation::perft::{perft, perft_multi_threaded};
use plum_checkers::utils::cli_args::{arg_u8, arg_value, has_flag};
use plum_checkers::utils::position_parser::parse_position_with_rules;
use plum_checkers::utils::render_game_state::render_game_state;

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let max_depth = arg_u8(&args, "--depth", 6);
    let threaded = has_flag(&args, "--threads");
    let rules = RulesConfig {
        capture_requires_forward_direction: has_flag(&args, "--forward-captures"),
    };
    let position = arg_value(&args, "--position").unwrap_or_else(|| STARTING_POSITION.to_owned());
    let game = parse_position_with_rules(&position, rules).map_err(|e| e.to_string())?;

    println!("{}", render_game_state(&game));
    println!("perft run: max_depth={max_depth} threaded={threaded}");

    for depth in 1..=max_depth {
        let start = Instant::now();
        let counts = if threaded {
            perft_multi_threaded(Arc::new(LegalMoveGenerator), &game, depth)
        } else {
            perft(&LegalMoveGenerator, &game, depth)
        }
        .map_err(|e| e.to_string())?;
        let elapsed_ms = start.elapsed().as_millis();

        println!(
            "depth={} nodes={} captures={} promotions={} chain_continuations={} elapsed_ms={}",
            depth,
            counts.nodes,
            counts.captures,
            counts.promotions,
            counts.chain_continuations,
            elapsed_ms
        );
    }

    Ok(())
}
