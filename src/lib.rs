//! Crate root module declarations for the Plum Checkers rules engine.
//!
//! This file exposes the game-state model (board, pieces, rules engine,
//! outcome evaluation), move generation and perft, and the text utilities
//! used by the binaries, tests and benchmarks.

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_outcome;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod cli_args;
    pub mod move_notation;
    pub mod position_generator;
    pub mod position_parser;
    pub mod random_playout;
    pub mod render_game_state;
}
