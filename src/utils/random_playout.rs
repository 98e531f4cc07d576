//! Seeded random self-play for invariant testing and benchmarking.
//!
//! Each ply picks uniformly among the legal half-moves; with some
//! probability it first throws a random (usually illegal) coordinate pair at
//! the engine to exercise the rejection paths.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::checkers_types::{Move, BOARD_SIZE};
use crate::game_state::game_outcome::GameResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u32,
    /// Chance per ply of probing the engine with a random move first.
    pub noise_probability: f64,
    pub rules: RulesConfig,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            noise_probability: 0.25,
            rules: RulesConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: GameResult,
    pub final_state: GameState,
    pub played_moves: Vec<Move>,
    pub rejected_probes: u32,
}

/// Plays one random game. The same seed and config always give the same game.
pub fn play_random_game(seed: u64, config: &PlayoutConfig) -> Result<PlayoutResult, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::with_rules(config.rules);
    let mut played_moves = Vec::<Move>::new();
    let mut rejected_probes = 0u32;

    for _ in 0..config.max_plies {
        let outcome = state.outcome();
        if outcome.is_over() {
            return Ok(PlayoutResult {
                outcome,
                final_state: state,
                played_moves,
                rejected_probes,
            });
        }

        if rng.random_bool(config.noise_probability) {
            let probe = random_coordinates(&mut rng);
            let before = state.clone();
            match state.play(probe) {
                Ok(_) => played_moves.push(probe),
                Err(_) => {
                    if state != before {
                        return Err(format!("rejected probe {probe} mutated the game"));
                    }
                    rejected_probes += 1;
                }
            }
            continue;
        }

        let legal_moves = LegalMoveGenerator
            .generate_legal_moves(&state)
            .map_err(|e| e.to_string())?;

        let Some(picked) = legal_moves.as_slice().choose(&mut rng) else {
            // A side without moves is immobilized, so `outcome` ends the game first.
            return Err("side to move has no legal move in an unfinished game".to_owned());
        };

        played_moves.push(picked.applied.mv);
        state = picked.game_after_move.clone();
    }

    Ok(PlayoutResult {
        outcome: state.outcome(),
        final_state: state,
        played_moves,
        rejected_probes,
    })
}

/// A coordinate pair near the board, occasionally off it.
fn random_coordinates(rng: &mut StdRng) -> Move {
    let mut coord = || rng.random_range(-1..=BOARD_SIZE);
    Move::from_coords(coord(), coord(), coord(), coord())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{Player, ALL_PLAYERS};

    fn assert_board_invariants(state: &GameState) {
        let board = state.board();
        for player in ALL_PLAYERS {
            assert!(board.piece_count(player) <= 12);
            for (coord, piece) in board.pieces_of(player) {
                assert!(coord.is_dark(), "{coord} should be a dark square");
                assert_eq!(piece.owner, player);
            }
        }
        assert_eq!(board.occupancy(Player::Red) & board.occupancy(Player::Black), 0);
    }

    #[test]
    fn seeded_playouts_are_reproducible() {
        let config = PlayoutConfig::default();
        let first = play_random_game(42, &config).expect("playout should run");
        let second = play_random_game(42, &config).expect("playout should run");

        assert_eq!(first.played_moves, second.played_moves);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn random_games_keep_board_invariants() {
        let mut total_rejected = 0u32;
        for seed in 0..24u64 {
            let result = play_random_game(seed, &PlayoutConfig::default()).expect("playout should run");

            assert_board_invariants(&result.final_state);
            total_rejected += result.rejected_probes;

            // Replaying the recorded moves reaches the same position.
            let mut replay = GameState::new_game();
            for mv in &result.played_moves {
                replay.play(*mv).expect("recorded move should replay");
                assert_board_invariants(&replay);
            }
            assert_eq!(replay.board(), result.final_state.board());
            assert_eq!(replay.side_to_move(), result.final_state.side_to_move());
        }
        assert!(total_rejected > 0);
    }

    #[test]
    fn forward_capture_variant_plays_out_too() {
        let config = PlayoutConfig {
            rules: RulesConfig::forward_captures_only(),
            ..PlayoutConfig::default()
        };
        for seed in 100..108u64 {
            let result = play_random_game(seed, &config).expect("playout should run");
            assert_board_invariants(&result.final_state);
        }
    }
}
