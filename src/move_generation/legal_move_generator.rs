//! Full legal move generation.
//!
//! Candidate steps and jumps are enumerated for every piece of the side to
//! move (or only the piece bound by an open capture chain) and each one is
//! tried on a copy of the game. Whatever the rules engine accepts is legal,
//! so generation and `attempt_move` can never disagree.

use crate::game_state::checkers_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{JUMP_DIRECTIONS, STEP_DIRECTIONS};
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let candidates = candidate_moves(game_state);
        let mut legal = Vec::<GeneratedMove>::with_capacity(candidates.len());

        for mv in candidates {
            let mut next = game_state.clone();
            let Ok(applied) = apply_move(&mut next, mv) else {
                continue;
            };

            if next.board.total_piece_count() > game_state.board.total_piece_count() {
                return Err(MoveGenerationError::InvalidState(format!(
                    "{mv} increased the piece count"
                )));
            }

            legal.push(GeneratedMove {
                applied,
                game_after_move: next,
            });
        }

        Ok(legal)
    }
}

/// Every on-board step and jump target for the pieces that may move.
fn candidate_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move;
    let origins: Vec<Coord> = match game_state.pending_capture {
        Some(pending) => vec![pending],
        None => game_state.board.pieces_of(side).map(|(at, _)| at).collect(),
    };

    let mut out = Vec::<Move>::with_capacity(origins.len() * 8);
    for from in origins {
        for (d_row, d_col) in STEP_DIRECTIONS.into_iter().chain(JUMP_DIRECTIONS) {
            let to = from.offset(d_row, d_col);
            if to.is_on_board() {
                out.push(Move::new(from, to));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::LegalMoveGenerator;
    use crate::game_state::checkers_types::{Coord, Move, MoveKind};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::MoveGenerator;

    #[test]
    fn start_position_has_seven_steps() {
        let game = GameState::new_game();
        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");

        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| m.applied.kind == MoveKind::Simple));
        assert!(moves
            .iter()
            .any(|m| m.applied.mv == Move::from_coords(5, 0, 4, 1)));
    }

    #[test]
    fn only_captures_are_generated_when_one_exists() {
        let game = GameState::from_position("n7/8/8/4n3/3r4/r7/8/8 r")
            .expect("test position should parse");
        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].applied.mv, Move::from_coords(4, 3, 2, 5));
        assert_eq!(moves[0].applied.captured, Some(Coord::new(3, 4)));
    }

    #[test]
    fn open_chain_restricts_generation_to_the_bound_piece() {
        let mut game = GameState::from_position("7n/8/3n4/6n1/1n5r/r7/8/8 r")
            .expect("test position should parse");
        game.attempt_move(5, 0, 3, 2)
            .expect("first jump should be legal");

        let moves = game.legal_moves().expect("generation should succeed");
        assert_eq!(moves, vec![Move::from_coords(3, 2, 1, 4)]);
    }

    #[test]
    fn immobilized_side_has_no_moves() {
        let game = GameState::from_position("3n4/n1n5/1r6/8/8/8/8/8 r")
            .expect("test position should parse");
        assert!(game.legal_moves().expect("generation should succeed").is_empty());
    }
}
