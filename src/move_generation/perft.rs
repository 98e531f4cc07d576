use std::sync::Arc;
use std::thread;

use crate::game_state::checkers_types::MoveKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};

/// Leaf statistics of a perft run. Depth counts half-moves, so each jump of
/// a chain capture is its own ply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub chain_continuations: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.chain_continuations += rhs.chain_continuations;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut total = PerftCounts::default();

    for mv in root_moves {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Same counts as `perft`, with one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| MoveGenerationError::InvalidState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.applied.kind == MoveKind::Capture {
            counts.captures += 1;
        }
        if mv.applied.promoted {
            counts.promotions += 1;
        }
        if mv.applied.must_continue_capturing {
            counts.chain_continuations += 1;
        }

        return Ok(());
    }

    let moves = generator.generate_legal_moves(&mv.game_after_move)?;
    for child in moves {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();

        let counts = perft(&LegalMoveGenerator, &game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_from_start_matches_known_node_counts() {
        let game = GameState::new_game();

        let one = perft(&LegalMoveGenerator, &game, 1).expect("perft should run");
        let two = perft(&LegalMoveGenerator, &game, 2).expect("perft should run");

        assert_eq!(one.nodes, 7);
        assert_eq!(two.nodes, 49);
        assert_eq!(two.captures, 0);
    }

    #[test]
    fn perft_counts_chain_continuations_and_captures() {
        let game = GameState::from_position("7n/8/3n4/8/1n6/r7/8/8 r")
            .expect("test position should parse");

        let counts = perft(&LegalMoveGenerator, &game, 1).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                captures: 1,
                promotions: 0,
                chain_continuations: 1,
            }
        );
    }

    #[test]
    fn multi_threaded_perft_matches_single_threaded() {
        let game = GameState::new_game();

        let single = perft(&LegalMoveGenerator, &game, 3).expect("perft should run");
        let multi = perft_multi_threaded(Arc::new(LegalMoveGenerator), &game, 3)
            .expect("threaded perft should run");

        assert_eq!(single, multi);
    }
}
