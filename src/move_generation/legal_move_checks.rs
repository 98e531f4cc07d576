//! Side-effect-free move legality predicates.
//!
//! Every function here reads a `Board` and a `RulesConfig` and takes the
//! acting piece or player explicitly, so probing mobility never touches the
//! side-to-move state of a game.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::checkers_types::*;

/// Diagonal unit offsets.
pub const STEP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Diagonal jump offsets.
pub const JUMP_DIRECTIONS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// One diagonal step onto an empty cell, forward only for men.
pub fn is_simple_step(board: &Board, mv: Move, piece: Piece) -> bool {
    let d_row = mv.row_delta();
    let d_col = mv.col_delta();

    if d_row.unsigned_abs() != 1 || d_col.unsigned_abs() != 1 {
        return false;
    }
    if !piece.is_king && d_row != piece.owner.forward_row_step() {
        return false;
    }

    board.is_empty_cell(mv.to)
}

/// Two diagonal steps over an opposing piece onto an empty cell.
pub fn is_capture(board: &Board, rules: &RulesConfig, mv: Move, piece: Piece) -> bool {
    let d_row = mv.row_delta();
    let d_col = mv.col_delta();

    if d_row.unsigned_abs() != 2 || d_col.unsigned_abs() != 2 {
        return false;
    }
    if rules.capture_requires_forward_direction
        && !piece.is_king
        && d_row != 2 * piece.owner.forward_row_step()
    {
        return false;
    }

    match board.piece_on(mv.midpoint()) {
        Some(jumped) if jumped.owner != piece.owner => board.is_empty_cell(mv.to),
        _ => false,
    }
}

/// Classifies a move of `piece`, or `None` if neither shape applies.
pub fn classify_move(board: &Board, rules: &RulesConfig, mv: Move, piece: Piece) -> Option<MoveKind> {
    if is_simple_step(board, mv, piece) {
        Some(MoveKind::Simple)
    } else if is_capture(board, rules, mv, piece) {
        Some(MoveKind::Capture)
    } else {
        None
    }
}

/// Whether `piece` standing on `at` can jump in any of the four directions.
pub fn has_further_capture(board: &Board, rules: &RulesConfig, at: Coord, piece: Piece) -> bool {
    JUMP_DIRECTIONS.iter().any(|&(d_row, d_col)| {
        is_capture(board, rules, Move::new(at, at.offset(d_row, d_col)), piece)
    })
}

/// Whole-board scan: does any piece of `player` have a capture?
pub fn any_capture_available(board: &Board, rules: &RulesConfig, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|(at, piece)| has_further_capture(board, rules, at, piece))
}

/// Pieces of `player` that currently have a capture.
pub fn capturing_pieces(board: &Board, rules: &RulesConfig, player: Player) -> Vec<Coord> {
    board
        .pieces_of(player)
        .filter(|&(at, piece)| has_further_capture(board, rules, at, piece))
        .map(|(at, _)| at)
        .collect()
}

/// Whether the piece of `player` on `at` has any legal step or capture.
/// Returns false when `at` does not hold a piece of `player`.
pub fn has_any_legal_action(board: &Board, rules: &RulesConfig, player: Player, at: Coord) -> bool {
    let Some(piece) = board.piece_on(at) else {
        return false;
    };
    if piece.owner != player {
        return false;
    }

    let can_step = STEP_DIRECTIONS.iter().any(|&(d_row, d_col)| {
        is_simple_step(board, Move::new(at, at.offset(d_row, d_col)), piece)
    });

    can_step || has_further_capture(board, rules, at, piece)
}

/// A player with pieces none of which can act.
pub fn is_immobilized(board: &Board, rules: &RulesConfig, player: Player) -> bool {
    board.piece_count(player) > 0
        && !board
            .pieces_of(player)
            .any(|(at, _)| has_any_legal_action(board, rules, player, at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::position_parser::parse_position;

    fn board_of(position: &str) -> Board {
        parse_position(position)
            .expect("test position should parse")
            .board()
            .clone()
    }

    #[test]
    fn men_step_forward_only_kings_both_ways() {
        let board = board_of("8/8/8/3r4/8/8/8/8 r");
        let red_man = Piece::man(Player::Red);
        let red_king = Piece::king(Player::Red);

        assert!(is_simple_step(&board, Move::from_coords(3, 3, 2, 4), red_man));
        assert!(!is_simple_step(&board, Move::from_coords(3, 3, 4, 4), red_man));
        assert!(is_simple_step(&board, Move::from_coords(3, 3, 4, 4), red_king));
        assert!(!is_simple_step(&board, Move::from_coords(3, 3, 1, 5), red_king));
    }

    #[test]
    fn capture_needs_opposing_midpoint_and_empty_landing() {
        let board = board_of("8/8/5n2/4n3/3r4/8/8/8 r");
        let red_man = Piece::man(Player::Red);
        let rules = RulesConfig::default();

        // (3,4) is Black but (2,5) is taken.
        assert!(!is_capture(&board, &rules, Move::from_coords(4, 3, 2, 5), red_man));
        // Nothing to jump toward (2,1).
        assert!(!is_capture(&board, &rules, Move::from_coords(4, 3, 2, 1), red_man));

        let board = board_of("8/8/8/4n3/3r4/8/8/8 r");
        assert!(is_capture(&board, &rules, Move::from_coords(4, 3, 2, 5), red_man));
        assert_eq!(
            classify_move(&board, &rules, Move::from_coords(4, 3, 2, 5), red_man),
            Some(MoveKind::Capture)
        );
    }

    #[test]
    fn own_pieces_cannot_be_jumped() {
        let board = board_of("8/8/8/4r3/3r4/8/8/8 r");
        let rules = RulesConfig::default();
        assert!(!is_capture(
            &board,
            &rules,
            Move::from_coords(4, 3, 2, 5),
            Piece::man(Player::Red)
        ));
    }

    #[test]
    fn backward_capture_by_man_depends_on_rule_variant() {
        let board = board_of("8/8/8/3r4/4n3/8/8/8 r");
        let backward = Move::from_coords(3, 3, 5, 5);
        let red_man = Piece::man(Player::Red);

        assert!(is_capture(&board, &RulesConfig::default(), backward, red_man));
        assert!(!is_capture(
            &board,
            &RulesConfig::forward_captures_only(),
            backward,
            red_man
        ));
        assert!(is_capture(
            &board,
            &RulesConfig::forward_captures_only(),
            backward,
            Piece::king(Player::Red)
        ));
    }

    #[test]
    fn whole_board_scan_finds_any_capturing_piece() {
        let board = board_of("8/8/8/4n3/3r4/r7/8/8 r");
        let rules = RulesConfig::default();

        assert!(any_capture_available(&board, &rules, Player::Red));
        assert_eq!(capturing_pieces(&board, &rules, Player::Red), vec![Coord::new(4, 3)]);
        // Black's (3,4) can jump (4,3) into (5,2).
        assert!(any_capture_available(&board, &rules, Player::Black));
    }

    #[test]
    fn boxed_in_man_has_no_legal_action() {
        let board = board_of("3n4/n1n5/1r6/8/8/8/8/8 r");
        let rules = RulesConfig::default();

        assert!(!has_any_legal_action(&board, &rules, Player::Red, Coord::new(2, 1)));
        assert!(is_immobilized(&board, &rules, Player::Red));
        assert!(!is_immobilized(&board, &rules, Player::Black));
        // Wrong owner or empty cell.
        assert!(!has_any_legal_action(&board, &rules, Player::Black, Coord::new(2, 1)));
        assert!(!has_any_legal_action(&board, &rules, Player::Red, Coord::new(4, 4)));
    }

    #[test]
    fn player_without_pieces_is_not_immobilized() {
        let board = board_of("8/8/8/8/8/8/8/r7 r");
        assert!(!is_immobilized(&board, &RulesConfig::default(), Player::Black));
    }
}
