use log::{debug, error, trace};

use crate::game_state::board::BoardError;
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{
    any_capture_available, classify_move, has_further_capture,
};

/// Validates `mv` for the side to move and, if legal, applies it in place.
///
/// Checks run in a fixed order (ownership, destination, mandatory capture,
/// shape) and the first failing one is reported. A rejected move leaves the
/// game untouched.
pub fn apply_move(game_state: &mut GameState, mv: Move) -> Result<AppliedMove, MoveRejection> {
    let result = validate_move(game_state, mv).and_then(|(piece, kind)| execute(game_state, mv, piece, kind));

    match &result {
        Ok(applied) => debug!(
            "{} played {} ({:?}{}{})",
            applied.player,
            applied.mv,
            applied.kind,
            if applied.promoted { ", promoted" } else { "" },
            if applied.must_continue_capturing {
                ", must continue capturing"
            } else {
                ""
            }
        ),
        Err(rejection) => trace!("{} rejected for {}: {}", mv, game_state.side_to_move, rejection),
    }

    result
}

fn validate_move(game_state: &GameState, mv: Move) -> Result<(Piece, MoveKind), MoveRejection> {
    let board = &game_state.board;
    let rules = &game_state.rules;
    let side = game_state.side_to_move;

    let piece = board
        .piece_on(mv.from)
        .filter(|piece| piece.owner == side)
        .ok_or(MoveRejection::NotYourPiece)?;

    if !board.is_empty_cell(mv.to) {
        return Err(MoveRejection::DestinationOccupied);
    }

    let kind = classify_move(board, rules, mv, piece);

    let capture_required = match game_state.pending_capture {
        Some(pending) => {
            if pending != mv.from {
                return Err(MoveRejection::CaptureMandatory);
            }
            true
        }
        None => any_capture_available(board, rules, side),
    };

    if capture_required && kind != Some(MoveKind::Capture) {
        return Err(MoveRejection::CaptureMandatory);
    }

    kind.map(|kind| (piece, kind)).ok_or(MoveRejection::ShapeInvalid)
}

fn execute(
    game_state: &mut GameState,
    mv: Move,
    piece: Piece,
    kind: MoveKind,
) -> Result<AppliedMove, MoveRejection> {
    let side = game_state.side_to_move;

    // Relocate first so a board failure leaves the game untouched.
    let promoted = game_state.board.move_piece(mv.from, mv.to).map_err(|err| {
        error!("validated move {} failed on the board: {}", mv, err);
        rejection_for_board_error(err, mv)
    })?;

    let captured = match kind {
        MoveKind::Capture => {
            let jumped = mv.midpoint();
            game_state.board.remove_piece(jumped.row, jumped.col);
            Some(jumped)
        }
        MoveKind::Simple => None,
    };

    let must_continue_capturing = kind == MoveKind::Capture && {
        let landed = Piece {
            is_king: piece.is_king || promoted,
            ..piece
        };
        has_further_capture(&game_state.board, &game_state.rules, mv.to, landed)
    };

    if must_continue_capturing {
        game_state.pending_capture = Some(mv.to);
    } else {
        game_state.pending_capture = None;
        game_state.side_to_move = side.opposite();
    }
    game_state.ply = game_state.ply.saturating_add(1);

    Ok(AppliedMove {
        mv,
        player: side,
        kind,
        captured,
        promoted,
        must_continue_capturing,
    })
}

fn rejection_for_board_error(err: BoardError, mv: Move) -> MoveRejection {
    match err {
        BoardError::OffBoard(at) if at == mv.to => MoveRejection::DestinationOccupied,
        BoardError::OffBoard(_) | BoardError::EmptySquare(_) => MoveRejection::NotYourPiece,
    }
}
