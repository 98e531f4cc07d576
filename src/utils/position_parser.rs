//! Position-text to GameState parser.
//!
//! Format: eight `/`-separated rows (row 0 first) made of `r n R N` and
//! digit runs of empty cells, then the side to move (`r` or `n`), then an
//! optional pending chain-capture square written `row,col` (or `-`).

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::checkers_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::has_further_capture;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("missing {0} field in position")]
    MissingField(&'static str),
    #[error("position has extra trailing fields")]
    TrailingFields,
    #[error("board layout must contain 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {0} does not sum to 8 cells")]
    RowWidth(usize),
    #[error("invalid empty-cell count '{0}'")]
    InvalidEmptyCount(char),
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side-to-move field: {0}")]
    InvalidSide(String),
    #[error("invalid pending capture field: {0}")]
    InvalidPending(String),
}

pub fn parse_position(position: &str) -> Result<GameState, PositionError> {
    parse_position_with_rules(position, RulesConfig::default())
}

pub fn parse_position_with_rules(position: &str, rules: RulesConfig) -> Result<GameState, PositionError> {
    let mut parts = position.split_whitespace();

    let board_part = parts.next().ok_or(PositionError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(PositionError::MissingField("side-to-move"))?;
    let pending_part = parts.next();

    if parts.next().is_some() {
        return Err(PositionError::TrailingFields);
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    let mut game_state = GameState::from_parts(board, side_to_move, rules);
    game_state.pending_capture = match pending_part {
        Some(field) => parse_pending(field, &game_state)?,
        None => None,
    };

    Ok(game_state)
}

fn parse_board(board_part: &str) -> Result<Board, PositionError> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(PositionError::RowCount(rows.len()));
    }

    let mut board = Board::new_empty();
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(PositionError::InvalidEmptyCount(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_char(ch).ok_or(PositionError::InvalidPiece(ch))?;
            if col >= BOARD_SIZE as usize {
                return Err(PositionError::RowWidth(row));
            }

            board
                .place_piece(Coord::new(row as i8, col as i8), piece)
                .map_err(|_| PositionError::RowWidth(row))?;
            col += 1;
        }

        if col != BOARD_SIZE as usize {
            return Err(PositionError::RowWidth(row));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Player, PositionError> {
    match side_part {
        "r" => Ok(Player::Red),
        "n" => Ok(Player::Black),
        _ => Err(PositionError::InvalidSide(side_part.to_owned())),
    }
}

/// The pending square must hold a piece of the side to move that can still
/// capture under the position's rules.
fn parse_pending(field: &str, game_state: &GameState) -> Result<Option<Coord>, PositionError> {
    if field == "-" {
        return Ok(None);
    }

    let invalid = || PositionError::InvalidPending(field.to_owned());
    let (row, col) = field.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<i8>().map_err(|_| invalid())?;
    let col = col.trim().parse::<i8>().map_err(|_| invalid())?;

    let at = Coord::new(row, col);
    match game_state.board.piece_on(at) {
        Some(piece)
            if piece.owner == game_state.side_to_move
                && has_further_capture(&game_state.board, &game_state.rules, at, piece) =>
        {
            Ok(Some(at))
        }
        _ => Err(invalid()),
    }
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let owner = match ch.to_ascii_lowercase() {
        'r' => Player::Red,
        'n' => Player::Black,
        _ => return None,
    };

    if ch.is_ascii_uppercase() {
        Some(Piece::king(owner))
    } else {
        Some(Piece::man(owner))
    }
}
