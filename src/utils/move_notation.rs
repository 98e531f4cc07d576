//! Coordinate move notation used by the interactive front-end.
//!
//! A move is four integers `from_row from_col to_row to_col`. Any mix of
//! whitespace, commas, `-`, `>` and parentheses separates them, so
//! `5 0 4 1`, `5,0 4,1` and `(5,0)->(4,1)` all read the same.

use crate::game_state::checkers_types::Move;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected four coordinates, found {0}")]
    WrongCount(usize),
    #[error("'{0}' is not a board coordinate")]
    InvalidNumber(String),
}

pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let tokens = tokenize(text);

    if tokens.len() != 4 {
        return Err(NotationError::WrongCount(tokens.len()));
    }

    let mut values = [0i8; 4];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token
            .parse::<i8>()
            .map_err(|_| NotationError::InvalidNumber(token.clone()))?;
    }

    Ok(Move::from_coords(values[0], values[1], values[2], values[3]))
}

/// `-` separates tokens unless it starts a number (`-1` stays an off-board row).
fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (idx, &ch) in chars.iter().enumerate() {
        let is_sign = ch == '-'
            && current.is_empty()
            && chars.get(idx + 1).is_some_and(|next| next.is_ascii_digit());
        let is_separator = ch.is_whitespace() || matches!(ch, ',' | '-' | '>' | '(' | ')');

        if is_sign || !is_separator {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

pub fn format_move(mv: Move) -> String {
    format!("{} {} {} {}", mv.from.row, mv.from.col, mv.to.row, mv.to.col)
}
