//! Terminal-oriented text board renderer.
//!
//! Column indices across the top, row index at the start of every line,
//! lowercase letters for men, uppercase for kings and `.` for empty cells.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::BOARD_SIZE;
use crate::game_state::game_state::GameState;

/// Render the board to a string, row 0 first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7");

    for row in 0..BOARD_SIZE {
        out.push('\n');
        out.push_str(&row.to_string());
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match board.piece_at(row, col) {
                Some(piece) => out.push(piece.display_char()),
                None => out.push('.'),
            }
            out.push(' ');
        }
    }

    out
}

/// Side-to-move line followed by the board.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = format!("Current player: {}", game_state.side_to_move().symbol().to_ascii_uppercase());
    if let Some(pending) = game_state.pending_capture() {
        out.push_str(&format!(" (must continue capturing from {pending})"));
    }
    out.push('\n');
    out.push_str(&render_board(game_state.board()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_renders_with_dots_and_lowercase_men() {
        let rendered = render_board(&Board::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0 . n . n . n . n ");
        assert_eq!(lines[4], "3 . . . . . . . . ");
        assert_eq!(lines[8], "7 r . r . r . r . ");
    }

    #[test]
    fn kings_render_uppercase() {
        let game = GameState::from_position("8/8/8/8/8/8/8/N5R1 n").expect("test position should parse");
        let rendered = render_game_state(&game);

        assert!(rendered.starts_with("Current player: N\n"));
        assert!(rendered.ends_with("7 N . . . . . R . "));
    }
}
