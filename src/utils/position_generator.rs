use crate::game_state::{checkers_types::*, game_state::GameState};

pub fn generate_position(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = game_state.side_to_move().symbol();

    match game_state.pending_capture() {
        Some(pending) => format!("{} {} {},{}", board, side_to_move, pending.row, pending.col),
        None => format!("{} {}", board, side_to_move),
    }
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            if let Some(piece) = game_state.board().piece_at(row, col) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.display_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < BOARD_SIZE - 1 {
            out.push('/');
        }
    }

    out
}
