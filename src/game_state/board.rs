//! Mechanical 8x8 piece storage.
//!
//! `Board` keeps one bitboard per player and piece kind plus occupancy
//! caches. It validates coordinates and executes raw placement, removal and
//! relocation (with promotion on arrival); it knows nothing about legality.

use crate::game_state::checkers_rules::SETUP_ROWS;
use crate::game_state::checkers_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate {0} is off the board")]
    OffBoard(Coord),
    #[error("no piece on {0}")]
    EmptySquare(Coord),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    // [player][piece_kind]
    pieces: [[u64; 2]; 2],

    // Occupancy caches.
    occupancy_by_player: [u64; 2],
    occupancy_all: u64,
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard setup: men on the dark squares of the first and last three rows.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for row in 0..BOARD_SIZE {
            let owner = if row < SETUP_ROWS {
                Player::Black
            } else if row >= BOARD_SIZE - SETUP_ROWS {
                Player::Red
            } else {
                continue;
            };
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                if coord.is_dark() {
                    board.set(coord, Piece::man(owner));
                }
            }
        }
        board
    }

    #[inline]
    pub fn is_valid(&self, row: i8, col: i8) -> bool {
        Coord::new(row, col).is_on_board()
    }

    /// Piece on `(row, col)`, or `None` when empty or off the board.
    #[inline]
    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        self.piece_on(Coord::new(row, col))
    }

    pub fn piece_on(&self, coord: Coord) -> Option<Piece> {
        let mask = 1u64 << coord.square()?;
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for player in ALL_PLAYERS {
            for kind in ALL_PIECE_KINDS {
                if self.pieces[player.index()][kind.index()] & mask != 0 {
                    return Some(Piece {
                        owner: player,
                        is_king: kind == PieceKind::King,
                    });
                }
            }
        }
        None
    }

    #[inline]
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        match coord.square() {
            Some(sq) => self.occupancy_all & (1u64 << sq) == 0,
            None => false,
        }
    }

    /// Relocates the piece on `from` to `to`, overwriting `to` and promoting a
    /// man that lands on its far rank. Returns whether a promotion happened.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<bool, BoardError> {
        if !from.is_on_board() {
            return Err(BoardError::OffBoard(from));
        }
        if !to.is_on_board() {
            return Err(BoardError::OffBoard(to));
        }
        let mut piece = self.piece_on(from).ok_or(BoardError::EmptySquare(from))?;

        self.clear(from);
        self.clear(to);

        let promoted = piece.promotes_on(to.row);
        if promoted {
            piece.is_king = true;
        }
        self.set(to, piece);

        Ok(promoted)
    }

    /// Clears `(row, col)`. Empty or off-board cells are left alone.
    #[inline]
    pub fn remove_piece(&mut self, row: i8, col: i8) {
        let coord = Coord::new(row, col);
        if coord.is_on_board() {
            self.clear(coord);
        }
    }

    /// Puts `piece` on `coord`, replacing any occupant. Used for setup.
    pub fn place_piece(&mut self, coord: Coord, piece: Piece) -> Result<(), BoardError> {
        if !coord.is_on_board() {
            return Err(BoardError::OffBoard(coord));
        }
        self.clear(coord);
        self.set(coord, piece);
        Ok(())
    }

    #[inline]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.occupancy_by_player[player.index()].count_ones()
    }

    #[inline]
    pub fn total_piece_count(&self) -> u32 {
        self.occupancy_all.count_ones()
    }

    #[inline]
    pub fn occupancy(&self, player: Player) -> u64 {
        self.occupancy_by_player[player.index()]
    }

    /// Pieces of `player` in ascending square order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        let kings = self.pieces[player.index()][PieceKind::King.index()];
        BitIter(self.occupancy_by_player[player.index()]).map(move |sq| {
            let piece = Piece {
                owner: player,
                is_king: kings & (1u64 << sq) != 0,
            };
            (Coord::from_square(sq), piece)
        })
    }

    fn set(&mut self, coord: Coord, piece: Piece) {
        let Some(sq) = coord.square() else {
            return;
        };
        let mask = 1u64 << sq;
        self.pieces[piece.owner.index()][piece.kind().index()] |= mask;
        self.occupancy_by_player[piece.owner.index()] |= mask;
        self.occupancy_all |= mask;
    }

    fn clear(&mut self, coord: Coord) {
        let Some(sq) = coord.square() else {
            return;
        };
        let mask = !(1u64 << sq);
        for player in ALL_PLAYERS {
            for kind in ALL_PIECE_KINDS {
                self.pieces[player.index()][kind.index()] &= mask;
            }
            self.occupancy_by_player[player.index()] &= mask;
        }
        self.occupancy_all &= mask;
    }
}

/// Iterates the set bits of a bitboard, lowest first.
struct BitIter(u64);

impl Iterator for BitIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let sq = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(sq)
    }
}
