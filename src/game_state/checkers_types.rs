//! Core value types shared by the board, the rules engine and the tooling.
//!
//! Squares are addressed by `(row, col)` with row 0 at the top of the
//! rendered board. Internally a valid coordinate maps to a bit index
//! `row * 8 + col` used by the board's bitboards.

use std::fmt;

pub use crate::game_state::game_state::GameState;

/// Board edge length.
pub const BOARD_SIZE: i8 = 8;

/// Bit index of a valid board cell (`0..=63`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row delta of a forward step for a man of this player.
    #[inline]
    pub const fn forward_row_step(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// Row on which a man of this player is promoted.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Player::Red => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }

    /// Lowercase mnemonic used by the renderer and the position format.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Player::Red => 'r',
            Player::Black => 'n',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (owner is stored separately, mirroring the bitboard layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Man => 0,
            PieceKind::King => 1,
        }
    }
}

pub const ALL_PLAYERS: [Player; 2] = [Player::Red, Player::Black];
pub const ALL_PIECE_KINDS: [PieceKind; 2] = [PieceKind::Man, PieceKind::King];

/// A piece as seen by callers. Promotion is the only change a piece ever
/// undergoes; the owner is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub owner: Player,
    pub is_king: bool,
}

impl Piece {
    #[inline]
    pub const fn man(owner: Player) -> Self {
        Self {
            owner,
            is_king: false,
        }
    }

    #[inline]
    pub const fn king(owner: Player) -> Self {
        Self {
            owner,
            is_king: true,
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        if self.is_king {
            PieceKind::King
        } else {
            PieceKind::Man
        }
    }

    /// `r`/`n` for men, `R`/`N` for kings.
    #[inline]
    pub fn display_char(self) -> char {
        let symbol = self.owner.symbol();
        if self.is_king {
            symbol.to_ascii_uppercase()
        } else {
            symbol
        }
    }

    /// Whether a piece standing on `row` is due for promotion.
    #[inline]
    pub fn promotes_on(self, row: i8) -> bool {
        !self.is_king && row == self.owner.promotion_row()
    }
}

/// Board coordinate. May be off the board; validity is checked on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Bit index for on-board coordinates.
    #[inline]
    pub fn square(self) -> Option<Square> {
        if self.is_on_board() {
            Some((self.row * BOARD_SIZE + self.col) as Square)
        } else {
            None
        }
    }

    #[inline]
    pub fn from_square(square: Square) -> Self {
        let sq = square as i8;
        Self {
            row: sq / BOARD_SIZE,
            col: sq % BOARD_SIZE,
        }
    }

    /// Dark squares are the playable ones.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col).rem_euclid(2) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Transient move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    #[inline]
    pub const fn from_coords(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> Self {
        Self {
            from: Coord::new(from_row, from_col),
            to: Coord::new(to_row, to_col),
        }
    }

    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.to.row.saturating_sub(self.from.row)
    }

    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.to.col.saturating_sub(self.from.col)
    }

    /// Cell jumped over by a two-step diagonal move.
    #[inline]
    pub const fn midpoint(self) -> Coord {
        Coord {
            row: self.from.row + self.row_delta() / 2,
            col: self.from.col + self.col_delta() / 2,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Simple,
    Capture,
}

/// Flat outcome tag of a move attempt, for callers that render each case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    AcceptedMustContinueCapturing,
    RejectedNotYourPiece,
    RejectedDestinationOccupied,
    RejectedCaptureMandatory,
    RejectedShapeInvalid,
}

impl MoveOutcome {
    #[inline]
    pub const fn is_accepted(self) -> bool {
        matches!(
            self,
            MoveOutcome::Accepted | MoveOutcome::AcceptedMustContinueCapturing
        )
    }
}

/// Why a move was refused. Refusals never mutate the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("there is no piece of yours on the origin square")]
    NotYourPiece,
    #[error("the destination square is occupied or off the board")]
    DestinationOccupied,
    #[error("a capture is available and must be played")]
    CaptureMandatory,
    #[error("a piece moves one square diagonally forward or jumps an opposing piece")]
    ShapeInvalid,
}

impl MoveRejection {
    #[inline]
    pub const fn outcome(self) -> MoveOutcome {
        match self {
            MoveRejection::NotYourPiece => MoveOutcome::RejectedNotYourPiece,
            MoveRejection::DestinationOccupied => MoveOutcome::RejectedDestinationOccupied,
            MoveRejection::CaptureMandatory => MoveOutcome::RejectedCaptureMandatory,
            MoveRejection::ShapeInvalid => MoveOutcome::RejectedShapeInvalid,
        }
    }
}

/// Record of an accepted half-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub player: Player,
    pub kind: MoveKind,
    pub captured: Option<Coord>,
    pub promoted: bool,
    pub must_continue_capturing: bool,
}

impl AppliedMove {
    #[inline]
    pub const fn outcome(&self) -> MoveOutcome {
        if self.must_continue_capturing {
            MoveOutcome::AcceptedMustContinueCapturing
        } else {
            MoveOutcome::Accepted
        }
    }
}

/// Flattens an attempt result into its outcome tag.
#[inline]
pub fn move_outcome(result: &Result<AppliedMove, MoveRejection>) -> MoveOutcome {
    match result {
        Ok(applied) => applied.outcome(),
        Err(rejection) => rejection.outcome(),
    }
}
