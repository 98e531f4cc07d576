//! The rules engine for one game.
//!
//! `GameState` exclusively owns the `Board`, the side to move and the
//! pending chain-capture obligation. Every mutation goes through
//! `attempt_move`, which is gated by the legality checks, so no sequence of
//! calls can leave the state inconsistent.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::checkers_types::*;
use crate::game_state::game_outcome::{evaluate_outcome, GameResult};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{has_any_legal_action, has_further_capture};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::utils::position_generator::generate_position;
use crate::utils::position_parser::{parse_position, PositionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Player,
    /// Square of the piece that must keep capturing, if a chain is open.
    pub(crate) pending_capture: Option<Coord>,
    pub(crate) rules: RulesConfig,
    pub(crate) ply: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard setup, Red to move, default rules.
    #[inline]
    pub fn new_game() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    #[inline]
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self::from_parts(Board::new_game(), Player::Red, rules)
    }

    #[inline]
    pub fn from_parts(board: Board, side_to_move: Player, rules: RulesConfig) -> Self {
        Self {
            board,
            side_to_move,
            pending_capture: None,
            rules,
            ply: 0,
        }
    }

    #[inline]
    pub fn from_position(position: &str) -> Result<Self, PositionError> {
        parse_position(position)
    }

    #[inline]
    pub fn get_position(&self) -> String {
        generate_position(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[inline]
    pub fn pending_capture(&self) -> Option<Coord> {
        self.pending_capture
    }

    #[inline]
    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    /// Replaces the rule variant; the position is kept. An open chain whose
    /// piece has no capture left under the new rules ends, and the turn passes.
    pub fn set_rules(&mut self, rules: RulesConfig) {
        self.rules = rules;

        let Some(at) = self.pending_capture else {
            return;
        };
        let can_continue = self
            .board
            .piece_on(at)
            .is_some_and(|piece| has_further_capture(&self.board, &self.rules, at, piece));
        if !can_continue {
            debug!("chain at {} closed by rule change", at);
            self.pending_capture = None;
            self.side_to_move = self.side_to_move.opposite();
        }
    }

    /// Half-moves accepted so far.
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Tries `(from_row, from_col) -> (to_row, to_col)` for the side to move.
    #[inline]
    pub fn attempt_move(
        &mut self,
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
    ) -> Result<AppliedMove, MoveRejection> {
        apply_move(self, Move::from_coords(from_row, from_col, to_row, to_col))
    }

    #[inline]
    pub fn play(&mut self, mv: Move) -> Result<AppliedMove, MoveRejection> {
        apply_move(self, mv)
    }

    /// Whether `player`, if it were to move, could act with the piece on `at`.
    #[inline]
    pub fn has_any_legal_action(&self, player: Player, at: Coord) -> bool {
        has_any_legal_action(&self.board, &self.rules, player, at)
    }

    /// Every half-move the side to move could play now.
    pub fn legal_moves(&self) -> MoveGenResult<Vec<Move>> {
        let generated = LegalMoveGenerator.generate_legal_moves(self)?;
        Ok(generated.into_iter().map(|generated| generated.applied.mv).collect())
    }

    #[inline]
    pub fn outcome(&self) -> GameResult {
        evaluate_outcome(&self.board, &self.rules)
    }
}
