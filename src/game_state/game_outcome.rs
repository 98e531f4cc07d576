//! Terminal-state detection.
//!
//! A player loses by attrition (no pieces left) or immobilization (pieces
//! left, none of which has a legal step or capture). Both losing at once is
//! a draw. The evaluation only reads the board.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::checkers_types::Player;
use crate::move_generation::legal_move_checks::is_immobilized;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameResult {
    #[default]
    InProgress,
    RedWins,
    BlackWins,
    Draw,
}

impl GameResult {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    #[inline]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameResult::RedWins => Some(Player::Red),
            GameResult::BlackWins => Some(Player::Black),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "game in progress"),
            GameResult::RedWins => write!(f, "Red wins"),
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Why a player has lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    Attrition,
    Immobilization,
}

pub fn loss_reason(board: &Board, rules: &RulesConfig, player: Player) -> Option<LossReason> {
    if board.piece_count(player) == 0 {
        Some(LossReason::Attrition)
    } else if is_immobilized(board, rules, player) {
        Some(LossReason::Immobilization)
    } else {
        None
    }
}

pub fn evaluate_outcome(board: &Board, rules: &RulesConfig) -> GameResult {
    let red_lost = loss_reason(board, rules, Player::Red).is_some();
    let black_lost = loss_reason(board, rules, Player::Black).is_some();

    match (red_lost, black_lost) {
        (true, true) => GameResult::Draw,
        (true, false) => GameResult::BlackWins,
        (false, true) => GameResult::RedWins,
        (false, false) => GameResult::InProgress,
    }
}
