//! Canonical rule constants and the rule-variant switches.
//!
//! This module stores the standard starting position in the crate's
//! position text format and the `RulesConfig` knobs a game is created with.

/// Standard starting position: Black on the dark squares of rows 0-2, Red on
/// rows 5-7, Red to move.
pub const STARTING_POSITION: &str = "1n1n1n1n/n1n1n1n1/1n1n1n1n/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1 r";

/// Number of rows each side fills at setup.
pub const SETUP_ROWS: i8 = 3;

/// Men per side at setup.
pub const PIECES_PER_SIDE: u32 = 12;

/// Rule variants that differ between checkers traditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    /// When set, men may only capture in their forward direction. Kings are
    /// never restricted.
    pub capture_requires_forward_direction: bool,
}

impl RulesConfig {
    #[inline]
    pub const fn forward_captures_only() -> Self {
        Self {
            capture_requires_forward_direction: true,
        }
    }
}
