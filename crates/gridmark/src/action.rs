//! Result of a move attempt.

use super::Player;
use serde::{Deserialize, Serialize};

/// What happened when a mark was offered to the grid.
///
/// A rejected move (occupied square) is not an error: the grid is left
/// untouched and the caller simply waits for the next input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether the mark was placed.
    pub accepted: bool,
    /// The mark that was placed, if any.
    pub new_mark: Option<Player>,
    /// Whose turn it is after this attempt.
    pub new_turn: Player,
}

impl MoveResult {
    /// A move that placed `mark`, handing the turn to `next`.
    pub fn placed(mark: Player, next: Player) -> Self {
        Self {
            accepted: true,
            new_mark: Some(mark),
            new_turn: next,
        }
    }

    /// A move that was refused; `turn` is unchanged.
    pub fn rejected(turn: Player) -> Self {
        Self {
            accepted: false,
            new_mark: None,
            new_turn: turn,
        }
    }

    /// Returns true if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.new_mark {
            Some(mark) => write!(f, "{} placed, {} to move", mark, self.new_turn),
            None => write!(f, "rejected, {} to move", self.new_turn),
        }
    }
}
