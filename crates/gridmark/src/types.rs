//! Core domain types for NxN tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (player one, goes first).
    #[display("X")]
    X,
    /// Player O (player two).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player. Never erased once set.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Match status, derived from the grid on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// No line is held by either player.
    #[display("In progress")]
    InProgress,
    /// Player X holds a full line.
    #[display("Player X wins")]
    Player1Wins,
    /// Player O holds a full line.
    #[display("Player O wins")]
    Player2Wins,
}

impl Outcome {
    /// The outcome in which `player` has won.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Outcome::Player1Wins,
            Player::O => Outcome::Player2Wins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::InProgress => None,
            Outcome::Player1Wins => Some(Player::X),
            Outcome::Player2Wins => Some(Player::O),
        }
    }

    /// Returns true once somebody has won.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_an_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_outcome_winner_matches_won_by() {
        for player in Player::iter() {
            let outcome = Outcome::won_by(player);
            assert!(outcome.is_over());
            assert_eq!(outcome.winner(), Some(player));
        }
        assert_eq!(Outcome::InProgress.winner(), None);
        assert!(!Outcome::InProgress.is_over());
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Outcome::Player2Wins.to_string(), "Player O wins");
    }
}
