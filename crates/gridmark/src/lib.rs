//! Gridmark - two-player tic-tac-toe on an NxN grid
//!
//! Pure game logic with no rendering or input handling. A presentation layer
//! maps clicks to cell indices, forwards them here and redraws from the
//! resulting state.
//!
//! # Architecture
//!
//! - **Grid**: cell marks and whose turn it is
//! - **Lines**: every row, column and diagonal, derived once from the size
//! - **Match**: an owned grid paired with its lines
//!
//! # Example
//!
//! ```
//! use gridmark::{Match, Outcome};
//!
//! # fn example() -> Result<(), gridmark::GridError> {
//! let mut game = Match::new(3)?;
//! for index in [0, 1, 3, 4, 6] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.evaluate(), Outcome::Player1Wins);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod grid;
mod lines;
mod types;

pub use action::MoveResult;
pub use error::{GridError, GridErrorKind};
pub use game::Match;
pub use grid::Grid;
pub use lines::{Line, LineKind, Lines};
pub use types::{Outcome, Player, Square};
