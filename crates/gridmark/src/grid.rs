//! Grid state: cell marks and turn order for one match.

use super::{GridError, GridErrorKind, MoveResult, Player, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// An NxN tic-tac-toe grid.
///
/// Cells are stored in row-major order, so the cell at `(row, col)` has
/// index `row * size + col`. The size is fixed at construction and a grid
/// lives for exactly one match; a rematch builds a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    squares: Vec<Square>,
    current_turn: Player,
}

impl Grid {
    /// Creates an empty grid of `size` x `size` cells with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`GridErrorKind::InvalidSize`] if `size` is zero or its
    /// square does not fit in `usize`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < 1 {
            return Err(GridError::new(GridErrorKind::InvalidSize(size)));
        }
        let cells = size
            .checked_mul(size)
            .ok_or_else(|| GridError::new(GridErrorKind::InvalidSize(size)))?;

        debug!(size, cells, "Created grid");
        Ok(Self {
            size,
            squares: vec![Square::Empty; cells],
            current_turn: Player::X,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Player whose mark the next accepted move places.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at `(row, col)`.
    pub fn get_rc(&self, row: usize, col: usize) -> Option<Square> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.get(row * self.size + col)
    }

    /// Checks if a square is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Indices of the cells that can still be marked.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Offers the current player's mark at `index`.
    ///
    /// An empty cell receives the mark and the turn passes to the opponent.
    /// An occupied cell leaves the grid untouched and reports a rejected
    /// move; this is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`GridErrorKind::OutOfRange`] if `index` is not below
    /// [`Grid::cell_count`].
    #[instrument(skip(self), fields(size = self.size, turn = %self.current_turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveResult, GridError> {
        let cells = self.squares.len();
        let square = self
            .squares
            .get_mut(index)
            .ok_or_else(|| GridError::new(GridErrorKind::OutOfRange { index, cells }))?;

        if *square != Square::Empty {
            debug!(index, occupant = ?square, "Rejected move on occupied square");
            return Ok(MoveResult::rejected(self.current_turn));
        }

        let player = self.current_turn;
        *square = Square::Occupied(player);
        self.current_turn = player.opponent();

        debug!(index, %player, next = %self.current_turn, "Move applied");
        Ok(MoveResult::placed(player, self.current_turn))
    }

    /// Formats the grid as a human-readable string.
    ///
    /// Empty cells show their 1-based position, padded so columns line up
    /// on grids with more than nine cells.
    pub fn display(&self) -> String {
        let width = self.cell_count().to_string().len();
        let separator = vec!["-".repeat(width); self.size].join("+");

        let mut result = String::new();
        for row in 0..self.size {
            if row > 0 {
                result.push('\n');
                result.push_str(&separator);
                result.push('\n');
            }
            for col in 0..self.size {
                let pos = row * self.size + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&format!("{symbol:>width$}"));
                if col + 1 < self.size {
                    result.push('|');
                }
            }
        }
        result
    }
}
