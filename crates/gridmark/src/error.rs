//! Grid error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong with a grid operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GridErrorKind {
    /// Grid size below 1.
    #[display("grid size must be at least 1, got {}", _0)]
    InvalidSize(usize),

    /// Cell index outside `0..cells`. Callers must only pass indices of
    /// existing cells, so this points at an integration bug.
    #[display("cell index {} is outside the grid (0..{})", index, cells)]
    OutOfRange {
        /// The index that was supplied.
        index: usize,
        /// Number of cells on the grid.
        cells: usize,
    },
}

/// Grid error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Grid error: {} at {}:{}", kind, file, line)]
pub struct GridError {
    /// Error kind.
    pub kind: GridErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GridError {
    /// Creates a new grid error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GridErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GridErrorKind> for GridError {
    #[track_caller]
    fn from(kind: GridErrorKind) -> Self {
        Self::new(kind)
    }
}
