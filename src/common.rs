//! Common types for the puzzle: grid errors and move results.

/// Outcome of a single directional move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// True if at least one tile slid or merged. When false the grid is
    /// untouched and the driver must not spawn a new tile.
    pub has_updated: bool,
    /// Sum of the values produced by this move's merges.
    pub score_delta: u64,
}

impl MoveResult {
    pub(crate) const UNCHANGED: MoveResult = MoveResult {
        has_updated: false,
        score_delta: 0,
    };
}

/// Errors returned by grid and engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index outside [0..size). Programming error in the
    /// caller; never clamped.
    OutOfBounds { row: usize, col: usize },
    /// Move input is not one of up/down/left/right. No state is mutated.
    InvalidDirection,
    /// Attempted to spawn a tile on a grid with no empty cell.
    BoardFull,
    /// Requested board size is below the supported minimum.
    InvalidSize { size: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
            GridError::InvalidDirection => write!(f, "Invalid move choice"),
            GridError::BoardFull => write!(f, "No empty cell left to place a tile"),
            GridError::InvalidSize { size } => {
                write!(f, "InvalidSize: {} is below the minimum board size", size)
            }
        }
    }
}
