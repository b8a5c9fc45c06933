//! Tile storage for the puzzle board.
//!
//! The grid owns an `N×N` matrix of cell values plus the bookkeeping the
//! rest of the game reads: live tile count and cumulative score. Movement
//! logic lives in [`crate::MoveEngine`]; this module only answers cell
//! queries and places spawned tiles.

use crate::common::GridError;
use crate::config::{FOUR_TILE_CHANCE, MIN_BOARD_SIZE};
use core::fmt;
use rand::Rng;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// An `N×N` grid of tile values, `N` fixed at construction.
///
/// `0` marks an empty cell; occupied cells hold powers of two starting at 2.
/// Accessors do not validate values beyond bounds, the engine and spawner
/// maintain the power-of-two invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
    tile_count: usize,
    score: u64,
}

impl Grid {
    /// Create an all-empty `size × size` grid.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < MIN_BOARD_SIZE {
            return Err(GridError::InvalidSize { size });
        }
        Ok(Grid {
            size,
            cells: vec![0; size * size],
            tile_count: 0,
            score: 0,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Sum of all merge gains since the game started.
    pub fn score(&self) -> u64 {
        self.score
    }

    pub(crate) fn add_score(&mut self, delta: u64) {
        self.score += delta;
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.size || col >= self.size {
            Err(GridError::OutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }

    /// Value at (row, col); `0` for an empty cell.
    pub fn value(&self, row: usize, col: usize) -> Result<u32, GridError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// True iff the cell at (row, col) is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.cells[self.index(row, col)?] == 0)
    }

    /// Write `value` at (row, col), keeping the tile count current.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        let old = self.cells[idx];
        if old == 0 && value != 0 {
            self.tile_count += 1;
        } else if old != 0 && value == 0 {
            self.tile_count -= 1;
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Empty the cell at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.set(row, col, 0)
    }

    /// Compare the raw values of two cell positions. Two empty cells compare
    /// equal here; merge eligibility additionally requires non-empty cells,
    /// which callers must guard.
    pub fn values_equal(
        &self,
        a: (usize, usize),
        b: (usize, usize),
    ) -> Result<bool, GridError> {
        Ok(self.value(a.0, a.1)? == self.value(b.0, b.1)?)
    }

    /// True iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.tile_count == self.size * self.size
    }

    /// Place a new tile (2 with p=0.9, 4 with p=0.1) on a uniformly random
    /// empty cell, chosen by rejection sampling. Returns the placement.
    pub fn spawn_random_tile<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(usize, usize, u32), GridError> {
        if self.is_full() {
            return Err(GridError::BoardFull);
        }
        let value = if rng.random_bool(FOUR_TILE_CHANCE) { 4 } else { 2 };
        let mut row = rng.random_range(0..self.size);
        let mut col = rng.random_range(0..self.size);
        while !self.is_empty(row, col)? {
            row = rng.random_range(0..self.size);
            col = rng.random_range(0..self.size);
        }
        self.set(row, col, value)?;
        Ok((row, col, value))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.cells[row * self.size + col];
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
