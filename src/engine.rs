//! The move engine: directional slide-and-merge sweeps over a [`Grid`].
//!
//! A move processes tiles starting from the edge opposite the direction of
//! travel, so every tile ahead of the current one has already reached its
//! resting place. Each tile slides through empty cells, then merges at most
//! once into an equal blocking neighbour. The merged-mask is transient per
//! move and is what enforces the single-merge rule.

use crate::common::{GridError, MoveResult};
use crate::grid::Grid;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

/// A direction to slide the board in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector (row delta, column delta) of the travel direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Accepts `up`/`down`/`left`/`right` and `w`/`s`/`a`/`d`, case
    /// insensitive. Anything else is an invalid move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("up") || s.eq_ignore_ascii_case("w") {
            Ok(Direction::Up)
        } else if s.eq_ignore_ascii_case("down") || s.eq_ignore_ascii_case("s") {
            Ok(Direction::Down)
        } else if s.eq_ignore_ascii_case("left") || s.eq_ignore_ascii_case("a") {
            Ok(Direction::Left)
        } else if s.eq_ignore_ascii_case("right") || s.eq_ignore_ascii_case("d") {
            Ok(Direction::Right)
        } else {
            Err(GridError::InvalidDirection)
        }
    }
}

/// Applies moves to a [`Grid`], enforcing at-most-one-merge-per-tile-per-move.
pub struct MoveEngine {
    // Per-cell merge mask, valid for the current move only.
    merged: Vec<bool>,
}

impl MoveEngine {
    pub fn new() -> Self {
        MoveEngine { merged: Vec::new() }
    }

    /// Parse a raw input string and apply the move. Invalid input returns
    /// `InvalidDirection` and leaves the grid untouched.
    pub fn apply_input(
        &mut self,
        grid: &mut Grid,
        input: &str,
    ) -> Result<MoveResult, GridError> {
        let direction = input.parse::<Direction>()?;
        self.apply_move(grid, direction)
    }

    /// Slide and merge every tile in `direction`, returning whether the grid
    /// changed and the score gained. Merge gains are also added to the grid's
    /// cumulative score.
    pub fn apply_move(
        &mut self,
        grid: &mut Grid,
        direction: Direction,
    ) -> Result<MoveResult, GridError> {
        let size = grid.size();
        self.merged.clear();
        self.merged.resize(size * size, false);

        let (dr, dc) = direction.delta();
        // Sweep from the edge opposite the direction of travel: tiles closer
        // to the target edge settle before the tiles behind them move.
        let majors: Box<dyn Iterator<Item = usize>> = match direction {
            Direction::Up | Direction::Left => Box::new(1..size),
            Direction::Down | Direction::Right => Box::new((0..size - 1).rev()),
        };

        let mut result = MoveResult::UNCHANGED;
        for major in majors {
            for minor in 0..size {
                let (row, col) = match direction {
                    Direction::Up | Direction::Down => (major, minor),
                    Direction::Left | Direction::Right => (minor, major),
                };
                let (moved, gained) = self.move_tile(grid, row, col, dr, dc)?;
                result.has_updated |= moved;
                result.score_delta += gained;
            }
        }
        if result.score_delta > 0 {
            grid.add_score(result.score_delta);
        }
        Ok(result)
    }

    /// Slide the tile at (row, col) through empty cells along (dr, dc), then
    /// try to merge it into the neighbour that stopped it.
    fn move_tile(
        &mut self,
        grid: &mut Grid,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Result<(bool, u64), GridError> {
        if grid.is_empty(row, col)? {
            return Ok((false, 0));
        }
        let size = grid.size();
        let mut pos = (row, col);
        let mut moved = false;
        loop {
            let Some(next) = offset(pos, dr, dc, size) else {
                // Reached the grid edge.
                break;
            };
            if grid.is_empty(next.0, next.1)? {
                let value = grid.value(pos.0, pos.1)?;
                grid.set(next.0, next.1, value)?;
                grid.clear(pos.0, pos.1)?;
                moved = true;
                pos = next;
                continue;
            }
            // Blocked by a tile: merge once per move into an equal neighbour.
            // A merge counts as movement even when no slide preceded it.
            let next_idx = next.0 * size + next.1;
            if grid.values_equal(pos, next)? && !self.merged[next_idx] {
                let doubled = grid.value(next.0, next.1)? * 2;
                grid.set(next.0, next.1, doubled)?;
                grid.clear(pos.0, pos.1)?;
                self.merged[next_idx] = true;
                return Ok((true, u64::from(doubled)));
            }
            break;
        }
        Ok((moved, 0))
    }

    /// True while any move can still change the grid. Fast path: a grid with
    /// an empty cell always permits a slide. On a full grid, scan each cell's
    /// right and bottom neighbour once for an equal pair.
    pub fn has_available_moves(&self, grid: &Grid) -> Result<bool, GridError> {
        if !grid.is_full() {
            return Ok(true);
        }
        let size = grid.size();
        for row in 0..size {
            for col in 0..size {
                if col + 1 < size && grid.values_equal((row, col), (row, col + 1))? {
                    return Ok(true);
                }
                if row + 1 < size && grid.values_equal((row, col), (row + 1, col))? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Step one cell from `pos` along (dr, dc); `None` past the grid edge.
fn offset(
    pos: (usize, usize),
    dr: isize,
    dc: isize,
    size: usize,
) -> Option<(usize, usize)> {
    let row = pos.0 as isize + dr;
    let col = pos.1 as isize + dc;
    if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
        None
    } else {
        Some((row as usize, col as usize))
    }
}
