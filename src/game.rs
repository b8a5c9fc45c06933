use crate::{
    common::{GridError, MoveResult},
    config::STARTING_TILES,
    engine::{Direction, MoveEngine},
    grid::Grid,
};
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Lost,
}

/// One game session: the grid and the engine that moves it.
///
/// The session exclusively owns and mutates the grid; renderers only ever
/// get a shared reference.
pub struct GameSession {
    grid: Grid,
    engine: MoveEngine,
}

impl GameSession {
    /// Start a new game: an empty grid seeded with the starting tiles.
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        let mut grid = Grid::new(size)?;
        for _ in 0..STARTING_TILES {
            let (row, col, value) = grid.spawn_random_tile(rng)?;
            log::debug!("seeded {} at ({}, {})", value, row, col);
        }
        Ok(GameSession {
            grid,
            engine: MoveEngine::new(),
        })
    }

    /// Resume play on an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        GameSession {
            grid,
            engine: MoveEngine::new(),
        }
    }

    /// Immutable view of the grid for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cumulative score of this game.
    pub fn score(&self) -> u64 {
        self.grid.score()
    }

    /// Apply one move; iff it changed the grid, spawn one new tile.
    pub fn make_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        direction: Direction,
    ) -> Result<MoveResult, GridError> {
        let result = self.engine.apply_move(&mut self.grid, direction)?;
        if result.has_updated {
            let (row, col, value) = self.grid.spawn_random_tile(rng)?;
            log::debug!(
                "{:?}: +{} score, spawned {} at ({}, {})",
                direction,
                result.score_delta,
                value,
                row,
                col
            );
        }
        Ok(result)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> Result<GameStatus, GridError> {
        if self.engine.has_available_moves(&self.grid)? {
            Ok(GameStatus::InProgress)
        } else {
            Ok(GameStatus::Lost)
        }
    }
}
