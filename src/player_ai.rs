use crate::{engine::Direction, grid::Grid, player::Player};
use rand::{rngs::SmallRng, Rng};

/// Player that picks uniformly random directions. Drives the `auto`
/// command and soak tests; no-op picks are simply rejected by the driver
/// and a new direction is drawn next turn.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, _grid: &Grid) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}
