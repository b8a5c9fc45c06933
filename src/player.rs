use crate::{engine::Direction, grid::Grid};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next move given the current grid.
    fn select_move(&mut self, rng: &mut SmallRng, grid: &Grid) -> Direction;

    /// Inform the player that its last move changed nothing.
    fn handle_rejected_move(&mut self, _direction: Direction) {}
}
