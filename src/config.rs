/// Side length of the standard board.
pub const DEFAULT_BOARD_SIZE: usize = 4;
/// Smallest board the engine supports.
pub const MIN_BOARD_SIZE: usize = 2;
/// Number of tiles seeded when a game starts.
pub const STARTING_TILES: usize = 2;
/// Probability that a spawned tile is a 4 instead of a 2.
pub const FOUR_TILE_CHANCE: f64 = 0.1;
