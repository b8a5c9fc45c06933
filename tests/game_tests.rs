use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use twenty48::{
    Direction, GameSession, GameStatus, Grid, Player, RandomPlayer, STARTING_TILES,
};

#[test]
fn test_new_session_seeds_starting_tiles() {
    let mut rng = SmallRng::seed_from_u64(42);
    let session = GameSession::new(4, &mut rng).unwrap();
    assert_eq!(session.grid().tile_count(), STARTING_TILES);
    assert_eq!(session.score(), 0);
    assert_eq!(session.status().unwrap(), GameStatus::InProgress);
    for row in 0..4 {
        for col in 0..4 {
            let value = session.grid().value(row, col).unwrap();
            assert!(value == 0 || value == 2 || value == 4);
        }
    }
}

#[test]
fn test_changing_move_spawns_one_tile() {
    // two tiles far apart: sliding left moves at least one, no merge
    let mut grid = Grid::new(4).unwrap();
    grid.set(0, 3, 2).unwrap();
    grid.set(2, 1, 4).unwrap();
    let mut session = GameSession::from_grid(grid);
    let mut rng = SmallRng::seed_from_u64(1);
    let result = session.make_move(&mut rng, Direction::Left).unwrap();
    assert!(result.has_updated);
    assert_eq!(session.grid().tile_count(), 3);
    assert_eq!(session.grid().value(0, 0).unwrap(), 2);
    assert_eq!(session.grid().value(2, 0).unwrap(), 4);
}

#[test]
fn test_merge_without_slide_still_spawns() {
    // the pair sits at the target edge; the merge alone must trigger a spawn
    let mut grid = Grid::new(4).unwrap();
    grid.set(0, 0, 2).unwrap();
    grid.set(0, 1, 2).unwrap();
    let mut session = GameSession::from_grid(grid);
    let mut rng = SmallRng::seed_from_u64(3);
    let result = session.make_move(&mut rng, Direction::Left).unwrap();
    assert!(result.has_updated);
    assert_eq!(result.score_delta, 4);
    assert_eq!(session.grid().value(0, 0).unwrap(), 4);
    // one tile merged away, one spawned back in
    assert_eq!(session.grid().tile_count(), 2);
    assert_eq!(session.score(), 4);
}

#[test]
fn test_noop_move_spawns_nothing() {
    let mut grid = Grid::new(4).unwrap();
    grid.set(0, 0, 2).unwrap();
    let mut session = GameSession::from_grid(grid);
    let mut rng = SmallRng::seed_from_u64(5);
    let result = session.make_move(&mut rng, Direction::Up).unwrap();
    assert!(!result.has_updated);
    assert_eq!(session.grid().tile_count(), 1);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_random_game_reaches_terminal_state() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut session = GameSession::new(4, &mut rng).unwrap();
    let mut player = RandomPlayer::new();

    let mut moves = 0;
    while session.status().unwrap() == GameStatus::InProgress {
        moves += 1;
        assert!(moves < 100_000, "random game failed to terminate");

        let sum_before: u64 = grid_sum(session.grid());
        let direction = player.select_move(&mut rng, session.grid());
        let result = session.make_move(&mut rng, direction).unwrap();
        let sum_after: u64 = grid_sum(session.grid());

        if result.has_updated {
            // the spawned tile is the only value added to the board
            let spawned = sum_after - sum_before;
            assert!(spawned == 2 || spawned == 4);
        } else {
            assert_eq!(sum_after, sum_before);
        }
    }

    // terminal: full grid with no equal adjacent pair
    let grid = session.grid();
    assert!(grid.is_full());
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if col + 1 < grid.size() {
                assert!(!grid.values_equal((row, col), (row, col + 1)).unwrap());
            }
            if row + 1 < grid.size() {
                assert!(!grid.values_equal((row, col), (row + 1, col)).unwrap());
            }
        }
    }
    assert!(session.score() > 0);
}

#[test]
fn test_session_on_small_board() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut session = GameSession::new(2, &mut rng).unwrap();
    let mut moves = 0;
    while session.status().unwrap() == GameStatus::InProgress {
        moves += 1;
        assert!(moves < 10_000);
        let direction =
            Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        session.make_move(&mut rng, direction).unwrap();
    }
    assert!(session.grid().is_full());
}

fn grid_sum(grid: &Grid) -> u64 {
    let mut sum = 0;
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            sum += u64::from(grid.value(row, col).unwrap());
        }
    }
    sum
}
