#![cfg(feature = "std")]

use crate::{game::GameSession, grid::Grid};

/// Print the grid as fixed-width cells, one blank line between rows.
pub fn print_grid(grid: &Grid) {
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let value = grid.value(row, col).unwrap_or(0);
            if value == 0 {
                std::print!("{:>6}", ".");
            } else {
                std::print!("{:>6}", value);
            }
        }
        std::println!();
        std::println!();
    }
}

/// Display the running score and the board.
pub fn print_session(session: &GameSession) {
    std::println!("Score: {}\n", session.score());
    print_grid(session.grid());
}
