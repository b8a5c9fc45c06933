#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;

use crate::{engine::Direction, grid::Grid, player::Player};
use rand::rngs::SmallRng;

/// Interactive player reading moves from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn select_move(&mut self, _rng: &mut SmallRng, _grid: &Grid) -> Direction {
        loop {
            std::print!("Please enter your move choice (up, down, left, right): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match line.parse::<Direction>() {
                Ok(direction) => return direction,
                Err(_) => std::println!("Invalid move choice. Please try again!"),
            }
        }
    }

    fn handle_rejected_move(&mut self, direction: Direction) {
        std::println!("Nothing can move {:?}. Try another direction!", direction);
    }
}
