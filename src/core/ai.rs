// Targeting for the automated opponent: uniform over the whole board, with no
// memory of earlier shots.

use rand::Rng;

use crate::core::common::Coordinate;
use crate::core::config::BOARD_SIZE;

/// Draw a coordinate uniformly from the full board.
pub fn random_target<R: Rng>(rng: &mut R) -> Coordinate {
    let row = rng.random_range(0..BOARD_SIZE);
    let col = rng.random_range(0..BOARD_SIZE);
    match Coordinate::new(row, col) {
        Some(coord) => coord,
        None => unreachable!("random_range stays below BOARD_SIZE"),
    }
}
