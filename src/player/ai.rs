use rand::Rng;

use crate::core::{ai, fleet, Coordinate, ShipLayout};

/// Automated opponent: random fleet and memoryless uniform targeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Build a complete random layout.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> ShipLayout {
        fleet::random_fleet(rng).into_layout()
    }

    /// Pick any cell on the board, including ones already attacked.
    pub fn select_target<R: Rng>(&mut self, rng: &mut R) -> Coordinate {
        ai::random_target(rng)
    }
}
