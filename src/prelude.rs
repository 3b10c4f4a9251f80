//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    Coordinate, GameState, Mark, Orientation, Phase, Placement, ShipLayout, TrackingBoard,
    Winner,
};
pub use crate::player::{AiPlayer, AutoPlayer, CliPlayer, Player};
pub use crate::Session;
