//! Core game engine.
//!
//! Boards, placement validation, fleet generation, hit resolution and win detection.
//! Nothing in here performs I/O.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod fleet;
pub mod game;
pub mod ship;

// Re-export commonly used types
pub use ai::random_target;
pub use board::{render_ship_layout, render_tracking_board, Board, Glyph, ShipLayout, TrackingBoard};
pub use common::{
    AttackError, Coordinate, InputError, Mark, PlacementError, RawCoordinate, RawPlacement,
};
pub use config::*;
pub use fleet::{generate_fleet, random_fleet, Fleet, PlacementSource, RandomPlacement};
pub use game::{has_won, resolve, GameError, GameState, GameSummary, Phase, Side, Winner};
pub use ship::{validate, Orientation, Placement};
