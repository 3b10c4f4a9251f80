//! Player trait and implementations
//!
//! The [`Player`] trait is the presentation layer seen from the game loop: it renders
//! snapshots and collects raw text for placements and attacks. The game core parses
//! and validates everything it returns.
//! - AiPlayer: the automated opponent (random fleet, uniform random targets)
//! - CliPlayer: interactive terminal player
//! - AutoPlayer: scripted stand-in for the human, used for headless games

use crate::core::{
    AttackError, Coordinate, GameState, Mark, PlacementError, RawCoordinate, RawPlacement,
    ShipLayout, Winner,
};

/// Interface implemented by the human side of the game.
pub trait Player {
    /// Render the current boards.
    fn show(&mut self, _state: &GameState) -> anyhow::Result<()> {
        Ok(())
    }

    /// Collect the next placement attempt for a ship of `length`.
    fn request_placement(
        &mut self,
        length: usize,
        layout: &ShipLayout,
    ) -> anyhow::Result<RawPlacement>;

    /// The last placement attempt was refused.
    fn placement_rejected(
        &mut self,
        _length: usize,
        _reason: &PlacementError,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Collect the next attack target.
    fn request_attack(&mut self, state: &GameState) -> anyhow::Result<RawCoordinate>;

    /// The last attack target was refused; no turn was consumed.
    fn attack_rejected(&mut self, _reason: &AttackError) -> anyhow::Result<()> {
        Ok(())
    }

    /// Outcome of the player's own attack.
    fn attack_resolved(&mut self, _coord: Coordinate, _mark: Mark) -> anyhow::Result<()> {
        Ok(())
    }

    /// Outcome of the opponent's attack against the player's fleet.
    fn opponent_attack_resolved(&mut self, _coord: Coordinate, _mark: Mark) -> anyhow::Result<()> {
        Ok(())
    }

    /// The game is over. This is the final call made on the player.
    fn game_ended(&mut self, state: &GameState, winner: Winner) -> anyhow::Result<()>;
}

pub mod ai;
pub use ai::AiPlayer;

pub mod auto;
pub use auto::AutoPlayer;

pub mod cli;
pub use cli::CliPlayer;
