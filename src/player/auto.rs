use rand::seq::IteratorRandom;
use rand::Rng;

use super::Player;
use crate::core::{
    max_anchor, GameState, Mark, PlacementError, RawCoordinate, RawPlacement, ShipLayout, Winner,
};

/// Plays the human side without a terminal. Produces the same raw text a person
/// would type: random placements in the declared range and random targets it has
/// not attacked yet.
pub struct AutoPlayer<R: Rng> {
    rng: R,
    rejected_placements: usize,
}

impl<R: Rng> AutoPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            rejected_placements: 0,
        }
    }

    /// Placement attempts refused during setup.
    pub fn rejected_placements(&self) -> usize {
        self.rejected_placements
    }
}

impl<R: Rng> Player for AutoPlayer<R> {
    fn request_placement(
        &mut self,
        length: usize,
        _layout: &ShipLayout,
    ) -> anyhow::Result<RawPlacement> {
        let max = max_anchor(length);
        let row = self.rng.random_range(0..=max);
        let col = self.rng.random_range(0..=max);
        let dir = if self.rng.random() { "h" } else { "v" };
        Ok(RawPlacement::new(row.to_string(), col.to_string(), dir))
    }

    fn placement_rejected(
        &mut self,
        _length: usize,
        _reason: &PlacementError,
    ) -> anyhow::Result<()> {
        self.rejected_placements += 1;
        Ok(())
    }

    fn request_attack(&mut self, state: &GameState) -> anyhow::Result<RawCoordinate> {
        let target = state
            .human()
            .tracking
            .cells()
            .filter(|(_, mark)| *mark == Mark::Unknown)
            .map(|(coord, _)| coord)
            .choose(&mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("no cells left to attack"))?;
        Ok(RawCoordinate::new(
            target.row().to_string(),
            target.col().to_string(),
        ))
    }

    fn game_ended(&mut self, _state: &GameState, _winner: Winner) -> anyhow::Result<()> {
        Ok(())
    }
}
