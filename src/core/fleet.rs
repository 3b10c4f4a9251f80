//! Fleet generation: repeatedly draw placement attempts until every ship fits.

use std::convert::Infallible;

use log::trace;
use rand::Rng;

use crate::core::board::ShipLayout;
use crate::core::common::{Coordinate, PlacementError};
use crate::core::config::{max_anchor, FLEET};
use crate::core::ship::{validate, Orientation, Placement};

/// Supplies placement attempts to [`generate_fleet`].
pub trait PlacementSource {
    /// Failure of the source itself (e.g. closed input), distinct from a rejected
    /// attempt.
    type Error;

    /// Produce the next attempt for a ship of `length`. An inner `Err` is a rejected
    /// attempt that never reached the validator.
    fn next_attempt(
        &mut self,
        length: usize,
        layout: &ShipLayout,
    ) -> Result<Result<Placement, PlacementError>, Self::Error>;

    /// Called after each rejected attempt.
    fn rejected(&mut self, _length: usize, _reason: &PlacementError) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A completed layout together with the placements that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    layout: ShipLayout,
    placements: Vec<Placement>,
}

impl Fleet {
    pub fn layout(&self) -> &ShipLayout {
        &self.layout
    }

    /// Accepted placements, longest ship first.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn into_layout(self) -> ShipLayout {
        self.layout
    }
}

/// Place one ship of every length in [`FLEET`], retrying each until accepted.
pub fn generate_fleet<S: PlacementSource>(source: &mut S) -> Result<Fleet, S::Error> {
    let mut layout = ShipLayout::new(false);
    let mut placements = Vec::with_capacity(FLEET.len());
    for length in FLEET {
        loop {
            let outcome = source
                .next_attempt(length, &layout)?
                .and_then(|p| validate(&layout, &p).map(|next| (p, next)));
            match outcome {
                Ok((placement, next)) => {
                    layout = next;
                    placements.push(placement);
                    break;
                }
                Err(reason) => {
                    trace!("placement of length {} rejected: {}", length, reason);
                    source.rejected(length, &reason)?;
                }
            }
        }
    }
    Ok(Fleet { layout, placements })
}

/// Uniformly random placements whose extent always fits the board.
pub struct RandomPlacement<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> RandomPlacement<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlacementSource for RandomPlacement<'_, R> {
    type Error = Infallible;

    fn next_attempt(
        &mut self,
        length: usize,
        _layout: &ShipLayout,
    ) -> Result<Result<Placement, PlacementError>, Infallible> {
        let max = max_anchor(length);
        let row = self.rng.random_range(0..=max);
        let col = self.rng.random_range(0..=max);
        let orientation = if self.rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ok(Coordinate::new(row, col)
            .map(|anchor| Placement::new(anchor, length, orientation))
            .ok_or(PlacementError::OutOfBounds))
    }
}

/// Build a complete random fleet.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Fleet {
    match generate_fleet(&mut RandomPlacement::new(rng)) {
        Ok(fleet) => fleet,
        Err(never) => match never {},
    }
}
