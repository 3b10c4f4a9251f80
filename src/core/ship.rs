//! Ship placements and the placement validator.

use serde::{Deserialize, Serialize};

use crate::core::board::ShipLayout;
use crate::core::common::{parse_axis, Coordinate, InputError, PlacementError};
use crate::core::config::{expected_cells, max_anchor};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Extends along the columns of the anchor row.
    Horizontal,
    /// Extends along the rows of the anchor column.
    Vertical,
}

impl Orientation {
    /// Accepts `h`/`horizontal` and `v`/`vertical`, ignoring case.
    pub fn parse(token: &str) -> Result<Self, InputError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "vertical" => Ok(Orientation::Vertical),
            "" => Err(InputError::MissingToken),
            _ => Err(InputError::BadOrientation),
        }
    }
}

/// A candidate position for one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub anchor: Coordinate,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(anchor: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            anchor,
            length,
            orientation,
        }
    }

    /// Parse raw tokens for a ship of `length`. Both axes must lie in
    /// `0..=BOARD_SIZE - length`.
    pub fn parse(
        length: usize,
        row: &str,
        col: &str,
        orientation: &str,
    ) -> Result<Self, InputError> {
        let max = max_anchor(length);
        let row = parse_axis(row, max)?;
        let col = parse_axis(col, max)?;
        let orientation = Orientation::parse(orientation)?;
        let anchor = Coordinate::new(row, col).ok_or(InputError::OutOfRange { value: row, max })?;
        Ok(Self::new(anchor, length, orientation))
    }

    /// Cells covered by this placement, stopping at the first one off the board.
    pub fn cells(&self) -> impl Iterator<Item = Option<Coordinate>> + '_ {
        (0..self.length).map(move |i| self.anchor.step(self.orientation, i))
    }
}

/// Try to add `placement` to `layout`.
///
/// Ships are placed longest first, so after placing a ship of length `n` the layout
/// must hold exactly `n + (n + 1) + ... + 5` occupied cells. Any overlap, or a ship
/// placed out of that order, breaks the count and is rejected. `layout` itself is
/// never modified.
pub fn validate(layout: &ShipLayout, placement: &Placement) -> Result<ShipLayout, PlacementError> {
    let mut next = *layout;
    let mut overlap = false;
    for cell in placement.cells() {
        let coord = cell.ok_or(PlacementError::OutOfBounds)?;
        overlap |= next.get(coord);
        next.set(coord, true);
    }

    let expected = expected_cells(placement.length);
    let found = next.count(&true);
    if found == expected {
        Ok(next)
    } else if overlap {
        Err(PlacementError::Overlap)
    } else {
        Err(PlacementError::CountMismatch { expected, found })
    }
}
