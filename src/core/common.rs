//! Common types for the game core: coordinates, tracking marks and errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::BOARD_SIZE;
use crate::core::ship::Orientation;

/// A cell on the 10×10 grid. Both axes are always in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Returns `None` when either axis falls outside the board.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Move `dist` cells along `orientation`. Horizontal advances the column,
    /// vertical advances the row.
    pub fn step(self, orientation: Orientation, dist: usize) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => Self::new(self.row(), self.col() + dist),
            Orientation::Vertical => Self::new(self.row() + dist, self.col()),
        }
    }

    /// Every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self {
            row: row as u8,
            col: col as u8,
        }))
    }

    /// Parse an attack target from raw row and column tokens.
    pub fn parse(row: &str, col: &str) -> Result<Self, InputError> {
        let row = parse_axis(row, BOARD_SIZE - 1)?;
        let col = parse_axis(col, BOARD_SIZE - 1)?;
        Self::new(row, col).ok_or(InputError::OutOfRange {
            value: row.max(col),
            max: BOARD_SIZE - 1,
        })
    }
}

/// Parse a single integer token and check it against the inclusive bound `max`.
pub(crate) fn parse_axis(token: &str, max: usize) -> Result<usize, InputError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(InputError::MissingToken);
    }
    let value: usize = token.parse().map_err(|_| InputError::NotANumber)?;
    if value > max {
        return Err(InputError::OutOfRange { value, max });
    }
    Ok(value)
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = InputError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(InputError::OutOfRange {
            value: row.max(col),
            max: BOARD_SIZE - 1,
        })
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row(), coord.col())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a tracking board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Not attacked yet.
    #[default]
    Unknown,
    /// Attacked and a ship segment was there.
    Hit,
    /// Attacked and the cell was open water.
    Miss,
}

/// Raw text tokens typed for an attack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCoordinate {
    pub row: String,
    pub col: String,
}

impl RawCoordinate {
    pub fn new(row: impl Into<String>, col: impl Into<String>) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }
}

/// Raw text tokens typed for a ship placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlacement {
    pub row: String,
    pub col: String,
    pub orientation: String,
}

impl RawPlacement {
    pub fn new(
        row: impl Into<String>,
        col: impl Into<String>,
        orientation: impl Into<String>,
    ) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
            orientation: orientation.into(),
        }
    }
}

/// Malformed text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// A required token was empty.
    MissingToken,
    /// A token was not a non-negative integer.
    NotANumber,
    /// A value fell outside the declared range `0..=max`.
    OutOfRange { value: usize, max: usize },
    /// Orientation token was not one of `h`/`v`.
    BadOrientation,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingToken => write!(f, "Missing value"),
            InputError::NotANumber => write!(f, "Value must be a whole number"),
            InputError::OutOfRange { value, max } => {
                write!(f, "Value {} out of range - must be 0-{}", value, max)
            }
            InputError::BadOrientation => write!(f, "Direction must be h or v"),
        }
    }
}

impl std::error::Error for InputError {}

/// Reasons a placement attempt is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The attempt could not be parsed.
    Malformed(InputError),
    /// The ship would extend past the board edge.
    OutOfBounds,
    /// The ship would share a cell with an already placed ship.
    Overlap,
    /// The resulting layout does not hold the cumulative number of cells expected
    /// at this stage of placement.
    CountMismatch { expected: usize, found: usize },
}

impl From<InputError> for PlacementError {
    fn from(err: InputError) -> Self {
        PlacementError::Malformed(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Malformed(e) => write!(f, "Input invalid: {}", e),
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "Overlap detected"),
            PlacementError::CountMismatch { expected, found } => write!(
                f,
                "Layout holds {} ship cells, expected {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Reasons a human attack is refused before it reaches the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// The target could not be parsed.
    Malformed(InputError),
    /// The cell is already marked on the attacker's tracking board.
    AlreadyAttacked(Coordinate),
    /// Attacks are only accepted while the game is being played.
    NotPlaying,
}

impl From<InputError> for AttackError {
    fn from(err: InputError) -> Self {
        AttackError::Malformed(err)
    }
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::Malformed(e) => write!(f, "Input invalid: {}", e),
            AttackError::AlreadyAttacked(c) => write!(f, "Already attacked {}", c),
            AttackError::NotPlaying => write!(f, "The game is not in progress"),
        }
    }
}

impl std::error::Error for AttackError {}
