//! Fixed-size game boards, generic over the cell content.
//!
//! Two instantiations are used by the game: [`ShipLayout`] records where a player's
//! ships sit and [`TrackingBoard`] records the outcome of that player's attacks.

use std::fmt;

use crate::core::common::{Coordinate, Mark};
use crate::core::config::BOARD_SIZE;

/// Where a player's ships sit: `true` for an occupied cell.
pub type ShipLayout = Board<bool>;

/// Hit/miss history of one player's attacks against the opponent.
pub type TrackingBoard = Board<Mark>;

/// A 10×10 grid of `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<T> {
    cells: [[T; BOARD_SIZE]; BOARD_SIZE],
}

impl<T: Copy + PartialEq> Board<T> {
    /// Create a board with every cell set to `fill`.
    pub fn new(fill: T) -> Self {
        Self {
            cells: [[fill; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, coord: Coordinate) -> T {
        self.cells[coord.row()][coord.col()]
    }

    pub fn set(&mut self, coord: Coordinate, value: T) {
        self.cells[coord.row()][coord.col()] = value;
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| *cell == value)
            .count()
    }

    /// Iterator over `(coordinate, value)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, T)> + '_ {
        Coordinate::all().map(move |coord| (coord, self.get(coord)))
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T; BOARD_SIZE]> {
        self.cells.iter()
    }
}

impl<T: Copy + PartialEq + Default> Default for Board<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Single-character rendering of a cell.
pub trait Glyph {
    fn glyph(&self) -> char;
}

impl Glyph for bool {
    fn glyph(&self) -> char {
        if *self {
            'X'
        } else {
            ' '
        }
    }
}

impl Glyph for Mark {
    fn glyph(&self) -> char {
        match self {
            Mark::Unknown => ' ',
            Mark::Hit => 'H',
            Mark::Miss => 'M',
        }
    }
}

impl<T: Glyph + Copy + PartialEq> fmt::Display for Board<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {c} ")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(3 + BOARD_SIZE * 3))?;
        for (r, row) in self.rows().enumerate() {
            write!(f, "{r} |")?;
            for cell in row {
                write!(f, " {} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Glyph + Copy + PartialEq> fmt::Debug for Board<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        fmt::Display::fmt(self, f)
    }
}

/// Textual grid of a ship layout (`X` occupied).
pub fn render_ship_layout(board: &ShipLayout) -> String {
    board.to_string()
}

/// Textual grid of a tracking board (`H` hit, `M` miss).
pub fn render_tracking_board(board: &TrackingBoard) -> String {
    board.to_string()
}
