//! Board coordinate representation.

use std::fmt;

/// A coordinate on the 8x8 board.
///
/// Rows and columns are both indexed 0-7, row 0 at the top of the grid
/// (matching the GUI's click addressing). A `Coord` is always in range:
/// construction bounds-checks, so every held value is a valid board
/// square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, returning `None` if either index is out of
    /// range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Returns the row index (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the coordinate shifted by the given deltas, or `None` if
    /// the result leaves the board.
    ///
    /// This is the single bounds check used for all candidate generation:
    /// offsets and ray steps go through here instead of each movement
    /// rule guarding its own edges.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row distance to another coordinate.
    #[inline]
    pub const fn row_distance(self, other: Coord) -> u8 {
        self.row.abs_diff(other.row)
    }

    /// Returns the column distance to another coordinate.
    #[inline]
    pub const fn col_distance(self, other: Coord) -> u8 {
        self.col.abs_diff(other.col)
    }

    /// Returns an iterator over all 64 board coordinates, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..8).flat_map(|row| (0..8).map(move |col| Coord { row, col }))
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
