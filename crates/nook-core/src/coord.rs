//! Grid coordinates.

use std::fmt;

/// A cell position on a 2D grid, addressed as `(row, col)`.
///
/// Both components are 0-based. A coordinate carries no knowledge of the
/// grid it belongs to; bounds are checked by the grid that receives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index (0 is the top row).
    pub row: u32,
    /// Column index (0 is the leftmost column).
    pub col: u32,
}

impl Coord {
    /// Create a coordinate from a row and a column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The cell directly above, or `None` on row 0.
    pub fn north(self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self { row, ..self })
    }

    /// The cell directly below. Not bounds-checked against any grid.
    pub fn south(self) -> Option<Self> {
        self.row.checked_add(1).map(|row| Self { row, ..self })
    }

    /// The cell directly to the left, or `None` on column 0.
    pub fn west(self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self { col, ..self })
    }

    /// The cell directly to the right. Not bounds-checked against any grid.
    pub fn east(self) -> Option<Self> {
        self.col.checked_add(1).map(|col| Self { col, ..self })
    }

    /// Manhattan (L1) distance between two coordinates.
    pub fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}
