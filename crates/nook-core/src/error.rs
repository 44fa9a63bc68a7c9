//! Error types for grid construction and cell access.

use crate::Coord;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or from addressing a cell.
///
/// Unreachable cells and empty source lists are normal outcomes and are
/// never reported through this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Number of rows in the grid.
        rows: u32,
        /// Number of columns in the grid.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::CoordOutOfBounds { coord, rows, cols } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: [0, {rows}) x [0, {cols})"
                )
            }
        }
    }
}

impl Error for GridError {}
