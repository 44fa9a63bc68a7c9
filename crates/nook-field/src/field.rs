//! The aggregator's private minimum-distance accumulator.

use nook_core::{Coord, Distance};
use nook_grid::{Cell, Grid};

/// Accumulated state for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    /// Smallest distance any merged run reported for this cell.
    pub distance: Distance,
    /// Set once a run reported this cell as wall-adjacent.
    pub near_wall: bool,
}

impl Default for FieldEntry {
    fn default() -> Self {
        Self {
            distance: Distance::INFINITY,
            near_wall: false,
        }
    }
}

/// Grid-shaped minimum-distance field, row-major.
///
/// Only cells a run flags as wall-adjacent are ever merged, so an entry
/// with a finite distance is always `near_wall`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    rows: u32,
    cols: u32,
    entries: Vec<FieldEntry>,
}

impl DistanceField {
    /// An empty field shaped like `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            entries: vec![FieldEntry::default(); grid.cell_count()],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    fn rank(&self, coord: Coord) -> Option<usize> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(coord.row as usize * self.cols as usize + coord.col as usize)
        } else {
            None
        }
    }

    /// The entry at `coord`, if in bounds.
    pub fn get(&self, coord: Coord) -> Option<FieldEntry> {
        self.rank(coord).map(|i| self.entries[i])
    }

    /// Fold one run's visited cells into the field.
    ///
    /// Cells not flagged `is_near_wall` are ignored. A flagged cell
    /// overwrites its entry only when its distance is strictly smaller,
    /// so on a tie the earlier run keeps the cell. Returns the number of
    /// entries overwritten.
    pub fn merge<'a>(&mut self, visited: impl IntoIterator<Item = &'a Cell>) -> usize {
        let mut overwritten = 0;
        for cell in visited {
            if !cell.is_near_wall {
                continue;
            }
            let Some(i) = self.rank(cell.coord()) else {
                continue;
            };
            let entry = &mut self.entries[i];
            if cell.distance < entry.distance {
                entry.distance = cell.distance;
                entry.near_wall = true;
                overwritten += 1;
            }
        }
        overwritten
    }

    /// All entries with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, FieldEntry)> + '_ {
        let cols = self.cols as usize;
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new((i / cols) as u32, (i % cols) as u32), *e))
    }
}
