//! Rectangular obstacle grid with 4-connected neighbourhood.

use crate::cell::Cell;
use nook_core::{Coord, Distance, GridError};
use smallvec::SmallVec;

/// A two-dimensional grid of [`Cell`]s stored in row-major order.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Neighbours are the four cardinal directions;
/// edge cells have fewer neighbours (corners have 2, edges have 3).
///
/// `Clone` is a deep copy: traversal runs clone the grid they work on so
/// that no two runs share cell state.
///
/// # Examples
///
/// ```
/// use nook_core::Coord;
/// use nook_grid::Grid;
///
/// let grid = Grid::new(20, 50).unwrap();
/// assert_eq!(grid.cell_count(), 1000);
///
/// // Corner cell (0, 0): only 2 neighbours.
/// assert_eq!(grid.neighbours(Coord::new(0, 0)).len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum size of either dimension.
    pub const MAX_DIM: u32 = 1 << 15;

    /// Create a `rows * cols` grid with every cell open and unreached.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(Cell::new(Coord::new(r, c)));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Check that `coord` is in bounds and return its row-major rank.
    pub fn check_bounds(&self, coord: Coord) -> Result<usize, GridError> {
        self.rank(coord).ok_or(GridError::CoordOutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Row-major flat index of `coord`, or `None` if out of bounds.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.cols as usize + coord.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn coord_of(&self, rank: usize) -> Option<Coord> {
        if rank < self.cells.len() {
            let cols = self.cols as usize;
            Some(Coord::new((rank / cols) as u32, (rank % cols) as u32))
        } else {
            None
        }
    }

    /// The cell at `coord`, if in bounds.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.rank(coord).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `coord`, if in bounds.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.rank(coord).map(move |i| &mut self.cells[i])
    }

    /// The cell at `coord`, or `CoordOutOfBounds`.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, GridError> {
        let i = self.check_bounds(coord)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the cell at `coord`, or `CoordOutOfBounds`.
    pub fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, GridError> {
        let i = self.check_bounds(coord)?;
        Ok(&mut self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate the grid one row at a time.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols as usize)
    }

    /// The in-bounds orthogonal neighbours of `coord`, ordered N, S, W, E.
    ///
    /// An out-of-bounds `coord` has no neighbours.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        if !self.contains(coord) {
            return SmallVec::new();
        }
        [coord.north(), coord.south(), coord.west(), coord.east()]
            .into_iter()
            .flatten()
            .filter(|nb| self.contains(*nb))
            .collect()
    }

    /// Whether the cell at `coord` is a wall. Out-of-bounds is not a wall.
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|c| c.is_wall)
    }

    /// Whether any orthogonal neighbour of `coord` is a wall.
    ///
    /// The grid border does not count as a wall.
    pub fn touches_wall(&self, coord: Coord) -> bool {
        self.neighbours(coord).iter().any(|nb| self.is_wall(*nb))
    }

    /// The wall-adjacency predicate: the cell is reachable (finite
    /// distance), is not itself a wall, and touches at least one wall.
    pub fn is_wall_adjacent(&self, coord: Coord) -> bool {
        let Some(cell) = self.get(coord) else {
            return false;
        };
        cell.distance.is_finite() && !cell.is_wall && self.touches_wall(coord)
    }

    /// Set or clear the wall flag at `coord`.
    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<(), GridError> {
        self.cell_mut(coord)?.is_wall = wall;
        Ok(())
    }

    /// Flip the wall flag at `coord` and return the new value.
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool, GridError> {
        let cell = self.cell_mut(coord)?;
        cell.is_wall = !cell.is_wall;
        Ok(cell.is_wall)
    }

    /// Flag the cell at `coord` as a start node.
    pub fn mark_start(&mut self, coord: Coord) -> Result<(), GridError> {
        self.cell_mut(coord)?.is_start = true;
        Ok(())
    }

    /// Clear everything a traversal writes: distances back to infinity,
    /// `is_visited`, `is_near_wall`, and `previous`. Walls and start/finish
    /// markers are kept.
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.distance = Distance::INFINITY;
            cell.is_visited = false;
            cell.is_near_wall = false;
            cell.previous = None;
        }
    }

    /// Longest shortest path on an open grid of this size: corner to
    /// opposite corner.
    pub fn diameter(&self) -> u64 {
        u64::from(self.rows) + u64::from(self.cols) - 2
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }
}
