//! One traversal on a private copy of a base grid.

use crate::traverse::traverse;
use nook_core::{Coord, Distance, GridError};
use nook_grid::{Cell, Grid};

/// A completed single-source run.
///
/// Owns the working grid the traversal wrote into, so the base grid the
/// run was started from is never touched and two runs never alias.
#[derive(Clone, Debug)]
pub struct SearchRun {
    source: Coord,
    grid: Grid,
    visited: Vec<Cell>,
}

impl SearchRun {
    /// Deep-copy `base`, clear any search state left on it, set
    /// `source` to distance zero, and traverse.
    pub fn from_source(base: &Grid, source: Coord) -> Result<Self, GridError> {
        Self::run(base, source, None)
    }

    /// Like [`from_source`](Self::from_source), but first pre-loads
    /// `excluded` with `distance` so it is not expanded as a second
    /// zero-distance origin.
    ///
    /// If `excluded == source` the source wins and starts at zero.
    pub fn with_exclusion(
        base: &Grid,
        source: Coord,
        excluded: Coord,
        distance: Distance,
    ) -> Result<Self, GridError> {
        Self::run(base, source, Some((excluded, distance)))
    }

    fn run(
        base: &Grid,
        source: Coord,
        excluded: Option<(Coord, Distance)>,
    ) -> Result<Self, GridError> {
        base.check_bounds(source)?;
        let mut grid = base.clone();
        grid.reset_search_state();
        if let Some((coord, distance)) = excluded {
            grid.cell_mut(coord)?.distance = distance;
        }
        grid.cell_mut(source)?.distance = Distance::ZERO;
        let visited = traverse(&mut grid, source)?;
        Ok(Self {
            source,
            grid,
            visited,
        })
    }

    /// The origin of this run.
    pub fn source(&self) -> Coord {
        self.source
    }

    /// The working grid after traversal.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Visited cells in visit order.
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Visited cells flagged as wall-adjacent, in visit order.
    pub fn wall_adjacent(&self) -> impl Iterator<Item = &Cell> {
        self.visited.iter().filter(|cell| cell.is_near_wall)
    }
}
