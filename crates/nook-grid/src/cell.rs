//! A single grid cell and its per-run attributes.

use nook_core::{Coord, Distance};

/// One cell of a [`Grid`](crate::Grid).
///
/// The position is fixed at construction; every other attribute is a
/// plain flag written by the grid editing helpers or by a traversal run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    /// Impassable obstacle.
    pub is_wall: bool,
    /// Selected as a source.
    pub is_start: bool,
    /// Selected as a finish marker. Carried for consumers; traversal ignores it.
    pub is_finish: bool,
    /// Best known distance from the current run's source.
    pub distance: Distance,
    /// Popped from the frontier during the current run.
    pub is_visited: bool,
    /// Reachable, not a wall, and orthogonally next to a wall.
    pub is_near_wall: bool,
    /// Predecessor on the shortest path found so far.
    pub previous: Option<Coord>,
}

impl Cell {
    /// A fresh open cell: unreached, all flags cleared.
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            is_wall: false,
            is_start: false,
            is_finish: false,
            distance: Distance::INFINITY,
            is_visited: false,
            is_near_wall: false,
            previous: None,
        }
    }

    /// Position of this cell in its grid.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Row index.
    pub fn row(&self) -> u32 {
        self.coord.row
    }

    /// Column index.
    pub fn col(&self) -> u32 {
        self.coord.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_unreached_and_clear() {
        let c = Cell::new(Coord::new(4, 9));
        assert_eq!(c.coord(), Coord::new(4, 9));
        assert_eq!((c.row(), c.col()), (4, 9));
        assert_eq!(c.distance, Distance::INFINITY);
        assert!(!c.is_wall && !c.is_start && !c.is_finish);
        assert!(!c.is_visited && !c.is_near_wall);
        assert_eq!(c.previous, None);
    }
}
