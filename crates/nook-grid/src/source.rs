//! Ordered source selection.

use crate::grid::Grid;
use nook_core::{Coord, GridError};

/// Start nodes in the order the user selected them.
///
/// Order matters to aggregation: each run suppresses the source selected
/// immediately before it. Selecting the same cell twice keeps both
/// entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceList {
    sources: Vec<Coord>,
}

impl SourceList {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `coord` as a start node on `grid` and append it to the list.
    pub fn select(&mut self, grid: &mut Grid, coord: Coord) -> Result<(), GridError> {
        grid.mark_start(coord)?;
        self.sources.push(coord);
        Ok(())
    }

    /// Forget the selection and clear the start flags it set on `grid`.
    pub fn clear(&mut self, grid: &mut Grid) {
        for coord in self.sources.drain(..) {
            if let Some(cell) = grid.get_mut(coord) {
                cell.is_start = false;
            }
        }
    }

    /// Selected sources, oldest first.
    pub fn as_slice(&self) -> &[Coord] {
        &self.sources
    }

    /// Number of selections.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether nothing has been selected.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterate sources in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.sources.iter()
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_preserves_order_and_marks_start() {
        let mut g = Grid::new(4, 4).unwrap();
        let mut s = SourceList::new();
        s.select(&mut g, Coord::new(3, 1)).unwrap();
        s.select(&mut g, Coord::new(0, 2)).unwrap();
        assert_eq!(s.as_slice(), &[Coord::new(3, 1), Coord::new(0, 2)]);
        assert!(g.cell(Coord::new(3, 1)).unwrap().is_start);
        assert!(g.cell(Coord::new(0, 2)).unwrap().is_start);
    }

    #[test]
    fn select_out_of_bounds_leaves_list_unchanged() {
        let mut g = Grid::new(2, 2).unwrap();
        let mut s = SourceList::new();
        assert!(s.select(&mut g, Coord::new(2, 0)).is_err());
        assert!(s.is_empty());
    }

    #[test]
    fn clear_unmarks_grid() {
        let mut g = Grid::new(2, 2).unwrap();
        let mut s = SourceList::new();
        s.select(&mut g, Coord::new(1, 1)).unwrap();
        s.clear(&mut g);
        assert!(s.is_empty());
        assert!(!g.cell(Coord::new(1, 1)).unwrap().is_start);
    }
}
