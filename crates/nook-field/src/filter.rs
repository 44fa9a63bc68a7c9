//! Wall-adjacency filter: the reported subset of a distance field.

use crate::field::DistanceField;
use crate::gradient::{heat_color, Rgb};
use indexmap::IndexMap;
use nook_core::{Coord, Distance};

/// Wall-adjacent cells and their distances, in row-major order.
///
/// This is the output of a visualization run. `max_distance` is the
/// largest distance among the reported cells (zero when none are), used
/// to normalise distances into `[0, 1]` for colouring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallAdjacentField {
    cells: IndexMap<Coord, Distance>,
    max_distance: Distance,
}

impl WallAdjacentField {
    /// Extract every `near_wall` entry of `field`.
    pub fn from_field(field: &DistanceField) -> Self {
        let mut cells = IndexMap::new();
        let mut max_distance = Distance::ZERO;
        for (coord, entry) in field.iter() {
            if !entry.near_wall {
                continue;
            }
            if entry.distance > max_distance {
                max_distance = entry.distance;
            }
            cells.insert(coord, entry.distance);
        }
        Self {
            cells,
            max_distance,
        }
    }

    /// Number of reported cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell was reported.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Largest reported distance.
    pub fn max_distance(&self) -> Distance {
        self.max_distance
    }

    /// Distance of a reported cell.
    pub fn get(&self, coord: Coord) -> Option<Distance> {
        self.cells.get(&coord).copied()
    }

    /// Whether `coord` was reported.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Reported cells, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Distance)> + '_ {
        self.cells.iter().map(|(c, d)| (*c, *d))
    }

    /// `distance / max_distance` for a reported cell.
    pub fn normalized(&self, coord: Coord) -> Option<f64> {
        self.get(coord).map(|d| d.fraction_of(self.max_distance))
    }

    /// Reported cells with their heat-map colour, row-major.
    pub fn colors(&self) -> impl Iterator<Item = (Coord, Rgb)> + '_ {
        self.iter()
            .map(|(c, d)| (c, heat_color(d.fraction_of(self.max_distance))))
    }
}

impl DistanceField {
    /// Apply the wall-adjacency filter. See [`WallAdjacentField::from_field`].
    pub fn wall_adjacent(&self) -> WallAdjacentField {
        WallAdjacentField::from_field(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nook_grid::{Cell, Grid};

    fn near(r: u32, c: u32, distance: u32) -> Cell {
        let mut cell = Cell::new(Coord::new(r, c));
        cell.distance = Distance::new(distance);
        cell.is_near_wall = true;
        cell
    }

    fn field_with(cells: &[Cell]) -> DistanceField {
        let mut field = DistanceField::for_grid(&Grid::new(3, 3).unwrap());
        field.merge(cells);
        field
    }

    #[test]
    fn empty_field_reports_nothing() {
        let w = field_with(&[]).wall_adjacent();
        assert!(w.is_empty());
        assert_eq!(w.max_distance(), Distance::ZERO);
    }

    #[test]
    fn reports_row_major_with_max() {
        let w = field_with(&[near(2, 0, 4), near(0, 1, 1), near(1, 2, 3)]).wall_adjacent();
        let got: Vec<(Coord, Distance)> = w.iter().collect();
        assert_eq!(
            got,
            vec![
                (Coord::new(0, 1), Distance::new(1)),
                (Coord::new(1, 2), Distance::new(3)),
                (Coord::new(2, 0), Distance::new(4)),
            ]
        );
        assert_eq!(w.max_distance(), Distance::new(4));
        assert!(w.contains(Coord::new(1, 2)));
        assert!(!w.contains(Coord::new(1, 1)));
    }

    #[test]
    fn normalized_divides_by_max() {
        let w = field_with(&[near(0, 0, 2), near(0, 1, 4)]).wall_adjacent();
        assert_eq!(w.normalized(Coord::new(0, 0)), Some(0.5));
        assert_eq!(w.normalized(Coord::new(0, 1)), Some(1.0));
        assert_eq!(w.normalized(Coord::new(2, 2)), None);
    }

    #[test]
    fn all_zero_distances_normalise_to_zero() {
        let w = field_with(&[near(1, 1, 0)]).wall_adjacent();
        assert_eq!(w.max_distance(), Distance::ZERO);
        assert_eq!(w.normalized(Coord::new(1, 1)), Some(0.0));
        let colors: Vec<_> = w.colors().collect();
        assert_eq!(colors, vec![(Coord::new(1, 1), Rgb::new(0, 0, 255))]);
    }
}
