//! Grid fixtures.
//!
//! Fixtures panic on malformed input: they only ever run inside tests
//! and benches, where a bad literal should fail loudly.

use nook_core::Coord;
use nook_grid::Grid;

/// A grid plus the sources marked in its ASCII picture.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub grid: Grid,
    /// Sources ordered by their digit label (`0` first).
    pub sources: Vec<Coord>,
}

/// Parse an ASCII picture into a [`Fixture`].
///
/// - `#` wall
/// - `.` open cell
/// - `0`..=`9` open cell selected as a source; the digit is the
///   selection order. Repeating a digit is a panic.
///
/// Leading and trailing blank lines and per-line indentation are ignored,
/// so fixtures can be written as indented raw strings.
///
/// ```
/// let f = nook_test_utils::parse_grid(
///     "
///     0.#
///     ..1
///     ",
/// );
/// assert_eq!(f.grid.rows(), 2);
/// assert_eq!(f.sources.len(), 2);
/// ```
pub fn parse_grid(picture: &str) -> Fixture {
    let lines: Vec<&str> = picture
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!lines.is_empty(), "empty grid picture");
    let cols = lines[0].chars().count();
    for (r, line) in lines.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            cols,
            "row {r} has a different width than row 0"
        );
    }

    let mut grid = Grid::new(lines.len() as u32, cols as u32).expect("valid fixture size");
    let mut labelled: [Option<Coord>; 10] = [None; 10];

    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let coord = Coord::new(r as u32, c as u32);
            match ch {
                '#' => grid.set_wall(coord, true).expect("in bounds"),
                '.' => {}
                d if d.is_ascii_digit() => {
                    let slot = d as usize - '0' as usize;
                    assert!(labelled[slot].is_none(), "source {d} appears twice");
                    labelled[slot] = Some(coord);
                    grid.mark_start(coord).expect("in bounds");
                }
                other => panic!("unknown fixture character {other:?} at {coord}"),
            }
        }
    }

    Fixture {
        grid,
        sources: labelled.into_iter().flatten().collect(),
    }
}

/// A `rows * cols` grid with no walls.
pub fn open_grid(rows: u32, cols: u32) -> Grid {
    Grid::new(rows, cols).expect("valid grid size")
}

/// A grid with a deterministic scattering of walls.
///
/// Roughly `per_mille / 1000` of the cells become walls. The same
/// `(rows, cols, seed, per_mille)` always yields the same layout.
pub fn scattered_walls(rows: u32, cols: u32, seed: u64, per_mille: u32) -> Grid {
    let mut grid = open_grid(rows, cols);
    for rank in 0..grid.cell_count() {
        // Deterministic pseudo-random draw per cell.
        let h = (rank as u64)
            .wrapping_add(seed)
            .wrapping_mul(6364136223846793007)
            .wrapping_add(1442695040888963407);
        if ((h >> 33) % 1000) < per_mille as u64 {
            if let Some(coord) = grid.coord_of(rank) {
                grid.set_wall(coord, true).expect("in bounds");
            }
        }
    }
    grid
}

/// A grid split into a left and a right region by a full-height wall
/// column at `cols / 2`.
pub fn walled_halves(rows: u32, cols: u32) -> Grid {
    let mut grid = open_grid(rows, cols);
    let split = cols / 2;
    for r in 0..rows {
        grid.set_wall(Coord::new(r, split), true)
            .expect("in bounds");
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_orders_sources_by_label() {
        let f = parse_grid(
            "
            1..
            .#.
            ..0
            ",
        );
        assert_eq!(f.sources, vec![Coord::new(2, 2), Coord::new(0, 0)]);
        assert!(f.grid.is_wall(Coord::new(1, 1)));
        assert!(f.grid.cell(Coord::new(0, 0)).unwrap().is_start);
        assert_eq!(f.grid.wall_count(), 1);
    }

    #[test]
    #[should_panic(expected = "different width")]
    fn parse_rejects_ragged_rows() {
        parse_grid("...\n..");
    }

    #[test]
    fn scattered_walls_is_deterministic() {
        let a = scattered_walls(20, 50, 7, 250);
        let b = scattered_walls(20, 50, 7, 250);
        assert_eq!(a, b);
        let walls = a.wall_count();
        assert!(walls > 100 && walls < 400, "unexpected wall count {walls}");
    }

    #[test]
    fn walled_halves_splits_the_grid() {
        let g = walled_halves(4, 9);
        assert_eq!(g.wall_count(), 4);
        assert!((0..4).all(|r| g.is_wall(Coord::new(r, 4))));
    }
}
