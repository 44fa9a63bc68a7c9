//! Dijkstra over the unit-weight 4-connected grid graph.

use crate::frontier::Frontier;
use nook_core::{Coord, GridError};
use nook_grid::{Cell, Grid};
use tracing::trace;

/// Compute shortest distances from `source` to every reachable cell.
///
/// Returns the visited cells in visit order, which is non-decreasing by
/// distance. Each returned [`Cell`] is a snapshot taken when the cell
/// was visited; `grid` is left holding the final distances, visit flags,
/// wall-adjacency flags, and predecessor links.
///
/// The caller must have set the source's distance to zero. The
/// traversal never assigns it: it seeds the frontier with every
/// unvisited cell whose distance is already finite, in row-major order,
/// and only ever relaxes neighbours from there. A cell pre-loaded with a
/// large distance therefore competes like any other frontier member and
/// is improved if a shorter route reaches it.
///
/// Walls are never relaxed into. A wall that is itself seeded (a wall
/// source) is visited and recorded but does not propagate. Cells left at
/// infinity are unreachable and absent from the result.
///
/// # Errors
///
/// `GridError::CoordOutOfBounds` if `source` is not inside `grid`.
///
/// # Examples
///
/// ```
/// use nook_core::{Coord, Distance};
/// use nook_grid::Grid;
/// use nook_search::traverse;
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// let source = Coord::new(0, 0);
/// grid.cell_mut(source).unwrap().distance = Distance::ZERO;
///
/// let visited = traverse(&mut grid, source).unwrap();
/// assert_eq!(visited.len(), 9);
/// assert_eq!(grid.cell(Coord::new(2, 2)).unwrap().distance, Distance::new(4));
/// ```
pub fn traverse(grid: &mut Grid, source: Coord) -> Result<Vec<Cell>, GridError> {
    grid.check_bounds(source)?;

    let mut frontier = Frontier::with_capacity(grid.cell_count());
    for cell in grid.cells() {
        if cell.distance.is_finite() && !cell.is_visited {
            frontier.push(cell.coord(), cell.distance);
        }
    }

    let mut visited = Vec::new();
    while let Some((coord, queued)) = frontier.pop() {
        let Some(&current) = grid.get(coord) else {
            continue;
        };
        // Stale entry from an earlier, longer relaxation.
        if current.is_visited || current.distance != queued {
            continue;
        }
        if !current.distance.is_finite() {
            break;
        }

        if !current.is_wall {
            let next = current.distance.step();
            for nb in grid.neighbours(coord) {
                let Some(neighbour) = grid.get_mut(nb) else {
                    continue;
                };
                if neighbour.is_wall || neighbour.is_visited {
                    continue;
                }
                if next < neighbour.distance {
                    neighbour.distance = next;
                    neighbour.previous = Some(coord);
                    frontier.push(nb, next);
                }
            }
        }

        let near_wall = grid.is_wall_adjacent(coord);
        if let Some(cell) = grid.get_mut(coord) {
            cell.is_visited = true;
            cell.is_near_wall = near_wall;
            visited.push(*cell);
        }
    }

    trace!(
        %source,
        visited = visited.len(),
        stale_remaining = frontier.len(),
        "traversal complete"
    );
    Ok(visited)
}
