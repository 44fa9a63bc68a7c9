//! Multi-source, wall-adjacent distance fields.
//!
//! [`Aggregator`] runs one single-source traversal per selected source,
//! in selection order, and folds each run into a private
//! [`DistanceField`] keeping the strictly smaller distance. The
//! wall-adjacency filter then reduces that field to a
//! [`WallAdjacentField`]: the cells next to a wall, with the largest
//! distance among them for gradient normalisation.
//!
//! ```
//! use nook_core::Coord;
//! use nook_field::aggregate;
//! use nook_grid::Grid;
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.set_wall(Coord::new(1, 1), true).unwrap();
//!
//! let field = aggregate(&grid, &[Coord::new(0, 0)]).unwrap();
//! assert_eq!(field.len(), 4);
//! assert_eq!(field.max_distance().get(), Some(3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod field;
pub mod filter;
pub mod gradient;

pub use aggregate::{aggregate, Aggregator};
pub use config::{ConfigError, FieldConfig};
pub use field::{DistanceField, FieldEntry};
pub use filter::WallAdjacentField;
pub use gradient::{heat_color, Rgb};
