//! nook: how convenient is each spot along a wall?
//!
//! Given an obstacle grid and a list of chosen locations, nook computes
//! the shortest walking distance from the nearest chosen location to
//! every reachable cell that touches a wall, ready for heat-map colouring.
//! This is the top-level facade crate re-exporting the public API of the
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use nook::prelude::*;
//!
//! let config = FieldConfig::default();
//! let mut grid = config.grid().unwrap();
//! for row in 0..15 {
//!     grid.set_wall(Coord::new(row, 25), true).unwrap();
//! }
//!
//! let mut sources = SourceList::new();
//! sources.select(&mut grid, Coord::new(0, 0)).unwrap();
//! sources.select(&mut grid, Coord::new(19, 49)).unwrap();
//!
//! let field = Aggregator::with_config(&config)
//!     .unwrap()
//!     .aggregate(&grid, sources.as_slice())
//!     .unwrap();
//! assert_eq!(field.len(), 31);
//! for (coord, colour) in field.colors() {
//!     let _ = (coord, colour.to_hex());
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nook-core` | `Coord`, `Distance`, `GridError` |
//! | [`grid`] | `nook-grid` | `Grid`, `Cell`, `SourceList` |
//! | [`search`] | `nook-search` | Single-source traversal |
//! | [`field`] | `nook-field` | Aggregation, filtering, gradient, config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, distances, and errors (`nook-core`).
pub use nook_core as types;

/// The obstacle grid model (`nook-grid`).
pub use nook_grid as grid;

/// Single-source shortest-distance traversal (`nook-search`).
pub use nook_search as search;

/// Multi-source aggregation and the wall-adjacent output (`nook-field`).
pub use nook_field as field;

/// Common imports for typical nook usage.
///
/// ```rust
/// use nook::prelude::*;
/// ```
pub mod prelude {
    pub use nook_core::{Coord, Distance, GridError};
    pub use nook_field::{
        aggregate, heat_color, Aggregator, ConfigError, FieldConfig, Rgb, WallAdjacentField,
    };
    pub use nook_grid::{Cell, Grid, SourceList};
    pub use nook_search::{traverse, SearchRun};
}
