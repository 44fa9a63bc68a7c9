//! Obstacle grid model for nook.
//!
//! A [`Grid`] is a fixed-size, row-major array of [`Cell`]s with
//! 4-connected (N/S/W/E) adjacency and absorbing edges: cells on the
//! border simply have fewer neighbours. Walls are per-cell flags.
//!
//! [`SourceList`] records the cells a user selected as start nodes, in
//! selection order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod source;

pub use cell::Cell;
pub use grid::Grid;
pub use source::SourceList;
