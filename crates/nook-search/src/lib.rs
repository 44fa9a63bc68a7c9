//! Single-source shortest distances over an obstacle grid.
//!
//! [`traverse`] is Dijkstra over the unit-weight 4-connected graph of a
//! [`Grid`](nook_grid::Grid): walls never relax their neighbours, and
//! cells the source cannot reach keep [`Distance::INFINITY`](nook_core::Distance).
//!
//! [`SearchRun`] wraps one complete run on a private copy of a base
//! grid, which is how the multi-source aggregator consumes it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod frontier;
pub mod run;
pub mod traverse;

pub use run::SearchRun;
pub use traverse::traverse;
