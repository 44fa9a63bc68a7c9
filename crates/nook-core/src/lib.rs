//! Core types for the nook workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid coordinate, the step-count distance with its "unreached"
//! sentinel, and the error type shared by every grid operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod distance;
pub mod error;

pub use coord::Coord;
pub use distance::Distance;
pub use error::GridError;
