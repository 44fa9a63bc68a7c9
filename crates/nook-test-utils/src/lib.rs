//! Test utilities for nook development.
//!
//! Provides ASCII grid fixtures ([`parse_grid`]) and deterministic grid
//! builders ([`open_grid`], [`scattered_walls`], [`walled_halves`]) used
//! by unit tests, integration tests, and benchmarks across the workspace.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{open_grid, parse_grid, scattered_walls, walled_halves, Fixture};
