//! Benchmark profiles and utilities for nook.
//!
//! Provides pre-built grid profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: the default 20x50 grid with a few sources
//! - [`stress_profile`]: 300x300 grid (90K cells) with many sources
//! - [`init_sources`]: deterministic source placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use nook_core::Coord;
use nook_field::FieldConfig;
use nook_grid::{Grid, SourceList};

/// A base grid with its selected sources.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Base grid with walls set and sources marked.
    pub grid: Grid,
    /// Sources in selection order.
    pub sources: SourceList,
}

/// Build the reference profile: the default 20x50 grid, ~20% walls,
/// 4 sources.
pub fn reference_profile(seed: u64) -> Profile {
    let config = FieldConfig::default();
    build_profile(config.rows, config.cols, 200, 4, seed)
}

/// Build a stress profile: 300x300 grid (90K cells), ~25% walls,
/// 16 sources.
pub fn stress_profile(seed: u64) -> Profile {
    build_profile(300, 300, 250, 16, seed)
}

fn build_profile(rows: u32, cols: u32, per_mille: u64, n: usize, seed: u64) -> Profile {
    let mut grid = Grid::new(rows, cols).unwrap();
    let picks = init_sources(grid.cell_count(), n, seed);
    let picked: HashSet<usize> = picks.iter().copied().collect();

    for rank in 0..grid.cell_count() {
        if picked.contains(&rank) {
            continue;
        }
        let h = (rank as u64 ^ seed)
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        if (h >> 33) % 1000 < per_mille {
            let coord = grid.coord_of(rank).unwrap();
            grid.set_wall(coord, true).unwrap();
        }
    }

    let mut sources = SourceList::new();
    for rank in picks {
        let coord = grid.coord_of(rank).unwrap();
        sources.select(&mut grid, coord).unwrap();
    }
    Profile { grid, sources }
}

/// Generate `n` distinct deterministic source ranks.
///
/// Places sources using a simple hash of the seed, linear-probing past
/// collisions. Ranks are row-major flat indices into a grid of
/// `cell_count` cells.
pub fn init_sources(cell_count: usize, n: usize, seed: u64) -> Vec<usize> {
    let n = n.min(cell_count);
    let mut positions = Vec::with_capacity(n);
    let mut occupied = HashSet::new();

    for i in 0..n as u64 {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;

        // Linear probe to avoid collisions
        while occupied.contains(&pos) {
            pos = (pos + 1) % cell_count;
        }
        occupied.insert(pos);
        positions.push(pos);
    }

    positions
}

/// Render `grid` as text, one line per row: `#` wall, `S` source,
/// `0`-`9` the decile of a reported cell, `.` anything else.
pub fn render_deciles(grid: &Grid, field: &nook_field::WallAdjacentField) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.rows() as usize);
    for (r, row) in grid.iter_rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let coord = Coord::new(r as u32, c as u32);
            let ch = if cell.is_wall {
                '#'
            } else if cell.is_start {
                'S'
            } else if let Some(t) = field.normalized(coord) {
                char::from(b'0' + ((t * 9.0).round() as u8).min(9))
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
