//! Criterion micro-benchmarks for single-source traversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nook_core::Coord;
use nook_search::{traverse, SearchRun};
use nook_test_utils::{open_grid, scattered_walls};

/// Benchmark: traverse an open 100x100 grid from its centre.
fn bench_traverse_open_10k(c: &mut Criterion) {
    let base = open_grid(100, 100);
    let source = Coord::new(50, 50);

    c.bench_function("traverse_open_10k", |b| {
        b.iter(|| {
            let mut grid = base.clone();
            grid.cell_mut(source).unwrap().distance = nook_core::Distance::ZERO;
            let visited = traverse(&mut grid, source).unwrap();
            black_box(&visited);
        });
    });
}

/// Benchmark: a full SearchRun (clone, reset, traverse) on a 100x100 grid
/// with ~25% walls.
fn bench_search_run_walls_10k(c: &mut Criterion) {
    let mut base = scattered_walls(100, 100, 7, 250);
    let source = Coord::new(0, 0);
    base.set_wall(source, false).unwrap();

    c.bench_function("search_run_walls_10k", |b| {
        b.iter(|| {
            let run = SearchRun::from_source(&base, source).unwrap();
            black_box(run.visited().len());
        });
    });
}

/// Benchmark: neighbours() on all 10K cells of a 100x100 grid.
fn bench_neighbours_10k(c: &mut Criterion) {
    let grid = open_grid(100, 100);

    c.bench_function("neighbours_10k", |b| {
        b.iter(|| {
            for r in 0..100u32 {
                for col in 0..100u32 {
                    let n = grid.neighbours(Coord::new(r, col));
                    black_box(&n);
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_traverse_open_10k,
    bench_search_run_walls_10k,
    bench_neighbours_10k
);
criterion_main!(benches);
