//! Branching Factor Benchmarks
//!
//! Runs a full-grid backward Dijkstra with a range of fixed fan-outs and with
//! the selector's choice, to check that the selected `d` sits near the best.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench branching_perf
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dary_grid_heap::config::HeapConfig;
use dary_grid_heap::{Connectivity, DaryHeap, Grid, VertexArena};
use std::hint::black_box;

fn search(grid: &mut Grid, config: &HeapConfig) -> i64 {
    let goal = grid.id_at(grid.height() / 2, grid.width() / 2).unwrap();
    let connectivity = config.connectivity;
    let mut heap = DaryHeap::full_grid(grid, goal, config).unwrap();
    let mut last = 0;
    while let Some(u) = heap.extract_min() {
        let du = heap.key_of(u);
        if du == i64::MAX {
            break;
        }
        last = du;
        for v in heap.arena().neighbors(u, connectivity) {
            if heap.contains(v) && du + 1 < heap.key_of(v) {
                heap.decrease_key_vertex(v, du + 1).unwrap();
            }
        }
    }
    last
}

fn bench_branching_factor(c: &mut Criterion) {
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let mut group = c.benchmark_group(format!("full_grid_dijkstra_{connectivity:?}"));
        let size = 200;

        for d in [2usize, 3, 4, 6, 8, 16] {
            let config = HeapConfig::new()
                .with_connectivity(connectivity)
                .with_branching_factor(d);
            group.bench_with_input(BenchmarkId::new("fixed", d), &config, |b, config| {
                let mut grid: Grid = Grid::new(size, size);
                b.iter(|| {
                    grid.reset_search_state();
                    black_box(search(&mut grid, config))
                });
            });
        }

        let config = HeapConfig::new().with_connectivity(connectivity);
        group.bench_with_input(BenchmarkId::new("selected", size), &config, |b, config| {
            let mut grid: Grid = Grid::new(size, size);
            b.iter(|| {
                grid.reset_search_state();
                black_box(search(&mut grid, config))
            });
        });

        group.finish();
    }
}

criterion_group!(benches, bench_branching_factor);
criterion_main!(benches);
