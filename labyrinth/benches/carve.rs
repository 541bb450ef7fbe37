//! Benchmarks of maze generation and of queries on finished mazes.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng as _;
use rand_xoshiro::Xoshiro256Plus;

use labyrinth::math::{CellPoint, CellSize};
use labyrinth::{MazeGrid, carve, generate_maze, render};

fn main() {
    let mut criterion = Criterion::default().configure_from_args();

    carve_benches(&mut criterion);
    query_benches(&mut criterion);

    criterion.final_summary();
}

fn carve_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("carve");
    for size in [
        CellSize::new(10, 10),
        CellSize::new(100, 100),
        CellSize::new(1, 10_000),
        CellSize::new(1000, 1000),
    ] {
        group.throughput(Throughput::Elements(size.area() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}×{}", size.width, size.height)),
            &size,
            |b, &input_size| {
                let mut rng = Xoshiro256Plus::seed_from_u64(0);
                b.iter_batched_ref(
                    || MazeGrid::new(input_size).unwrap(),
                    |grid| carve(grid, CellPoint::new(0, 0), &mut rng).unwrap(),
                    BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

fn query_benches(c: &mut Criterion) {
    let maze = generate_maze(
        CellSize::new(100, 100),
        CellPoint::new(0, 0),
        &mut Xoshiro256Plus::seed_from_u64(0),
    )
    .unwrap();

    let mut group = c.benchmark_group("query");
    group.bench_function("reachable_count", |b| {
        b.iter(|| black_box(&maze).reachable_count(CellPoint::new(50, 50)).unwrap());
    });
    group.bench_function("path_between", |b| {
        b.iter(|| {
            black_box(&maze)
                .path_between(CellPoint::new(0, 0), CellPoint::new(99, 99))
                .unwrap()
        });
    });
    group.bench_function("render", |b| {
        b.iter_with_large_drop(|| render(black_box(&maze), None));
    });
    group.finish();
}
