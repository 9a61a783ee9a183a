use criterion::{criterion_group, criterion_main, Criterion};
use maze_search::solver::{breadth_first::BreadthFirst, depth_first::DepthFirst, MazeSolver};
use maze_search::{Maze, SearchConfig};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn random_mazes(n: usize, dim: usize) -> Vec<Maze> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n)
        .map(|_| Maze::generate(dim, dim, 3, &mut rng).unwrap())
        .collect()
}

fn bench_solver<S: MazeSolver>(c: &mut Criterion, solver: S) {
    let config = SearchConfig {
        queue_capacity: 10_000,
        ..SearchConfig::default()
    };
    for dim in [16, 64] {
        let mazes = random_mazes(32, dim);
        c.bench_function(format!("{}, {dim}x{dim}", solver.name()).as_str(), |b| {
            b.iter(|| {
                for maze in &mazes {
                    let _ = black_box(solver.get_path(maze.clone(), &config));
                }
            })
        });
    }
}

fn maze_bench(c: &mut Criterion) {
    bench_solver(c, DepthFirst);
    bench_solver(c, BreadthFirst);
}

criterion_group!(benches, maze_bench);
criterion_main!(benches);
