/// Fuzzes both search strategies on many random mazes: a path must be found exactly when the goal
/// shares a connected component with the start, every path must be a chain of 4-neighbour steps
/// from start to goal, and breadth-first must never be longer than depth-first.
use maze_search::solver::{breadth_first::BreadthFirst, depth_first::DepthFirst};
use maze_search::{
    path_is_connected, BreadthFirstEngine, DepthFirstEngine, Location, Maze, SearchConfig,
    SearchError,
};
use rand::prelude::*;

fn visualize_maze(maze: &Maze, path: &[Location]) {
    for row in 0..maze.rows() as i32 {
        for column in 0..maze.columns() as i32 {
            let p = Location::new(row, column);
            if p == maze.start_location() {
                print!("S");
            } else if p == maze.goal_location() {
                print!("G");
            } else if maze.get_location(p) == maze_search::maze::OBSTACLE {
                print!("#");
            } else if path.contains(&p) {
                print!("*");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn check_path(maze: &Maze, path: &[Location]) {
    let ok = path.first() == Some(&maze.start_location())
        && path.last() == Some(&maze.goal_location())
        && path_is_connected(path);
    if !ok {
        visualize_maze(maze, path);
    }
    assert!(ok);
}

#[test]
fn fuzz() {
    const N_MAZES: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    let config = SearchConfig::default();
    for _ in 0..N_MAZES {
        let rows = rng.gen_range(1..=12);
        let columns = rng.gen_range(1..=12);
        let maze = Maze::generate(rows, columns, 3, &mut rng).unwrap();
        let reachable = maze.goal_reachable();

        let dfs = DepthFirstEngine::with_maze(maze.clone(), DepthFirst, &config);
        let bfs = BreadthFirstEngine::with_maze(maze.clone(), BreadthFirst, &config);
        if dfs.succeeded() != reachable || bfs.succeeded() != reachable {
            visualize_maze(&maze, &[]);
        }
        assert_eq!(dfs.succeeded(), reachable);
        assert_eq!(bfs.succeeded(), reachable);

        match (dfs.search_path(), bfs.search_path()) {
            (Ok(dfs_path), Ok(bfs_path)) => {
                check_path(&maze, dfs_path);
                check_path(&maze, bfs_path);
                assert!(bfs_path.len() <= dfs_path.len());
                let manhattan = maze
                    .start_location()
                    .manhattan_distance(&maze.goal_location()) as usize;
                assert!(bfs_path.len() > manhattan);
            }
            (Err(dfs_err), Err(bfs_err)) => {
                assert_eq!(dfs_err, SearchError::NoPathFound);
                assert_eq!(bfs_err, SearchError::NoPathFound);
            }
            _ => unreachable!(),
        }
    }
}

#[test]
fn fuzz_open_mazes() {
    let config = SearchConfig {
        obstacle_divisor: 0,
        seed: Some(11),
        ..SearchConfig::default()
    };
    for rows in 1..=15 {
        for columns in 1..=15 {
            let bfs: BreadthFirstEngine =
                maze_search::SearchEngine::from_config(rows, columns, &config).unwrap();
            let path = bfs.search_path().unwrap();
            assert_eq!(path.len(), rows + columns - 1);
            check_path(bfs.maze(), path);
        }
    }
}

#[test]
fn depth_first_never_reenters_a_cell() {
    let mut rng = StdRng::seed_from_u64(5);
    let config = SearchConfig::default();
    for _ in 0..500 {
        let maze = Maze::generate(10, 10, 4, &mut rng).unwrap();
        let dfs = DepthFirstEngine::with_maze(maze, DepthFirst, &config);
        if let Ok(path) = dfs.search_path() {
            let mut seen = path.to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), path.len());
        }
        // Depths are bounded by the number of playable cells.
        let mut stamps = dfs
            .maze()
            .cells()
            .map(|(_, v)| v)
            .filter(|&v| v > 0)
            .collect::<Vec<_>>();
        assert!(stamps.iter().all(|&v| v as usize <= 100));
        stamps.sort();
        assert!(stamps.first().map_or(true, |&v| v == 1));
    }
}
