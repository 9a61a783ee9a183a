use maze_search::solver::depth_first::DepthFirst;
use maze_search::{DepthFirstEngine, Maze, SearchConfig, SearchError};

// Searches a random maze with the depth-first engine and prints it with every cell the search
// entered labelled by its depth (modulo 10), followed by the path.
//
// Usage: cargo run --example depth_first -- [rows] [columns]
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
fn main() {
    let mut args = std::env::args().skip(1);
    let rows = args.next().and_then(|a| a.parse().ok()).unwrap_or(10);
    let columns = args.next().and_then(|a| a.parse().ok()).unwrap_or(10);
    let config = SearchConfig::new();
    let maze = match Maze::from_config(rows, columns, &config) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let engine = DepthFirstEngine::with_maze(maze, DepthFirst::new(), &config);
    println!("{}", engine.maze());
    match engine.search_path() {
        Ok(path) => {
            println!("Path of {} locations:", path.len());
            for (i, p) in path.iter().enumerate() {
                println!("{:>4} {}", i + 1, p);
            }
        }
        Err(SearchError::NoPathFound) => println!("The goal cannot be reached."),
        Err(err) => println!("Search failed: {err}"),
    }
}
