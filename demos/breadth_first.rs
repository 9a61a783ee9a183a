use maze_search::solver::breadth_first::BreadthFirst;
use maze_search::{BreadthFirstEngine, Location, Maze, SearchConfig};

// Searches a seeded random maze with the breadth-first engine and overlays the shortest path
// with `*`.
//
// Usage: cargo run --example breadth_first -- [rows] [columns] [seed]
fn main() {
    let mut args = std::env::args().skip(1);
    let rows = args.next().and_then(|a| a.parse().ok()).unwrap_or(10);
    let columns = args.next().and_then(|a| a.parse().ok()).unwrap_or(10);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
    let config = SearchConfig {
        seed: Some(seed),
        ..SearchConfig::new()
    };
    let maze = match Maze::from_config(rows, columns, &config) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let engine = BreadthFirstEngine::with_maze(maze, BreadthFirst::new(), &config);
    let maze = engine.maze();
    let path = engine.search_path().unwrap_or(&[]);
    for row in 0..maze.rows() as i32 {
        let line = (0..maze.columns() as i32)
            .map(|column| {
                let p = Location::new(row, column);
                if p == maze.start_location() {
                    'S'
                } else if p == maze.goal_location() {
                    'G'
                } else if path.contains(&p) {
                    '*'
                } else if maze.get_location(p) == maze_search::maze::OBSTACLE {
                    '#'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", line);
    }
    match engine.search_path() {
        Ok(path) => println!("Shortest path has {} steps", path.len() - 1),
        Err(err) => println!("{err}"),
    }
}
