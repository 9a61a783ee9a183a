//! # maze_search
//!
//! Pathfinding on a rectangular grid maze with randomly seeded obstacles, a start in the top-left
//! corner and a goal in the bottom-right one. Two strategies are provided:
//! [depth-first](solver::depth_first::DepthFirst) backtracking, which stamps every cell it enters
//! with its depth, and [breadth-first](solver::breadth_first::BreadthFirst) level-order search,
//! which returns a shortest 4-directional path. Movement is restricted to the four cardinal
//! neighbours, tried in a fixed order (see [engine::MOVE_ORDER]).
//!
//! Engines search as soon as they are built:
//! ```
//! use maze_search::{BreadthFirstEngine, Location, Maze, SearchConfig};
//! use maze_search::solver::breadth_first::BreadthFirst;
//!
//! let maze = Maze::with_obstacles(3, 3, [Location::new(1, 1)]).unwrap();
//! let engine = BreadthFirstEngine::with_maze(maze, BreadthFirst, &SearchConfig::default());
//! assert_eq!(engine.search_path().unwrap().len(), 5);
//! ```
//! Paths are returned start-first and include both the start and the goal.
pub mod config;
pub mod engine;
pub mod error;
pub mod location;
pub mod maze;
pub mod ring_queue;
pub mod solver;

pub use config::SearchConfig;
pub use engine::{BreadthFirstEngine, DepthFirstEngine, SearchCore, SearchEngine};
pub use error::SearchError;
pub use location::Location;
pub use maze::{CellKind, Maze};

/// Number of neighbours considered from a location.
pub const N_MOVES: usize = 4;

/// Checks that every consecutive pair of locations is a single 4-neighbour step.
pub fn path_is_connected(path: &[Location]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{breadth_first::BreadthFirst, depth_first::DepthFirst, MazeSolver};

    #[test]
    fn connectivity_check() {
        let steps = [(0, 0), (1, 0), (1, 1), (0, 1)].map(Location::from);
        assert!(path_is_connected(&steps));
        assert!(path_is_connected(&[]));
        assert!(!path_is_connected(&[Location::new(0, 0), Location::new(1, 1)]));
        assert!(!path_is_connected(&[Location::new(0, 0), Location::new(0, 0)]));
    }

    #[test]
    fn engines_reject_invalid_dimensions() {
        assert_eq!(
            DepthFirstEngine::new(0, 3).unwrap_err(),
            SearchError::InvalidDimensions {
                rows: 0,
                columns: 3
            }
        );
        assert!(BreadthFirstEngine::new(3, 0).is_err());
    }

    #[test]
    fn single_cell_is_trivially_solved() {
        let dfs = DepthFirstEngine::new(1, 1).unwrap();
        let bfs = BreadthFirstEngine::new(1, 1).unwrap();
        assert_eq!(dfs.search_path().unwrap(), &[Location::new(0, 0)]);
        assert_eq!(bfs.search_path().unwrap(), &[Location::new(0, 0)]);
    }

    #[test]
    fn wall_blocks_both_engines() {
        // |S#.|
        // |.#.|
        // |.#G|
        let wall = (0..3).map(|row| Location::new(row, 1));
        let maze = Maze::with_obstacles(3, 3, wall).unwrap();
        let config = SearchConfig::default();
        let dfs = DepthFirstEngine::with_maze(maze.clone(), DepthFirst, &config);
        let bfs = BreadthFirstEngine::with_maze(maze, BreadthFirst, &config);
        for result in [dfs.search_path(), bfs.search_path()] {
            assert_eq!(result, Err(SearchError::NoPathFound));
        }
        assert!(!dfs.succeeded());
        assert_eq!(bfs.path_len(), 0);
    }

    #[test]
    fn injected_layout_is_idempotent() {
        let obstacles = [(1, 1), (1, 2), (3, 0), (2, 3)].map(Location::from);
        let config = SearchConfig::default();
        let build = || Maze::with_obstacles(5, 5, obstacles).unwrap();
        let a = DepthFirstEngine::with_maze(build(), DepthFirst, &config);
        let b = DepthFirstEngine::with_maze(build(), DepthFirst, &config);
        assert_eq!(a.search_path(), b.search_path());
        assert!(a.maze().cells().eq(b.maze().cells()));
        let c = BreadthFirstEngine::with_maze(build(), BreadthFirst, &config);
        let d = BreadthFirstEngine::with_maze(build(), BreadthFirst, &config);
        assert_eq!(c.search_path(), d.search_path());
    }

    #[test]
    fn seeded_engines_agree_on_maze() {
        let config = SearchConfig::with_seed(3);
        let dfs: DepthFirstEngine = SearchEngine::from_config(12, 9, &config).unwrap();
        let bfs: BreadthFirstEngine = SearchEngine::from_config(12, 9, &config).unwrap();
        let fresh = Maze::from_config(12, 9, &config).unwrap();
        assert_eq!(dfs.maze().obstacle_count(), fresh.obstacle_count());
        assert_eq!(dfs.succeeded(), fresh.goal_reachable());
        assert_eq!(bfs.succeeded(), fresh.goal_reachable());
        assert_eq!(dfs.solver().name(), "depth-first");
    }

    #[test]
    fn get_path_returns_owned_path() {
        let config = SearchConfig::new();
        assert_eq!(config, SearchConfig::default());
        let path = BreadthFirst::new()
            .get_path(Maze::open(2, 2).unwrap(), &config)
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], Location::new(0, 0));
        assert_eq!(path[2], Location::new(1, 1));
        let path = DepthFirst::new()
            .get_path(Maze::open(2, 2).unwrap(), &config)
            .unwrap();
        assert_eq!(path.len(), 3);
    }
}
