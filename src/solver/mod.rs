use crate::config::SearchConfig;
use crate::engine::SearchCore;
use crate::error::SearchError;
use crate::location::Location;
use crate::maze::Maze;

pub mod breadth_first;
pub mod depth_first;

/// A strategy for finding a path from the start to the goal of the maze held by a [SearchCore].
pub trait MazeSolver {
    fn name(&self) -> &'static str;

    /// Runs the search to completion. On success the path buffer of `core` holds the path from
    /// start to goal, both included, and its used length is set accordingly. Stamps left in the
    /// maze are kept either way.
    fn solve(&self, core: &mut SearchCore, config: &SearchConfig) -> Result<(), SearchError>;

    /// Searches `maze` and returns the path from its start to its goal.
    fn get_path(&self, maze: Maze, config: &SearchConfig) -> Result<Vec<Location>, SearchError> {
        let mut core = SearchCore::new(maze, config);
        self.solve(&mut core, config)?;
        Ok(core.search_path().to_vec())
    }
}
