use log::warn;
use smallvec::SmallVec;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::location::Location;
use crate::maze::Maze;
use crate::solver::breadth_first::BreadthFirst;
use crate::solver::depth_first::DepthFirst;
use crate::solver::MazeSolver;
use crate::N_MOVES;

/// Row and column offsets tried from every location, in priority order. Both strategies rely on
/// this order for deterministic results.
pub const MOVE_ORDER: [(i32, i32); N_MOVES] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// State shared by the search strategies: the [Maze] being searched and the path buffer.
///
/// Only the prefix `[0, path_len)` of the buffer is meaningful; slots past it may hold stale
/// entries from abandoned branches.
#[derive(Clone, Debug)]
pub struct SearchCore {
    maze: Maze,
    path: Vec<Location>,
    path_len: usize,
    path_capacity: usize,
}

impl SearchCore {
    pub fn new(maze: Maze, config: &SearchConfig) -> SearchCore {
        let path_capacity = config.path_capacity(maze.rows(), maze.columns());
        SearchCore {
            maze,
            path: Vec::new(),
            path_len: 0,
            path_capacity,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }
    pub fn maze_mut(&mut self) -> &mut Maze {
        &mut self.maze
    }
    pub fn into_maze(self) -> Maze {
        self.maze
    }

    /// The locations one step away from `location` that a search may enter, in [MOVE_ORDER].
    /// A neighbour is legal if it is free or holds the goal marker; the border and stamped cells
    /// never are.
    pub fn possible_moves(&self, location: Location) -> SmallVec<[Location; N_MOVES]> {
        MOVE_ORDER
            .iter()
            .map(|&(dr, dc)| location.offset(dr, dc))
            .filter(|&p| self.maze.is_open(p))
            .collect()
    }

    /// Writes `location` into slot `index` of the path buffer.
    pub fn record_path_at(&mut self, index: usize, location: Location) -> Result<(), SearchError> {
        if index >= self.path_capacity {
            warn!(
                "Path buffer of {} slots cannot hold index {}",
                self.path_capacity, index
            );
            return Err(SearchError::PathBufferExhausted {
                capacity: self.path_capacity,
            });
        }
        if index < self.path.len() {
            self.path[index] = location;
        } else {
            self.path.resize(index, Location::default());
            self.path.push(location);
        }
        Ok(())
    }
    pub fn path_at(&self, index: usize) -> Option<Location> {
        self.path.get(index).copied()
    }
    pub fn path_len(&self) -> usize {
        self.path_len
    }
    /// Sets how many leading path slots are meaningful. Clamped to the slots written so far.
    pub fn set_path_len(&mut self, len: usize) {
        self.path_len = len.min(self.path.len());
    }
    pub fn path_capacity(&self) -> usize {
        self.path_capacity
    }
    /// The meaningful prefix of the path buffer.
    pub fn search_path(&self) -> &[Location] {
        &self.path[..self.path_len]
    }
    /// Drops any recorded path.
    pub fn reset_path(&mut self) {
        self.path.clear();
        self.path_len = 0;
    }
}

/// Owns a [Maze] together with the path a [MazeSolver] found through it.
///
/// The search runs to completion when the engine is built; afterwards the engine only answers
/// queries about the stamped maze and the outcome.
#[derive(Clone, Debug)]
pub struct SearchEngine<S: MazeSolver> {
    core: SearchCore,
    solver: S,
    outcome: Result<(), SearchError>,
}

/// Recursive-backtracking search engine.
pub type DepthFirstEngine = SearchEngine<DepthFirst>;
/// Level-order shortest-path search engine.
pub type BreadthFirstEngine = SearchEngine<BreadthFirst>;

impl<S: MazeSolver + Default> SearchEngine<S> {
    /// Generates a random maze with default settings and searches it.
    pub fn new(rows: usize, columns: usize) -> Result<SearchEngine<S>, SearchError> {
        SearchEngine::from_config(rows, columns, &SearchConfig::default())
    }

    /// Generates a random maze as described by `config` and searches it.
    pub fn from_config(
        rows: usize,
        columns: usize,
        config: &SearchConfig,
    ) -> Result<SearchEngine<S>, SearchError> {
        let maze = Maze::from_config(rows, columns, config)?;
        Ok(SearchEngine::with_maze(maze, S::default(), config))
    }
}

impl<S: MazeSolver> SearchEngine<S> {
    /// Searches a prepared maze. Search failures are kept and reported by
    /// [search_path](Self::search_path), so the stamped maze stays inspectable either way.
    pub fn with_maze(maze: Maze, solver: S, config: &SearchConfig) -> SearchEngine<S> {
        let mut core = SearchCore::new(maze, config);
        let outcome = solver.solve(&mut core, config);
        if outcome.is_err() {
            core.set_path_len(0);
        }
        SearchEngine {
            core,
            solver,
            outcome,
        }
    }

    pub fn maze(&self) -> &Maze {
        self.core.maze()
    }
    pub fn solver(&self) -> &S {
        &self.solver
    }
    pub fn core(&self) -> &SearchCore {
        &self.core
    }
    /// The path from start to goal, or the reason none was produced.
    pub fn search_path(&self) -> Result<&[Location], SearchError> {
        self.outcome.clone().map(|_| self.core.search_path())
    }
    pub fn path_len(&self) -> usize {
        self.core.path_len()
    }
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}
