use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use log::info;
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::location::Location;

/// Free, not yet visited.
pub const FREE: i32 = 0;
/// Impassable. The border ring always holds this value.
pub const OBSTACLE: i32 = -1;
pub const START_MARKER: i32 = -2;
pub const GOAL_MARKER: i32 = -3;
/// Largest number of cells, border included, a maze may allocate.
pub const MAX_CELLS: usize = 1 << 26;

/// Interpretation of a raw cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Free,
    Obstacle,
    Start,
    Goal,
    /// Overwritten by a search with its discovery depth.
    Stamped(i32),
}

impl CellKind {
    pub fn classify(value: i32) -> CellKind {
        match value {
            FREE => CellKind::Free,
            OBSTACLE => CellKind::Obstacle,
            START_MARKER => CellKind::Start,
            GOAL_MARKER => CellKind::Goal,
            v => CellKind::Stamped(v),
        }
    }
}

/// [Maze] stores the cell values of a `rows` x `columns` playable area surrounded by a ring of
/// [OBSTACLE] cells, so that neighbour lookups one step past an edge land on the border instead
/// of going out of bounds. All public coordinates are playable-area coordinates; the +1 shift
/// into the bordered [SimpleValueGrid] happens here.
///
/// Connected components over non-obstacle cells are kept in a [UnionFind] to answer
/// reachability queries without searching.
#[derive(Clone, Debug)]
pub struct Maze {
    cells: SimpleValueGrid<i32>,
    rows: usize,
    columns: usize,
    start: Location,
    goal: Location,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Maze {
    /// A maze with the default obstacle density and an entropy-seeded layout.
    ///
    /// Every constructor fails with [SearchError::InvalidDimensions] if a side is zero or the
    /// bordered grid would exceed [MAX_CELLS].
    pub fn new(rows: usize, columns: usize) -> Result<Maze, SearchError> {
        Maze::from_config(rows, columns, &SearchConfig::default())
    }

    /// Builds a random maze honouring [SearchConfig::obstacle_divisor] and [SearchConfig::seed].
    pub fn from_config(
        rows: usize,
        columns: usize,
        config: &SearchConfig,
    ) -> Result<Maze, SearchError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Maze::generate(rows, columns, config.obstacle_divisor, &mut rng)
    }

    /// Seeds `rows * columns / obstacle_divisor` obstacles at independent uniform coordinates.
    /// Placements may collide with each other or with the start and goal cells; the start and
    /// goal markers are written afterwards and always win.
    pub fn generate<R: Rng>(
        rows: usize,
        columns: usize,
        obstacle_divisor: usize,
        rng: &mut R,
    ) -> Result<Maze, SearchError> {
        let mut maze = Maze::bordered(rows, columns)?;
        let n_obstacles = match obstacle_divisor {
            0 => 0,
            d => rows * columns / d,
        };
        for _ in 0..n_obstacles {
            let row = rng.gen_range(0..rows) as i32;
            let column = rng.gen_range(0..columns) as i32;
            maze.set(row, column, OBSTACLE);
        }
        maze.stamp_markers();
        info!(
            "Generated {}x{} maze with {} obstacle placements",
            rows, columns, n_obstacles
        );
        Ok(maze)
    }

    /// Builds a maze from an explicit obstacle layout, in the same order as [Maze::generate].
    pub fn with_obstacles<I>(rows: usize, columns: usize, obstacles: I) -> Result<Maze, SearchError>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut maze = Maze::bordered(rows, columns)?;
        for obstacle in obstacles {
            if !maze.in_bounds(obstacle.row, obstacle.column) {
                return Err(SearchError::OutOfBounds(obstacle));
            }
            maze.set_location(obstacle, OBSTACLE);
        }
        maze.stamp_markers();
        Ok(maze)
    }

    /// A maze without obstacles.
    pub fn open(rows: usize, columns: usize) -> Result<Maze, SearchError> {
        Maze::with_obstacles(rows, columns, [])
    }

    fn bordered(rows: usize, columns: usize) -> Result<Maze, SearchError> {
        let max_dim = i32::MAX as usize - 2;
        if rows == 0 || columns == 0 || rows > max_dim || columns > max_dim {
            return Err(SearchError::InvalidDimensions { rows, columns });
        }
        match (rows + 2).checked_mul(columns + 2) {
            Some(n_cells) if n_cells <= MAX_CELLS => {}
            _ => return Err(SearchError::InvalidDimensions { rows, columns }),
        }
        let mut cells = SimpleValueGrid::new(columns + 2, rows + 2, FREE);
        let (w, h) = (columns as i32 + 2, rows as i32 + 2);
        for x in 0..w {
            cells.set(x, 0, OBSTACLE);
            cells.set(x, h - 1, OBSTACLE);
        }
        for y in 0..h {
            cells.set(0, y, OBSTACLE);
            cells.set(w - 1, y, OBSTACLE);
        }
        Ok(Maze {
            cells,
            rows,
            columns,
            start: Location::new(0, 0),
            goal: Location::new(rows as i32 - 1, columns as i32 - 1),
            components: UnionFind::new(rows * columns),
            components_dirty: true,
        })
    }

    // Start first, then goal, so the goal marker survives when both share a cell.
    fn stamp_markers(&mut self) {
        self.set_location(self.start, START_MARKER);
        self.set_location(self.goal, GOAL_MARKER);
        self.generate_components();
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn columns(&self) -> usize {
        self.columns
    }
    pub fn start_location(&self) -> Location {
        self.start
    }
    pub fn goal_location(&self) -> Location {
        self.goal
    }

    /// True if (row, column) lies in the playable area.
    pub fn in_bounds(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.rows && (column as usize) < self.columns
    }

    /// Reads a cell. Coordinates one step outside the playable area read the border.
    ///
    /// # Panics
    /// If (row, column) is more than one step outside the playable area.
    pub fn get(&self, row: i32, column: i32) -> i32 {
        self.cells.get(column + 1, row + 1)
    }
    pub fn get_location(&self, location: Location) -> i32 {
        self.get(location.row, location.column)
    }

    /// Writes a cell of the playable area.
    ///
    /// # Panics
    /// If (row, column) is outside the playable area; the border is never writable.
    pub fn set(&mut self, row: i32, column: i32, value: i32) {
        assert!(
            self.in_bounds(row, column),
            "({row}, {column}) is outside the {}x{} maze",
            self.rows,
            self.columns
        );
        if (value == OBSTACLE) != (self.get(row, column) == OBSTACLE) {
            self.components_dirty = true;
        }
        self.cells.set(column + 1, row + 1, value);
    }
    pub fn set_location(&mut self, location: Location, value: i32) {
        self.set(location.row, location.column, value)
    }

    pub fn kind(&self, location: Location) -> CellKind {
        CellKind::classify(self.get_location(location))
    }

    /// True if a search may step onto this cell: it is free or holds the goal marker.
    pub fn is_open(&self, location: Location) -> bool {
        matches!(self.get_location(location), FREE | GOAL_MARKER)
    }

    /// Iterates over the playable area row by row, yielding each location and its raw value.
    pub fn cells(&self) -> impl Iterator<Item = (Location, i32)> + '_ {
        (0..self.rows as i32).flat_map(move |row| {
            (0..self.columns as i32).map(move |column| {
                let location = Location::new(row, column);
                (location, self.get_location(location))
            })
        })
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells().filter(|&(_, v)| v == OBSTACLE).count()
    }

    fn get_ix(&self, location: &Location) -> usize {
        location.row as usize * self.columns + location.column as usize
    }

    /// Retrieves the component id a given [Location] belongs to.
    pub fn get_component(&self, location: &Location) -> usize {
        self.components.find(self.get_ix(location))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Location, goal: &Location) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Locations outside the maze or on
    /// an obstacle are unreachable.
    pub fn unreachable(&self, start: &Location, goal: &Location) -> bool {
        let passable = |p: &Location| {
            self.in_bounds(p.row, p.column) && self.get_location(*p) != OBSTACLE
        };
        if start == goal {
            return !passable(start);
        }
        if passable(start) && passable(goal) {
            !self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }

    /// Checks if the goal can be reached from the start.
    pub fn goal_reachable(&self) -> bool {
        self.reachable(&self.start, &self.goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up 4-neighbours to the same components.
    /// Stamped cells are passable, so components stay valid after a search has run.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.columns);
        self.components_dirty = false;
        for row in 0..self.rows as i32 {
            for column in 0..self.columns as i32 {
                let point = Location::new(row, column);
                if self.get_location(point) == OBSTACLE {
                    continue;
                }
                let parent_ix = self.get_ix(&point);
                // Linking down and right covers every edge once.
                for n in [point.offset(1, 0), point.offset(0, 1)] {
                    if self.in_bounds(n.row, n.column) && self.get_location(n) != OBSTACLE {
                        let ix = self.get_ix(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            for column in 0..self.columns as i32 {
                let glyph = match CellKind::classify(self.get(row, column)) {
                    CellKind::Obstacle => '#',
                    CellKind::Start | CellKind::Stamped(1) => 'S',
                    CellKind::Goal => 'G',
                    CellKind::Free => '.',
                    CellKind::Stamped(depth) => {
                        char::from_digit(depth.rem_euclid(10) as u32, 10).unwrap_or('?')
                    }
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
