/// Default number of slots in the breadth-first [RingQueue](crate::ring_queue::RingQueue).
pub const DEFAULT_QUEUE_CAPACITY: usize = 400;
/// The path buffer holds `max(rows, columns)` times this many locations.
pub const DEFAULT_PATH_CAPACITY_FACTOR: usize = 100;
/// One obstacle is seeded per this many playable cells.
pub const DEFAULT_OBSTACLE_DIVISOR: usize = 3;

/// Tunables for maze generation and both search strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// `rows * columns / obstacle_divisor` obstacles are placed. Zero places none.
    pub obstacle_divisor: usize,
    pub queue_capacity: usize,
    pub path_capacity_factor: usize,
    /// Deepest frame the depth-first strategy may push. `None` uses `rows * columns`.
    pub depth_budget: Option<usize>,
    /// Seed for obstacle placement. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }
    pub fn with_seed(seed: u64) -> SearchConfig {
        SearchConfig {
            seed: Some(seed),
            ..SearchConfig::default()
        }
    }
    pub fn path_capacity(&self, rows: usize, columns: usize) -> usize {
        rows.max(columns).saturating_mul(self.path_capacity_factor)
    }
    pub fn depth_budget(&self, rows: usize, columns: usize) -> usize {
        self.depth_budget
            .unwrap_or_else(|| rows.saturating_mul(columns))
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            obstacle_divisor: DEFAULT_OBSTACLE_DIVISOR,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            path_capacity_factor: DEFAULT_PATH_CAPACITY_FACTOR,
            depth_budget: None,
            seed: None,
        }
    }
}
