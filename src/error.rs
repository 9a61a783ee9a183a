use thiserror::Error;

use crate::location::Location;

/// Everything that can end a maze construction or a search early.
///
/// None of these are retried: each one is terminal for the search that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid maze dimensions {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("location {0} lies outside the maze")]
    OutOfBounds(Location),
    #[error("ring queue capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
    #[error("no path from start to goal")]
    NoPathFound,
    #[error("path buffer capacity of {capacity} exhausted")]
    PathBufferExhausted { capacity: usize },
    #[error("depth budget of {budget} exceeded")]
    DepthBudgetExceeded { budget: usize },
}
