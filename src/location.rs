use core::fmt;

/// A (row, column) coordinate in the playable area of a [Maze](crate::maze::Maze).
///
/// Locations are plain values: moving produces a new [Location] rather than mutating one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub row: i32,
    pub column: i32,
}

impl Location {
    pub const fn new(row: i32, column: i32) -> Location {
        Location { row, column }
    }
    /// The location reached by shifting `delta_row` rows and `delta_column` columns.
    pub const fn offset(&self, delta_row: i32, delta_column: i32) -> Location {
        Location::new(self.row + delta_row, self.column + delta_column)
    }
    pub fn manhattan_distance(&self, other: &Location) -> i32 {
        (self.row - other.row).abs() + (self.column - other.column).abs()
    }
    /// True if `other` is exactly one 4-neighbour step away.
    pub fn is_adjacent(&self, other: &Location) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, column): (i32, i32)) -> Location {
        Location::new(row, column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
