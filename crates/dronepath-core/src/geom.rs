//! Geometry primitive: the [`Cell`] coordinate.
//!
//! Rows grow downward and columns grow right, matching the order in which a
//! grid is typed in row by row.

use std::fmt;
use std::ops::Add;

/// A `(row, col)` grid coordinate, 0-indexed.
///
/// Coordinates are signed so that stepping off the top or left edge yields a
/// representable (out-of-bounds) cell instead of an underflow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Unit offsets in expansion order: north, south, west, east.
    pub const DIRS_4: [Cell; 4] = [
        Cell::new(-1, 0),
        Cell::new(1, 0),
        Cell::new(0, -1),
        Cell::new(0, 1),
    ];

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours in expansion order (north, south,
    /// west, east). No bounds check is applied.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        Self::DIRS_4.map(|d| self + d)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
