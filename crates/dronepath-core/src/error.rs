//! Structural errors raised by the validator and by grid construction.

use std::fmt;

use crate::geom::Cell;
use crate::kind::CellKind;

/// A raw grid is not a well-formed occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// No rows, or a first row with no columns.
    EmptyGrid,
    /// A side longer than `i32::MAX`, or a cell count that overflows
    /// `usize`.
    TooLarge { rows: usize, cols: usize },
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the `X . S G` alphabet.
    InvalidSymbol { ch: char, cell: Cell },
    /// The grid holds this many start symbols instead of one.
    StartCount(usize),
    /// The grid holds this many goal symbols instead of one.
    GoalCount(usize),
    /// [`Grid::locate`](crate::Grid::locate) found no cell of this kind.
    Missing(CellKind),
    /// [`Grid::locate`](crate::Grid::locate) found more than one cell of
    /// this kind.
    Duplicate(CellKind),
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("Empty grid"),
            Self::TooLarge { rows, cols } => write!(f, "Grid too large: {rows}x{cols}"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Unequal row lengths: row {} has {found} cells, expected {expected}",
                row + 1
            ),
            Self::InvalidSymbol { ch, cell } => {
                write!(f, "Invalid symbol: {ch} at {cell}")
            }
            Self::StartCount(n) => write!(f, "Need exactly one S (found {n})"),
            Self::GoalCount(n) => write!(f, "Need exactly one G (found {n})"),
            Self::Missing(kind) => write!(f, "grid has no {kind} cell"),
            Self::Duplicate(kind) => write!(f, "grid has more than one {kind} cell"),
        }
    }
}

impl std::error::Error for StructuralError {}
