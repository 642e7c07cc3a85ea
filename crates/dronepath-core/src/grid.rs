//! The [`Grid`] type, an immutable rectangle of [`CellKind`]s.
//!
//! A `Grid` is built once from validated rows and is read-only afterwards,
//! so any number of searches may borrow it at the same time.

use crate::error::StructuralError;
use crate::geom::Cell;
use crate::kind::CellKind;
use crate::validate::validate;

/// A rectangular occupancy grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Validate `rows` and build a grid from them.
    ///
    /// Each row is a string of symbols from the `X . S G` alphabet. The
    /// first violation found by [`validate`] is returned unchanged.
    pub fn parse<R: AsRef<str>>(rows: &[R]) -> Result<Self, StructuralError> {
        validate(rows)?;
        let height = rows.len();
        let width = rows[0].as_ref().chars().count();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            // validate() already rejected unknown symbols.
            cells.extend(row.as_ref().chars().filter_map(CellKind::from_symbol));
        }
        Self::from_cells(height, width, cells)
    }

    /// Build a grid from a row-major cell vector.
    ///
    /// Only the shape is checked here. Start/goal multiplicity is left to
    /// the consumer, which calls [`locate`](Self::locate).
    pub fn from_cells(
        rows: usize,
        cols: usize,
        cells: Vec<CellKind>,
    ) -> Result<Self, StructuralError> {
        let len = Self::cell_count(rows, cols)?;
        if cells.len() != len {
            let found = cells.len() % cols;
            return Err(StructuralError::RaggedRow {
                row: cells.len() / cols,
                expected: cols,
                found,
            });
        }
        log::debug!("grid built: {rows}x{cols}");
        Ok(Self { cells, rows, cols })
    }

    /// Number of cells in a `rows x cols` grid.
    ///
    /// Fails if either side is zero, if a side does not fit a [`Cell`]
    /// coordinate, or if the product overflows `usize`.
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize, StructuralError> {
        if rows == 0 || cols == 0 {
            return Err(StructuralError::EmptyGrid);
        }
        let too_large = StructuralError::TooLarge { rows, cols };
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(too_large);
        }
        rows.checked_mul(cols).ok_or(too_large)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. `false` for every constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols + c.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        Cell::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// The kind at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<CellKind> {
        self.index(c).map(|i| self.cells[i])
    }

    /// The unique cell of the given kind.
    pub fn locate(&self, kind: CellKind) -> Result<Cell, StructuralError> {
        let mut found = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &k)| k == kind)
            .map(|(i, _)| i);
        let first = found.next().ok_or(StructuralError::Missing(kind))?;
        if found.next().is_some() {
            return Err(StructuralError::Duplicate(kind));
        }
        Ok(self.cell(first))
    }

    /// Whether `c` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_traversable(&self, c: Cell) -> bool {
        self.at(c).is_some_and(CellKind::is_traversable)
    }

    /// Traversable orthogonal neighbours of `c`, lazily, in the fixed
    /// north, south, west, east order.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_traversable(n))
    }

    /// Row-major iterator over `(Cell, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &k)| (self.cell(i), k))
    }
}
