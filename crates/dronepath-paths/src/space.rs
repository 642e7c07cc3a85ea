use dronepath_core::{Cell, Grid};

/// Outcome of one search: the route (if any) and the search effort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells from start to goal, both included. `None` if the goal is
    /// unreachable.
    pub path: Option<Vec<Cell>>,
    /// Cells taken off the frontier and marked visited.
    pub nodes_visited: usize,
}

impl SearchResult {
    /// Whether a route was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the route, or 0 without one.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Number of moves on the route (cells minus one).
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Heap entries for UCS / A* / greedy
// ---------------------------------------------------------------------------

/// Parent sentinel: the cell was never reached, or is the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Sentinel cost meaning "not reached yet".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Frontier entry ordered by `key`, then by push order, for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) key: i32,
    pub(crate) seq: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first, and
        // the earliest push among equal keys.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Per-search bookkeeping over a `rows x cols` rectangle.
///
/// Visited flags, predecessors and best-known costs are dense arrays indexed
/// by `row * cols + col`. Every search entry point starts by resetting them,
/// so a `SearchSpace` may be reused and each call behaves as if freshly
/// allocated.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) visited: Vec<bool>,
    pub(crate) parent: Vec<usize>,
    pub(crate) cost: Vec<i32>,
    pub(crate) nodes_visited: usize,
    seq: u64,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Cell>,
}

impl SearchSpace {
    /// Create a search space for a `rows x cols` grid.
    ///
    /// A shape that no [`Grid`](dronepath_core::Grid) can have yields an
    /// empty space in which every cell is out of range.
    pub fn new(rows: usize, cols: usize) -> Self {
        let (rows, cols, len) = match Grid::cell_count(rows, cols) {
            Ok(len) => (rows, cols, len),
            Err(_) => (0, 0, 0),
        };
        Self {
            rows,
            cols,
            visited: vec![false; len],
            parent: vec![NO_PARENT; len],
            cost: vec![UNREACHABLE; len],
            nodes_visited: 0,
            seq: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.visited.fill(false);
        self.parent.fill(NO_PARENT);
        self.cost.fill(UNREACHABLE);
        self.nodes_visited = 0;
        self.seq = 0;
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Cell` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, c) = (c.row as usize, c.col as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        Cell::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    // -----------------------------------------------------------------------
    // Shared kernel steps
    // -----------------------------------------------------------------------

    /// Count `idx` as visited without touching its flag.
    #[inline]
    pub(crate) fn tally(&mut self, idx: usize) {
        self.nodes_visited += 1;
        log::trace!("visit #{} at {}", self.nodes_visited, self.cell(idx));
    }

    /// Mark `idx` visited and count it.
    #[inline]
    pub(crate) fn settle(&mut self, idx: usize) {
        self.visited[idx] = true;
        self.tally(idx);
    }

    /// A heap entry stamped with the next push sequence number.
    #[inline]
    pub(crate) fn entry(&mut self, idx: usize, key: i32) -> HeapEntry {
        self.seq += 1;
        HeapEntry {
            idx,
            key,
            seq: self.seq,
        }
    }

    /// Package the outcome. `goal` is the goal index if it was reached.
    pub(crate) fn finish(&self, goal: Option<usize>) -> SearchResult {
        SearchResult {
            path: goal.map(|gi| self.reconstruct(gi)),
            nodes_visited: self.nodes_visited,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let result = SearchResult {
            path: Some(vec![Cell::new(0, 0), Cell::new(1, 0)]),
            nodes_visited: 3,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
