use dronepath_core::{Cell, CellKind, Grid, StructuralError};

use crate::algorithm::Algorithm;
use crate::space::{SearchResult, SearchSpace};

/// A validated grid with its start and goal located, ready to be searched.
///
/// `Engine` is immutable: each [`run`](Self::run) allocates its own
/// [`SearchSpace`], so a shared `&Engine` can serve several searches at once.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    start: Cell,
    goal: Cell,
}

impl Engine {
    /// Wrap `grid`, locating its start and goal.
    ///
    /// Fails if either is missing or duplicated, even when the grid was
    /// built without going through the validator.
    pub fn new(grid: Grid) -> Result<Self, StructuralError> {
        let start = grid.locate(CellKind::Start)?;
        let goal = grid.locate(CellKind::Goal)?;
        log::debug!(
            "engine ready: {}x{} grid, start {start}, goal {goal}",
            grid.rows(),
            grid.cols()
        );
        Ok(Self { grid, start, goal })
    }

    /// Validate raw rows and build an engine over them.
    pub fn parse<R: AsRef<str>>(rows: &[R]) -> Result<Self, StructuralError> {
        Self::new(Grid::parse(rows)?)
    }

    /// The searched grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Search with `algorithm`. Never fails: an unreachable goal yields
    /// `path: None`.
    pub fn run(&self, algorithm: Algorithm) -> SearchResult {
        let mut space = SearchSpace::new(self.grid.rows(), self.grid.cols());
        algorithm.run(&mut space, &self.grid, self.start, self.goal)
    }

    /// Run every algorithm, in [`Algorithm::ALL`] order.
    pub fn run_all(&self) -> Vec<(Algorithm, SearchResult)> {
        Algorithm::ALL
            .into_iter()
            .map(|a| (a, self.run(a)))
            .collect()
    }
}
