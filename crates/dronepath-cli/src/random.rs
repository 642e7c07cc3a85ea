//! Random grid generation for `--random`.

use std::fmt;
use std::str::FromStr;

use dronepath_core::{CellKind, Grid, StructuralError};
use rand::{Rng, RngExt};

use crate::input::InputError;

/// Grid dimensions written as `ROWSxCOLS`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl FromStr for Dims {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InputError::Dims(s.to_string());
        let (r, c) = s.trim().split_once(['x', 'X']).ok_or_else(bad)?;
        let rows = r.trim().parse().map_err(|_| bad())?;
        let cols = c.trim().parse().map_err(|_| bad())?;
        Ok(Self { rows, cols })
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Fill a `dims` grid with obstacles at roughly `density`, then put the start
/// and goal on two distinct cells chosen uniformly.
pub fn random_grid(dims: Dims, density: f64, rng: &mut impl Rng) -> Result<Grid, InputError> {
    let Dims { rows, cols } = dims;
    let len = match Grid::cell_count(rows, cols) {
        Ok(len) if len >= 2 => len,
        Ok(_) | Err(StructuralError::EmptyGrid) => {
            return Err(InputError::TooSmall { rows, cols });
        }
        Err(e) => return Err(e.into()),
    };

    let mut cells: Vec<CellKind> = (0..len)
        .map(|_| {
            let r: f64 = rng.random();
            if r < density {
                CellKind::Obstacle
            } else {
                CellKind::Open
            }
        })
        .collect();

    let start = rng.random_range(0..len);
    let mut goal = rng.random_range(0..len - 1);
    if goal >= start {
        goal += 1;
    }
    cells[start] = CellKind::Start;
    cells[goal] = CellKind::Goal;

    log::debug!("random {dims} grid, density {density}");
    Ok(Grid::from_cells(rows, cols, cells)?)
}
