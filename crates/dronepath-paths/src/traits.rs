use dronepath_core::{Cell, Grid};

/// Minimal search interface: provides neighbor enumeration.
pub trait Pather {
    /// Append the traversable neighbors of `c` into `buf`, in expansion
    /// order. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

impl Pather for Grid {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(Grid::neighbors(self, c));
    }
}
