use dronepath_core::Cell;

use crate::space::{NO_PARENT, SearchSpace};

impl SearchSpace {
    /// Walk predecessor links back from `terminal` to the search root and
    /// return the route in root-to-terminal order.
    ///
    /// The root is the first cell found without a predecessor.
    pub(crate) fn reconstruct(&self, terminal: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut ci = terminal;
        while ci != NO_PARENT {
            path.push(self.cell(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_chain_back_to_root() {
        // 1x4 strip: 0 <- 1 <- 2 <- 3
        let mut space = SearchSpace::new(1, 4);
        space.parent[1] = 0;
        space.parent[2] = 1;
        space.parent[3] = 2;
        assert_eq!(
            space.reconstruct(3),
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(0, 3)
            ]
        );
    }

    #[test]
    fn root_alone_is_a_single_cell_route() {
        let space = SearchSpace::new(2, 2);
        assert_eq!(space.reconstruct(3), vec![Cell::new(1, 1)]);
    }

    #[test]
    fn chain_may_turn_corners() {
        // 2x2: 0 -> 2 -> 3
        let mut space = SearchSpace::new(2, 2);
        space.parent[2] = 0;
        space.parent[3] = 2;
        assert_eq!(
            space.reconstruct(3),
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }
}
