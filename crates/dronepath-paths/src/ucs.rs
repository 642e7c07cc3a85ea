use std::collections::BinaryHeap;

use dronepath_core::Cell;

use crate::space::{HeapEntry, SearchResult, SearchSpace};
use crate::traits::Pather;

impl SearchSpace {
    /// Uniform-cost search from `start` to `goal`.
    ///
    /// The frontier is a min-heap keyed by cumulative cost, every move
    /// costing 1. A neighbor is re-pushed whenever a strictly cheaper cost is
    /// found; the older, dearer entries stay in the heap and are discarded
    /// when popped after the cell has been settled. Returns a minimum-cost
    /// route.
    pub fn ucs<P: Pather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchResult {
        self.reset();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return self.finish(None);
        };

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        self.cost[start_idx] = 0;
        open.push(self.entry(start_idx, 0));

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries.
            if self.visited[ci] {
                continue;
            }
            self.settle(ci);

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = current.key;
            nbuf.clear();
            pather.neighbors(self.cell(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + 1;
                if tentative >= self.cost[ni] {
                    continue;
                }
                self.cost[ni] = tentative;
                self.parent[ni] = ci;
                let e = self.entry(ni, tentative);
                open.push(e);
            }
        };

        self.nbuf = nbuf;
        self.finish(found.then_some(goal_idx))
    }
}

#[cfg(test)]
mod tests {
    use dronepath_core::{CellKind, Grid};

    use super::*;

    fn run(rows: &[&str]) -> SearchResult {
        let grid = Grid::parse(rows).unwrap();
        let start = grid.locate(CellKind::Start).unwrap();
        let goal = grid.locate(CellKind::Goal).unwrap();
        SearchSpace::new(grid.rows(), grid.cols()).ucs(&grid, start, goal)
    }

    /// Directed links between cells of a 2x5 space, ignoring adjacency. The
    /// shortcut through (1,3) and (1,4) looks cheap to the heuristic but
    /// reaches (0,2) one move later than the route through (0,1).
    struct Links(Vec<(Cell, Vec<Cell>)>);

    impl Pather for Links {
        fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
            if let Some((_, out)) = self.0.iter().find(|(from, _)| *from == c) {
                buf.extend_from_slice(out);
            }
        }
    }

    fn shortcut_graph() -> Links {
        let c = Cell::new;
        Links(vec![
            (c(0, 0), vec![c(1, 3), c(0, 1)]),
            (c(1, 3), vec![c(1, 4)]),
            (c(1, 4), vec![c(0, 2)]),
            (c(0, 1), vec![c(0, 2)]),
            (c(0, 2), vec![c(1, 2)]),
            (c(1, 2), vec![c(0, 4)]),
        ])
    }

    fn shortcut_route() -> Vec<Cell> {
        vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(0, 4),
        ]
    }

    #[test]
    fn expands_in_cost_layers() {
        let r = run(&["....", "....", "S..G"]);
        assert_eq!(
            r.path.unwrap(),
            vec![
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(2, 3)
            ]
        );
        // All six cells closer than the goal, then two of the three cost-3
        // cells pushed before it.
        assert_eq!(r.nodes_visited, 9);
    }

    #[test]
    fn matches_breadth_first_on_detour() {
        let r = run(&["S.X.G", ".X.X.", "....."]);
        assert_eq!(r.steps(), Some(8));
        assert_eq!(r.nodes_visited, 11);
    }

    #[test]
    fn equal_cost_rediscovery_keeps_first_parent() {
        // Cost order settles (0,1) before (1,4), so (0,2) is pushed once with
        // g = 2 and the later g = 3 offer from (1,4) is refused.
        let mut space = SearchSpace::new(2, 5);
        let r = space.ucs(&shortcut_graph(), Cell::new(0, 0), Cell::new(0, 4));
        assert_eq!(r.path.unwrap(), shortcut_route());
        assert_eq!(r.nodes_visited, 7);
        let x = space.idx(Cell::new(0, 2)).unwrap();
        assert_eq!(space.parent[x], space.idx(Cell::new(0, 1)).unwrap());
    }

    #[test]
    fn no_route_is_not_an_error() {
        let r = run(&["S.X", "..X", "XXG"]);
        assert_eq!(r.path, None);
        assert_eq!(r.nodes_visited, 4);
    }
}
