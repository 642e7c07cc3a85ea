use std::collections::BinaryHeap;

use dronepath_core::Cell;

use crate::distance::manhattan;
use crate::space::{HeapEntry, SearchResult, SearchSpace};
use crate::traits::Pather;

impl SearchSpace {
    /// A* search from `start` to `goal` with the Manhattan heuristic.
    ///
    /// Same bookkeeping as [`ucs`](Self::ucs), but the heap is keyed by
    /// `g + h`. On a 4-connected unit-cost grid the heuristic is consistent,
    /// so the route is minimum-cost and no more cells are visited than by
    /// uniform-cost search.
    pub fn astar<P: Pather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchResult {
        self.reset();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return self.finish(None);
        };

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        self.cost[start_idx] = 0;
        open.push(self.entry(start_idx, manhattan(start, goal)));

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

            let current_g = self.cost[ci];
            nbuf.clear();
            pather.neighbors(self.cell(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;
                if tentative_g >= self.cost[ni] {
                    continue;
                }
                self.cost[ni] = tentative_g;
                self.parent[ni] = ci;
                let e = self.entry(ni, tentative_g + manhattan(np, goal));
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
        SearchSpace::new(grid.rows(), grid.cols()).astar(&grid, start, goal)
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
    fn heads_straight_for_the_goal() {
        // Uniform-cost search visits 9 cells here.
        let r = run(&["....", "....", "S..G"]);
        assert_eq!(r.path_len(), 4);
        assert_eq!(r.nodes_visited, 4);
    }

    #[test]
    fn equal_f_ties_go_to_the_earlier_push() {
        // Every cell on a monotone route has f = 4; FIFO order sends the
        // search down column 0 first.
        let r = run(&["S..", "...", "..G"]);
        assert_eq!(
            r.path.unwrap(),
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
        assert_eq!(r.nodes_visited, 9);
    }

    #[test]
    fn cheaper_rediscovery_is_repushed_and_stale_entry_skipped() {
        // (0,2) is first pushed with g = 3 via the shortcut, then with g = 2
        // from (0,1). The g = 3 entry pops before (1,2) and is discarded, so
        // seven distinct cells are visited out of eight pops.
        let mut space = SearchSpace::new(2, 5);
        let r = space.astar(&shortcut_graph(), Cell::new(0, 0), Cell::new(0, 4));
        assert_eq!(r.path.unwrap(), shortcut_route());
        assert_eq!(r.nodes_visited, 7);
        assert_eq!(space.cost[space.idx(Cell::new(0, 2)).unwrap()], 2);
    }

    #[test]
    fn detour_is_still_minimum_cost() {
        let r = run(&["S.X.G", ".X.X.", "....."]);
        assert_eq!(r.steps(), Some(8));
    }
}
