use std::collections::BinaryHeap;

use dronepath_core::Cell;

use crate::distance::manhattan;
use crate::space::{HeapEntry, NO_PARENT, SearchResult, SearchSpace};
use crate::traits::Pather;

impl SearchSpace {
    /// Greedy best-first search from `start` to `goal`.
    ///
    /// The heap is keyed by the Manhattan distance to the goal alone. Cells
    /// are settled when popped, as in [`dfs`](Self::dfs), and keep the
    /// predecessor that first pushed them; costs are never compared, so the
    /// route may be longer than necessary.
    pub fn greedy<P: Pather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchResult {
        self.reset();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return self.finish(None);
        };

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        open.push(self.entry(start_idx, manhattan(start, goal)));

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;
            if self.visited[ci] {
                continue;
            }
            self.settle(ci);

            if ci == goal_idx {
                break 'search true;
            }

            nbuf.clear();
            pather.neighbors(self.cell(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                if self.parent[ni] == NO_PARENT {
                    self.parent[ni] = ci;
                }
                let e = self.entry(ni, manhattan(np, goal));
                open.push(e);
            }
        };

        self.nbuf = nbuf;
        self.finish(found.then_some(goal_idx))
    }
}
