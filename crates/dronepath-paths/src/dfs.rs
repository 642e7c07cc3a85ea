use dronepath_core::Cell;

use crate::space::{NO_PARENT, SearchResult, SearchSpace};
use crate::traits::Pather;

impl SearchSpace {
    /// Depth-first search from `start` to `goal`.
    ///
    /// The frontier is a stack. A cell may be pushed several times; copies
    /// popped after the first are skipped. Each cell keeps the predecessor
    /// that first pushed it. The route found is not necessarily the shortest.
    pub fn dfs<P: Pather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchResult {
        self.reset();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return self.finish(None);
        };

        let mut stack = vec![start_idx];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = stack.pop() else {
                break 'search false;
            };
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
                stack.push(ni);
                if self.parent[ni] == NO_PARENT {
                    self.parent[ni] = ci;
                }
            }
        };

        self.nbuf = nbuf;
        self.finish(found.then_some(goal_idx))
    }
}
