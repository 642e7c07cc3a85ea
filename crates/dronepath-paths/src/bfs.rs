use std::collections::VecDeque;

use dronepath_core::Cell;

use crate::space::{SearchResult, SearchSpace};
use crate::traits::Pather;

impl SearchSpace {
    /// Breadth-first search from `start` to `goal`.
    ///
    /// Cells are marked visited and given their predecessor when enqueued, so
    /// each cell enters the queue at most once. Every move costs 1, which
    /// makes the route found a shortest one.
    pub fn bfs<P: Pather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchResult {
        self.reset();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return self.finish(None);
        };

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.visited[start_idx] = true;
        queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = queue.pop_front() {
            self.tally(ci);
            if ci == goal_idx {
                found = true;
                break;
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
                self.visited[ni] = true;
                self.parent[ni] = ci;
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        self.finish(found.then_some(goal_idx))
    }
}
