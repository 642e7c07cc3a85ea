//! Route search over occupancy grids.
//!
//! This crate provides five interchangeable graph-search strategies that find
//! a route between the unique start and goal of a [`Grid`]:
//!
//! - **Depth-first** search ([`SearchSpace::dfs`])
//! - **Breadth-first** search ([`SearchSpace::bfs`])
//! - **Uniform-cost** search ([`SearchSpace::ucs`])
//! - **A\*** with the Manhattan heuristic ([`SearchSpace::astar`])
//! - **Greedy best-first** search ([`SearchSpace::greedy`])
//!
//! Every strategy reports a [`SearchResult`]: the route (if any) and the
//! number of cells taken off the frontier and marked visited. Callers usually
//! go through [`Engine`] or the one-shot [`search`] function, selecting the
//! strategy with the closed [`Algorithm`] enum.
//!
//! # Guarantees
//!
//! | Strategy | Frontier | Shortest route |
//! |---|---|---|
//! | DFS | stack | no |
//! | BFS | queue | yes |
//! | UCS | heap keyed by `g` | yes |
//! | A\* | heap keyed by `g + h` | yes |
//! | Greedy | heap keyed by `h` | no |
//!
//! Heap ties are broken by push order: the entry pushed first is popped
//! first.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod engine;
mod greedy;
mod path;
mod space;
mod traits;
mod ucs;

pub use algorithm::{Algorithm, ParseAlgorithmError, search};
pub use distance::manhattan;
pub use dronepath_core::{Cell, CellKind, Grid, StructuralError};
pub use engine::Engine;
pub use space::{SearchResult, SearchSpace};
pub use traits::Pather;
