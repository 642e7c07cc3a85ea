use std::fmt;
use std::str::FromStr;

use dronepath_core::{Cell, CellKind, Grid, StructuralError};

use crate::space::{SearchResult, SearchSpace};
use crate::traits::Pather;

/// The five search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Dfs,
    Bfs,
    Ucs,
    AStar,
    Greedy,
}

impl Algorithm {
    /// Every strategy, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Ucs,
        Algorithm::AStar,
        Algorithm::Greedy,
    ];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dfs => "DFS",
            Self::Bfs => "BFS",
            Self::Ucs => "UCS",
            Self::AStar => "A*",
            Self::Greedy => "Greedy",
        }
    }

    /// Whether the strategy always returns a minimum-cost route.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::Ucs | Self::AStar)
    }

    /// Run this strategy in `space`.
    pub fn run<P: Pather>(
        self,
        space: &mut SearchSpace,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> SearchResult {
        log::debug!("{self}: searching {start} -> {goal}");
        let result = match self {
            Self::Dfs => space.dfs(pather, start, goal),
            Self::Bfs => space.bfs(pather, start, goal),
            Self::Ucs => space.ucs(pather, start, goal),
            Self::AStar => space.astar(pather, start, goal),
            Self::Greedy => space.greedy(pather, start, goal),
        };
        match result.steps() {
            Some(steps) => log::debug!(
                "{self}: route of {steps} moves, {} cells visited",
                result.nodes_visited
            ),
            None => log::debug!("{self}: no route, {} cells visited", result.nodes_visited),
        }
        result
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown algorithm name passed to [`Algorithm::from_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected dfs, bfs, ucs, astar or greedy)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            "ucs" => Ok(Self::Ucs),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "greedy" => Ok(Self::Greedy),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// One-shot search: locate start and goal in `grid` and run `kind`.
///
/// Fails only if the grid does not hold exactly one start and one goal. An
/// unreachable goal is a normal result with `path: None`.
pub fn search(kind: Algorithm, grid: &Grid) -> Result<SearchResult, StructuralError> {
    let start = grid.locate(CellKind::Start)?;
    let goal = grid.locate(CellKind::Goal)?;
    let mut space = SearchSpace::new(grid.rows(), grid.cols());
    Ok(kind.run(&mut space, grid, start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("dfs".parse(), Ok(Algorithm::Dfs));
        assert_eq!("BFS".parse(), Ok(Algorithm::Bfs));
        assert_eq!(" ucs ".parse(), Ok(Algorithm::Ucs));
        assert_eq!("A*".parse(), Ok(Algorithm::AStar));
        assert_eq!("astar".parse(), Ok(Algorithm::AStar));
        assert_eq!("greedy".parse(), Ok(Algorithm::Greedy));
        assert!("dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse(), Ok(a));
        }
    }

    #[test]
    fn optimal_set() {
        let optimal: Vec<_> = Algorithm::ALL.into_iter().filter(|a| a.is_optimal()).collect();
        assert_eq!(optimal, vec![Algorithm::Bfs, Algorithm::Ucs, Algorithm::AStar]);
    }

    #[test]
    fn search_rejects_grid_without_goal() {
        use CellKind::*;
        let grid = Grid::from_cells(1, 2, vec![Start, Open]).unwrap();
        assert_eq!(
            search(Algorithm::Bfs, &grid),
            Err(StructuralError::Missing(Goal))
        );
    }

    #[test]
    fn single_row_gives_same_route_everywhere() {
        let grid = Grid::parse(&["S.G"]).unwrap();
        let expected = vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        for a in Algorithm::ALL {
            let r = search(a, &grid).unwrap();
            assert_eq!(r.path.as_ref(), Some(&expected), "{a}");
        }
    }
}
