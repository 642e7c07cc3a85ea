//! Console rendering of grids, routes and search reports.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use dronepath_core::{Cell, CellKind, Grid};
use dronepath_paths::{Algorithm, SearchResult};

pub const LEGEND: &str = "Legend: S=Start, G=Goal, \u{25a0}=Obstacle, *=Path, .=Open";

/// What is drawn in one grid square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Open,
    Obstacle,
    Start,
    Goal,
    Path,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Obstacle => '\u{25a0}',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Path => '*',
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Open => Color::Reset,
            Self::Obstacle => Color::DarkGrey,
            Self::Start => Color::Green,
            Self::Goal => Color::Red,
            Self::Path => Color::Yellow,
        }
    }
}

impl From<CellKind> for Glyph {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Open => Self::Open,
            CellKind::Obstacle => Self::Obstacle,
            CellKind::Start => Self::Start,
            CellKind::Goal => Self::Goal,
        }
    }
}

/// Row-major glyphs for `grid`, with route cells other than S and G shown
/// as [`Glyph::Path`].
pub fn overlay(grid: &Grid, path: Option<&[Cell]>) -> Vec<Glyph> {
    let mut glyphs: Vec<Glyph> = grid.iter().map(|(_, k)| Glyph::from(k)).collect();
    for &c in path.unwrap_or_default() {
        if let Some(i) = grid.index(c) {
            if glyphs[i] == Glyph::Open {
                glyphs[i] = Glyph::Path;
            }
        }
    }
    glyphs
}

/// Print the grid, space separated, followed by the legend.
pub fn write_grid<W: Write>(
    out: &mut W,
    grid: &Grid,
    path: Option<&[Cell]>,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "\nGrid:")?;
    let glyphs = overlay(grid, path);
    for row in glyphs.chunks(grid.cols()) {
        for (i, &g) in row.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            if color {
                queue!(out, SetForegroundColor(g.color()), Print(g.symbol()), ResetColor)?;
            } else {
                write!(out, "{}", g.symbol())?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "{LEGEND}")
}

/// `(r,c) → (r,c) → ...`
pub fn format_route(path: &[Cell]) -> String {
    path.iter()
        .map(Cell::to_string)
        .collect::<Vec<_>>()
        .join(" \u{2192} ")
}

/// Print the outcome of one search, including the grid with the route.
pub fn write_report<W: Write>(
    out: &mut W,
    algorithm: Algorithm,
    grid: &Grid,
    result: &SearchResult,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "\n=== {algorithm} Results ===")?;
    writeln!(out, "Nodes explored: {}", result.nodes_visited)?;
    match &result.path {
        Some(path) => {
            writeln!(
                out,
                "Path found! Length: {} cells, {} moves",
                path.len(),
                path.len().saturating_sub(1)
            )?;
            writeln!(out, "Route: {}", format_route(path))?;
            write_grid(out, grid, Some(path), color)
        }
        None => writeln!(out, "No path exists!"),
    }
}

/// Print a side-by-side summary of several searches on one grid.
pub fn write_comparison<W: Write>(
    out: &mut W,
    results: &[(Algorithm, SearchResult)],
) -> io::Result<()> {
    writeln!(out, "\n{:<8} {:>8} {:>8} {:>8}", "Algo", "Visited", "Cells", "Optimal")?;
    for (algorithm, r) in results {
        let cells = match r.path_len() {
            0 => "-".to_string(),
            n => n.to_string(),
        };
        let optimal = if algorithm.is_optimal() { "yes" } else { "no" };
        writeln!(
            out,
            "{:<8} {:>8} {:>8} {:>8}",
            algorithm.name(),
            r.nodes_visited,
            cells,
            optimal
        )?;
    }
    Ok(())
}
