//! Built-in grids offered by the menu and by `--preset`.

/// Preset 1: the only route detours along the bottom row.
pub const COMPLEX: &[&str] = &["S.X.G", ".X.X.", "....."];

/// Preset 2: a wall in the middle with routes on either side.
pub const MEDIUM: &[&str] = &["S...", ".XX.", "...G"];

/// Preset 3: open 2x2 square.
pub const SIMPLE: &[&str] = &["S.", ".G"];

/// Presets in menu order with their display names.
pub const PRESETS: [(&str, &[&str]); 3] = [("Complex", COMPLEX), ("Medium", MEDIUM), ("Simple", SIMPLE)];

/// Rows of preset `n` (1-based). Unknown numbers fall back to preset 1.
pub fn preset(n: i64) -> Vec<String> {
    let rows = match n {
        2 => MEDIUM,
        3 => SIMPLE,
        _ => COMPLEX,
    };
    rows.iter().map(|r| r.to_string()).collect()
}
