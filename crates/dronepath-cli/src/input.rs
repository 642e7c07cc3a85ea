//! Caller-side input handling: errors and grid text normalization.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dronepath_core::StructuralError;

/// Malformed user input. Never produced by the search engine itself.
#[derive(Debug)]
pub enum InputError {
    /// Standard input closed.
    Eof,
    /// Expected a whole number.
    NotANumber(String),
    /// `--random` dimensions not of the form `ROWSxCOLS`.
    Dims(String),
    /// Random grid too small to hold both a start and a goal.
    TooSmall { rows: usize, cols: usize },
    /// The grid itself is malformed.
    Grid(StructuralError),
    /// A grid file could not be read.
    ReadFile { path: PathBuf, source: io::Error },
    /// Terminal I/O failed.
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => f.write_str("unexpected end of input"),
            Self::NotANumber(s) => write!(f, "not a number: \u{201c}{s}\u{201d}"),
            Self::Dims(s) => write!(f, "expected ROWSxCOLS, got \u{201c}{s}\u{201d}"),
            Self::TooSmall { rows, cols } => {
                write!(f, "a {rows}x{cols} grid cannot hold both S and G")
            }
            Self::Grid(e) => e.fmt(f),
            Self::ReadFile { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::ReadFile { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StructuralError> for InputError {
    fn from(e: StructuralError) -> Self {
        Self::Grid(e)
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Trim a typed row and upper-case it, so `s.xg` reads as `S.XG`.
pub fn normalize_row(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Normalize rows, dropping blank ones.
pub fn normalize_rows<I, S>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .map(|r| normalize_row(r.as_ref()))
        .filter(|r| !r.is_empty())
        .collect()
}

/// Read a grid from a text file, one row per line.
pub fn read_grid_file(path: &Path) -> Result<Vec<String>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read grid file {}", path.display());
    Ok(normalize_rows(text.lines()))
}

/// Parse a whole number typed at a prompt. Signs are accepted, so range
/// checks are left to the caller.
pub fn parse_number(s: &str) -> Result<i64, InputError> {
    let s = s.trim();
    s.parse().map_err(|_| InputError::NotANumber(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_trimmed_uppercased_and_blank_lines_dropped() {
        let rows = normalize_rows(["  s.xg ", "", "  ", "..g."]);
        assert_eq!(rows, vec!["S.XG".to_string(), "..G.".to_string()]);
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_number(" 3\n").unwrap(), 3);
        assert!(matches!(parse_number("x"), Err(InputError::NotANumber(s)) if s == "x"));
        assert_eq!(parse_number("-1").unwrap(), -1);
        assert_eq!(parse_number("+2").unwrap(), 2);
        assert!(matches!(parse_number("1.5"), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_grid_file(Path::new("/nonexistent/grid.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/grid.txt"), "{err}");
    }

    #[test]
    fn grid_errors_keep_their_reason() {
        let err: InputError = StructuralError::StartCount(2).into();
        assert!(err.to_string().starts_with("Need exactly one S"));
    }
}
