//! Structural validation of raw grid rows.
//!
//! Rows are checked in a fixed order and the first violation is reported:
//! non-empty, then row by row for length and alphabet, then exactly one start
//! and exactly one goal.

use crate::error::StructuralError;
use crate::geom::Cell;
use crate::kind::CellKind;

/// Check that `rows` describe a well-formed grid.
///
/// Each row is a string whose characters are the cell symbols. Stops at the
/// first problem found.
pub fn validate<R: AsRef<str>>(rows: &[R]) -> Result<(), StructuralError> {
    let Some(first) = rows.first() else {
        return Err(StructuralError::EmptyGrid);
    };
    let cols = first.as_ref().chars().count();
    if cols == 0 {
        return Err(StructuralError::EmptyGrid);
    }

    let mut starts = 0;
    let mut goals = 0;
    for (r, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let found = row.chars().count();
        if found != cols {
            return Err(StructuralError::RaggedRow {
                row: r,
                expected: cols,
                found,
            });
        }
        for (c, ch) in row.chars().enumerate() {
            match CellKind::from_symbol(ch) {
                Some(CellKind::Start) => starts += 1,
                Some(CellKind::Goal) => goals += 1,
                Some(_) => {}
                None => {
                    return Err(StructuralError::InvalidSymbol {
                        ch,
                        cell: Cell::new(r as i32, c as i32),
                    });
                }
            }
        }
    }

    if starts != 1 {
        return Err(StructuralError::StartCount(starts));
    }
    if goals != 1 {
        return Err(StructuralError::GoalCount(goals));
    }
    Ok(())
}

/// [`validate`] in `(ok, reason)` form, for callers that only print the
/// outcome.
pub fn check<R: AsRef<str>>(rows: &[R]) -> (bool, String) {
    match validate(rows) {
        Ok(()) => (true, "Valid".to_string()),
        Err(e) => (false, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_presets() {
        assert_eq!(validate(&["S.X.G", ".X.X.", "....."]), Ok(()));
        assert_eq!(validate(&["S...", ".XX.", "...G"]), Ok(()));
        assert_eq!(validate(&["S.", ".G"]), Ok(()));
    }

    #[test]
    fn rejects_empty() {
        let none: [&str; 0] = [];
        assert_eq!(validate(&none), Err(StructuralError::EmptyGrid));
        assert_eq!(validate(&["", ""]), Err(StructuralError::EmptyGrid));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            validate(&["S.G", "..", "..."]),
            Err(StructuralError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_unknown_symbol_with_position() {
        assert_eq!(
            validate(&["S.G", ".#."]),
            Err(StructuralError::InvalidSymbol {
                ch: '#',
                cell: Cell::new(1, 1)
            })
        );
    }

    #[test]
    fn duplicate_start_is_named() {
        let rows = ["S.S", "..G"];
        assert_eq!(validate(&rows), Err(StructuralError::StartCount(2)));
        let (ok, reason) = check(&rows);
        assert!(!ok);
        assert!(reason.contains("exactly one S"), "{reason}");
    }

    #[test]
    fn goal_count_checked_after_start() {
        assert_eq!(validate(&["S..", "..."]), Err(StructuralError::GoalCount(0)));
        assert_eq!(validate(&["SGG"]), Err(StructuralError::GoalCount(2)));
        // Both wrong: the start violation wins.
        assert_eq!(validate(&["...", "..."]), Err(StructuralError::StartCount(0)));
    }

    #[test]
    fn rows_are_checked_one_at_a_time() {
        // A bad symbol in an earlier row is reported before a later short row.
        assert!(matches!(
            validate(&["S?G", "."]),
            Err(StructuralError::InvalidSymbol { .. })
        ));
        assert!(matches!(
            validate(&["S.G", "?"]),
            Err(StructuralError::RaggedRow { .. })
        ));
    }

    #[test]
    fn check_reports_valid() {
        assert_eq!(check(&["SG"]), (true, "Valid".to_string()));
    }
}
