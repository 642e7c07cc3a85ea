//! The interactive menu loop: pick a grid, pick an algorithm, see the route.

use std::io::{BufRead, Write};

use dronepath_core::check;
use dronepath_paths::{Algorithm, Engine};

use crate::input::{InputError, normalize_row, parse_number};
use crate::presets;
use crate::render;

/// How a round ended.
#[derive(Debug, PartialEq, Eq)]
enum Round {
    /// A search ran and was reported; ask whether to go again.
    Reported,
    /// The round was abandoned; start over without asking.
    Restart,
}

/// Line-oriented menu over any reader/writer pair.
pub struct Menu<R, W> {
    input: R,
    out: W,
    color: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, color: bool) -> Self {
        Self { input, out, color }
    }

    /// Run rounds until the user declines to continue or input ends.
    pub fn run(&mut self) -> Result<(), InputError> {
        writeln!(self.out, "=== Drone Pathfinding System ===")?;
        loop {
            match self.round() {
                Ok(Round::Restart) => continue,
                Ok(Round::Reported) => {}
                Err(InputError::Eof) => break,
                Err(InputError::Io(e)) => return Err(InputError::Io(e)),
                Err(e) => {
                    log::debug!("menu input rejected: {e}");
                    writeln!(self.out, "Invalid input!")?;
                }
            }

            match self.prompt("\nTry again? (y/n): ") {
                Ok(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
                Ok(_) | Err(InputError::Eof) => break,
                Err(e) => return Err(e),
            }
        }
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    fn round(&mut self) -> Result<Round, InputError> {
        let rows = self.choose_grid()?;
        let (ok, reason) = check(&rows);
        if !ok {
            writeln!(self.out, "Error: {reason}")?;
            return Ok(Round::Restart);
        }
        let engine = Engine::parse(&rows)?;
        render::write_grid(&mut self.out, engine.grid(), None, self.color)?;

        writeln!(self.out, "\nAlgorithms:")?;
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, a.name())?;
        }
        let n = parse_number(&self.prompt("Choose (1-5): ")?)?;
        let Some(&algorithm) = n
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| Algorithm::ALL.get(i))
        else {
            writeln!(self.out, "Invalid choice!")?;
            return Ok(Round::Restart);
        };

        let result = engine.run(algorithm);
        render::write_report(&mut self.out, algorithm, engine.grid(), &result, self.color)?;
        Ok(Round::Reported)
    }

    fn choose_grid(&mut self) -> Result<Vec<String>, InputError> {
        writeln!(self.out, "\n1. Preset grid  2. Custom grid")?;
        let choice = parse_number(&self.prompt("Choose (1-2): ")?)?;
        if choice == 1 {
            let names: Vec<String> = presets::PRESETS
                .iter()
                .enumerate()
                .map(|(i, (name, _))| format!("{}={name}", i + 1))
                .collect();
            writeln!(self.out, "Presets: {}", names.join(" "))?;
            let n = parse_number(&self.prompt("Choose (1-3): ")?)?;
            return Ok(presets::preset(n));
        }

        writeln!(self.out, "Enter rows (e.g. 'S.XG'), type 'done' to finish:")?;
        let mut rows = Vec::new();
        loop {
            let line = self.prompt(&format!("Row {}: ", rows.len() + 1))?;
            let row = normalize_row(&line);
            if row.eq_ignore_ascii_case("done") {
                break;
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    /// Print `text` and read one line. Fails with [`InputError::Eof`] once
    /// input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<String, InputError> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(keys: &str) -> String {
        let mut out = Vec::new();
        Menu::new(keys.as_bytes(), &mut out, false).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn preset_then_bfs() {
        let s = session("1\n1\n2\nn\n");
        assert!(s.contains("Presets: 1=Complex 2=Medium 3=Simple"));
        assert!(s.contains("=== BFS Results ==="));
        assert!(s.contains("Nodes explored: 11"));
        assert!(s.contains("Path found! Length: 9 cells, 8 moves"));
        assert!(s.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn custom_rows_are_normalized() {
        let s = session("2\n s.g \n\ndone\n5\nn\n");
        assert!(s.contains("Row 1: Row 2: Row 2: "));
        assert!(s.contains("=== Greedy Results ==="));
        assert!(s.contains("Route: (0,0) \u{2192} (0,1) \u{2192} (0,2)"));
    }

    #[test]
    fn invalid_grid_restarts_without_asking() {
        let s = session("2\nS.S\n..G\ndone\n");
        assert!(s.contains("Error: Need exactly one S"));
        assert!(!s.contains("Try again?"));
        assert!(s.contains("Goodbye!"));
    }

    #[test]
    fn out_of_range_algorithm_is_an_invalid_choice() {
        let s = session("1\n3\n9\n");
        assert!(s.contains("Invalid choice!"));
        assert!(!s.contains("Results ==="));
    }

    #[test]
    fn negative_numbers_are_choices_not_bad_input() {
        // Any grid choice other than 1 means custom entry.
        let s = session("-1\nS.G\ndone\n-3\n");
        assert!(s.contains("Row 1: "));
        assert!(s.contains("Invalid choice!"));
        assert!(!s.contains("Invalid input!"));
    }

    #[test]
    fn non_numeric_input_asks_to_try_again() {
        let s = session("abc\ny\n1\n3\n4\nn\n");
        assert!(s.contains("Invalid input!"));
        assert!(s.contains("=== A* Results ==="));
    }

    #[test]
    fn walled_off_goal_reports_no_path() {
        let s = session("2\nSX\nXG\ndone\n1\nn\n");
        assert!(s.contains("Nodes explored: 1"));
        assert!(s.contains("No path exists!"));
    }

    #[test]
    fn end_of_input_says_goodbye() {
        let s = session("");
        assert!(s.starts_with("=== Drone Pathfinding System ==="));
        assert!(s.trim_end().ends_with("Goodbye!"));
    }
}
