//! `dronepath`: route a drone across an occupancy grid.
//!
//! Usage:
//!   dronepath                          # interactive menu
//!   dronepath --preset 2 -a bfs
//!   dronepath --rows S.X.G,.X.X.,..... --all
//!   dronepath --random 12x20 --density 0.3 --seed 7 --json
//!
//! Set `RUST_LOG=dronepath_paths=trace` to watch the search expand.

mod input;
mod menu;
mod presets;
mod random;
mod render;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use dronepath_core::Grid;
use dronepath_paths::{Algorithm, Engine, SearchResult};

use input::InputError;
use random::Dims;

/// Route a drone between S and G on an occupancy grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in grid: 1=Complex 2=Medium 3=Simple
    #[arg(short, long, group = "source", value_parser = clap::value_parser!(u32).range(1..=3))]
    preset: Option<u32>,

    /// Grid rows separated by commas, e.g. "S.X.G,.X.X.,....."
    #[arg(short, long, group = "source", value_delimiter = ',')]
    rows: Option<Vec<String>>,

    /// Read grid rows from a text file, one row per line
    #[arg(short, long, group = "source")]
    file: Option<PathBuf>,

    /// Generate a random ROWSxCOLS grid
    #[arg(long, group = "source")]
    random: Option<Dims>,

    /// Obstacle density for --random, between 0 and 1
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Seed for --random; omit for a different grid every run
    #[arg(long)]
    seed: Option<u64>,

    /// Search algorithm: dfs, bfs, ucs, astar or greedy
    #[arg(short, long, default_value = "astar")]
    algorithm: Algorithm,

    /// Run every algorithm and print a comparison
    #[arg(long)]
    all: bool,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Disable colored grid output
    #[arg(long)]
    no_color: bool,
}

impl Args {
    /// The grid named on the command line, or `None` for the interactive
    /// menu.
    fn grid(&self) -> Result<Option<Grid>, InputError> {
        let rows = if let Some(n) = self.preset {
            presets::preset(i64::from(n))
        } else if let Some(rows) = &self.rows {
            input::normalize_rows(rows)
        } else if let Some(path) = &self.file {
            input::read_grid_file(path)?
        } else if let Some(dims) = self.random {
            let density = self.density.clamp(0.0, 1.0);
            let grid = match self.seed {
                Some(seed) => random::random_grid(dims, density, &mut StdRng::seed_from_u64(seed))?,
                None => random::random_grid(dims, density, &mut rand::rng())?,
            };
            return Ok(Some(grid));
        } else {
            return Ok(None);
        };
        Ok(Some(Grid::parse(&rows)?))
    }

    fn color(&self) -> bool {
        !self.no_color && io::stdout().is_terminal()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    algorithm: Algorithm,
    #[serde(flatten)]
    result: &'a SearchResult,
}

fn report<W: Write>(out: &mut W, args: &Args, engine: &Engine) -> Result<(), InputError> {
    let results = if args.all {
        engine.run_all()
    } else {
        vec![(args.algorithm, engine.run(args.algorithm))]
    };

    if args.json {
        let reports: Vec<JsonReport<'_>> = results
            .iter()
            .map(|(algorithm, result)| JsonReport {
                algorithm: *algorithm,
                result,
            })
            .collect();
        let text = serde_json::to_string_pretty(&reports).map_err(io::Error::from)?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    let color = args.color();
    render::write_grid(out, engine.grid(), None, color)?;
    for (algorithm, result) in &results {
        render::write_report(out, *algorithm, engine.grid(), result, color)?;
    }
    if results.len() > 1 {
        render::write_comparison(out, &results)?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), InputError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.grid()? {
        Some(grid) => {
            let engine = Engine::new(grid)?;
            report(&mut out, args, &engine)
        }
        None => {
            let stdin = io::stdin();
            menu::Menu::new(stdin.lock(), out, args.color()).run()
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{args:?}");

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
