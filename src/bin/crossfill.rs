use std::{collections::HashSet, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crossfill::{
    error::Result,
    puzzle::Puzzle,
    render::render,
    solver::{engine::Solver, stats::render_stats_table},
};

/// Fill a crossword grid with words from a vocabulary.
#[derive(Parser)]
#[command(name = "crossfill", version, about)]
struct Args {
    /// Structure file: one line per row, `_` for a fillable cell.
    structure: PathBuf,

    /// Word list: one word per line.
    words: PathBuf,

    /// Emit the solved assignment as JSON instead of a letter grid.
    #[arg(long)]
    json: bool,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Abort after this many search nodes.
    #[arg(long)]
    step_limit: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let structure = std::fs::read_to_string(&args.structure)?;
    let puzzle = Puzzle::parse(&structure)?;

    let words = std::fs::read_to_string(&args.words)?;
    let vocabulary: HashSet<String> = words
        .lines()
        .map(|line| line.trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect();

    let solver = match args.step_limit {
        Some(limit) => Solver::with_step_limit(limit),
        None => Solver::new(),
    };
    let (assignment, stats) = solver.solve(&puzzle, &vocabulary)?;

    match assignment {
        None => println!("No solution."),
        Some(assignment) if args.json => {
            let entries: Vec<serde_json::Value> = assignment
                .iter()
                .map(|(var, word)| {
                    serde_json::json!({
                        "row": var.row,
                        "col": var.col,
                        "direction": var.direction,
                        "length": var.length,
                        "word": word,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries).expect("assignment serializes"));
        }
        Some(assignment) => print!("{}", render(&puzzle, &assignment)),
    }

    if args.stats {
        println!("{}", render_stats_table(&stats));
    }

    Ok(())
}
