use clap::Parser;

use vinculum::examples::sudoku::{puzzle, to_grid, Cell};
use vinculum::solver::{engine::SolverEngine, stats::render_stats_table};

/// Solve a square grid puzzle.
#[derive(Parser, Debug)]
struct Args {
    /// Block size; the grid is block^2 x block^2 (2 = 4x4, 3 = 9x9).
    #[arg(long, default_value_t = 2)]
    block: usize,

    /// Givens as row-major digits, `0` or `.` for blanks. Defaults to an
    /// empty grid.
    #[arg(long)]
    givens: Option<String>,

    /// Print per-arc propagation statistics after solving.
    #[arg(long)]
    stats: bool,
}

pub fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let size = args.block * args.block;

    let mut givens = Vec::new();
    if let Some(text) = &args.givens {
        for (i, ch) in text.chars().filter(|c| !c.is_whitespace()).enumerate() {
            if let Some(digit) = ch.to_digit(10) {
                if digit != 0 {
                    givens.push((Cell::new(i / size, i % size), digit as i64));
                }
            }
        }
    }

    let csp = puzzle(args.block, &givens);
    let engine = SolverEngine::default();

    match engine.solve(&csp) {
        Ok((Some(solution), stats)) => {
            println!(
                "Solved in {} steps ({} backtracks, {} revisions):",
                stats.steps, stats.backtracks, stats.revisions
            );
            for row in to_grid(&solution, args.block) {
                let rendered: Vec<String> = row.iter().map(i64::to_string).collect();
                println!("{}", rendered.join(" "));
            }
            if args.stats {
                println!("{}", render_stats_table(&stats, csp.constraints()));
            }
        }
        Ok((None, stats)) => {
            println!(
                "No solution exists ({} steps, {} backtracks).",
                stats.steps, stats.backtracks
            );
        }
        Err(e) => eprintln!("An error occurred: {e}"),
    }
}
