//! Solves the Knights and Knaves puzzles.
//!
//! Run with:
//! ```bash
//! cargo run --example knights -- --formula --count
//! ```

use clap::Parser;
use entail_rs::check::count_models;
use entail_rs::puzzle::{self, Characters};

#[derive(Parser, Debug)]
#[command(author, version, about = "Knights and Knaves solver")]
struct Cli {
    /// Solve only this puzzle (0-3).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..4))]
    puzzle: Option<u8>,

    /// Print each knowledge base formula.
    #[arg(long)]
    formula: bool,

    /// Print the number of models of each knowledge base.
    #[arg(long)]
    count: bool,

    /// Terminal log level.
    #[arg(short, long, default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let characters = Characters::new();
    let queries = characters.symbols();

    let puzzles = puzzle::all(&characters);
    let selected = puzzles
        .iter()
        .enumerate()
        .filter(|(i, _)| args.puzzle.map_or(true, |p| *i == p as usize));

    for (_, puzzle) in selected {
        println!("{}", puzzle.name);
        if puzzle.is_empty() {
            println!("    Not yet implemented.");
            continue;
        }
        if args.formula {
            println!("  formula: {}", puzzle.knowledge);
        }
        if args.count {
            println!("  models: {}", count_models(&puzzle.knowledge)?);
        }
        let time_solve = std::time::Instant::now();
        for symbol in puzzle.solve(&queries)? {
            println!("    {}", symbol);
        }
        log::info!("{} solved in {:?}", puzzle.name, time_solve.elapsed());
    }

    Ok(())
}
