use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use arc_patterns::inspect::{run_inspection, InspectConfig};

/// Groups ARC task grids by color and prints their connected patterns.
#[derive(Parser)]
#[command(name = "arc-patterns")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the task `.json` files.
    data_dir: PathBuf,
    /// Only inspect the task with this id (file name without `.json`).
    #[arg(long)]
    task: Option<String>,
    /// Stop after this many tasks.
    #[arg(long)]
    max_tasks: Option<usize>,
    /// Count diagonal neighbours as adjacent.
    #[arg(long)]
    diagonal: bool,
    /// Print only the per-task summary.
    #[arg(long)]
    summary: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .parse_default_env()
        .init();

    let config = InspectConfig {
        data_dir: cli.data_dir,
        task: cli.task,
        max_tasks: cli.max_tasks,
        count_diagonal: cli.diagonal,
    };

    let report = run_inspection(&config)?;
    if cli.summary {
        report.print_summary();
    } else {
        report.print_detail();
    }
    Ok(())
}
