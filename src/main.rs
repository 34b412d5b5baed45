//! Tier Optimizer - CLI
//!
//! Prints the best-scoring letter combination for each of the six tiers.

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use std::path::PathBuf;
use tier_optimizer::{
    commands::{OptimizeConfig, run_optimize},
    core::LetterTable,
    optimizer::SearchMode,
    output::{print_report, print_run_summary},
    wordlists::{default_wordlist_path, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "tier_optimizer",
    about = "Find the best-scoring letter combination for each letter tier",
    version,
    author
)]
struct Cli {
    /// Word list file, one word per line (default: wordlist.txt beside the executable)
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Split each tier's search across all CPU cores
    #[arg(short, long)]
    parallel: bool,

    /// Hide progress bars and the run summary
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = match cli.wordlist {
        Some(path) => path,
        None => default_wordlist_path().context("Failed to locate the executable directory")?,
    };
    let dictionary = load_from_file(&path)
        .with_context(|| format!("Failed to load word list from '{}'", path.display()))?;
    info!("loaded {} words from {}", dictionary.len(), path.display());

    let table = LetterTable::standard();
    let mode = if cli.parallel {
        SearchMode::Parallel
    } else {
        SearchMode::Sequential
    };
    let config = OptimizeConfig {
        mode,
        show_progress: !cli.quiet,
    };

    let report = run_optimize(&table, &dictionary, config);

    print_report(&report);
    if !cli.quiet {
        print_run_summary(&report);
    }
    Ok(())
}
