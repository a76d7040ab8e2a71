//! Anagram Toolkit - CLI
//!
//! Batch anagram reporting, interactive lookup, word-length histograms, and
//! a patience card-game simulator.

use anagram_toolkit::{
    commands::{length_distribution, run_query, run_report, run_simulation, run_single_game},
    core::Registry,
    output::{print_length_histogram, print_report, print_simulation},
    wordlists::load_lines,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "anagram_toolkit",
    about = "Anagram grouping, word statistics, and a patience simulator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group a word file into anagrams and print aggregate statistics
    Report {
        /// Word file, one word per line
        file: String,
    },

    /// Interactively look up anagrams of words typed on stdin
    Query {
        /// Word file, one word per line
        file: String,
    },

    /// Histogram of word lengths in a file
    Lengths {
        /// Word file, one word per line
        file: String,
    },

    /// Simulate games of patience and chart the outcomes
    Patience {
        /// Number of games to simulate
        #[arg(short = 'n', long, default_value = "10000")]
        games: usize,

        /// Seed for reproducible runs (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Play a single game with a move-by-move trace instead
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { file } => run_report_command(&file),
        Commands::Query { file } => run_query_command(&file),
        Commands::Lengths { file } => run_lengths_command(&file),
        Commands::Patience {
            games,
            seed,
            verbose,
        } => {
            run_patience_command(games, seed, verbose);
            Ok(())
        }
    }
}

fn run_report_command(file: &str) -> Result<()> {
    let words = load_lines(file).with_context(|| format!("Failed to read word file '{file}'"))?;
    let result = run_report(words)?;
    print_report(&result);
    Ok(())
}

fn run_query_command(file: &str) -> Result<()> {
    let words = load_lines(file).with_context(|| format!("Failed to read word file '{file}'"))?;
    let registry = Registry::build(words)?;

    println!("Loaded {} anagram groups from {file}", registry.len());
    run_query(&registry).map_err(|e| anyhow::anyhow!(e))
}

fn run_lengths_command(file: &str) -> Result<()> {
    let words = load_lines(file).with_context(|| format!("Failed to read word file '{file}'"))?;
    print_length_histogram(file, &length_distribution(&words));
    Ok(())
}

fn run_patience_command(games: usize, seed: Option<u64>, verbose: bool) {
    if verbose {
        run_single_game(seed);
    } else {
        let result = run_simulation(games, seed);
        print_simulation(&result);
    }
}
