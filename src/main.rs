//! Boggle Solver - CLI
//!
//! Solves given or randomly rolled Boggle boards against a word list.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, solve_board, solve_random},
    core::DictionaryIndex,
    output::{print_benchmark_result, print_solve_result},
    solver::{Boggle, Solver},
    wordlists::{DEFAULT_WORDS, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle solver using prefix-pruned depth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Shortest word to report
    #[arg(short = 'm', long, global = true, default_value = "3")]
    min_len: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific board
    Solve {
        /// Board letters in row-major order
        letters: String,

        /// Board width (inferred for square boards)
        #[arg(long)]
        width: Option<usize>,

        /// Board height (inferred for square boards)
        #[arg(long)]
        height: Option<usize>,

        /// Show word length statistics and timing
        #[arg(long)]
        stats: bool,
    },

    /// Roll a random board from the classic dice and solve it
    Random {
        /// Side length of the square board
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,

        /// Show word length statistics and timing
        #[arg(long)]
        stats: bool,
    },

    /// Benchmark solver throughput on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Side length of the square boards
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Seed of the first board
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Map `-v` repetitions to a log level
///
/// Without any `-v`, `RUST_LOG` decides, falling back to warnings only.
fn verbosity_level(verbosity: u8, env_filter_set: bool) -> Option<LevelFilter> {
    match verbosity {
        0 if env_filter_set => None,
        0 => Some(LevelFilter::Warn),
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn init_logging(verbosity: u8) {
    let env_filter_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = verbosity_level(verbosity, env_filter_set) {
        builder.filter_level(level);
    }
    builder.init();
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str) -> Result<DictionaryIndex> {
    let index = match wordlist {
        "embedded" => DictionaryIndex::build(DEFAULT_WORDS)?,
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            DictionaryIndex::build(words)
                .with_context(|| format!("Invalid word list '{path}'"))?
        }
    };
    info!("loaded {} words from {wordlist}", index.len());
    Ok(index)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let index = load_vocabulary(&cli.wordlist)?;
    let boggle =
        Boggle::from_index(index).with_solver(Solver::new().with_min_word_len(cli.min_len));

    match cli.command {
        Commands::Solve {
            letters,
            width,
            height,
            stats,
        } => {
            let config = SolveConfig::new(letters).with_dimensions(width, height);
            let result = solve_board(&config, &boggle)?;
            print_solve_result(&result, stats);
        }
        Commands::Random {
            size,
            seed,
            stats,
        } => {
            let result = solve_random(size, size, seed, &boggle)?;
            print_solve_result(&result, stats);
        }
        Commands::Benchmark { count, size, seed } => {
            println!("Solving {count} random {size}x{size} boards...");
            let result = run_benchmark(&boggle, &BenchmarkConfig::new(count, size, seed))?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
