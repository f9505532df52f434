//! Benchmark command
//!
//! Solves many random boards in parallel against one shared vocabulary.

use crate::core::BoardError;
use crate::core::dice::roll_board;
use crate::solver::Boggle;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub boards: usize,
    pub width: usize,
    pub height: usize,
    /// Board `i` is rolled from `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(boards: usize, size: usize, seed: u64) -> Self {
        Self {
            boards,
            width: size,
            height: size,
            seed,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub unique_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Letters of the richest board and its word count
    pub best_board: Option<(String, usize)>,
    /// Found word length -> number of words of that length
    pub length_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Run the benchmark described by `config`
///
/// Every board is solved through a shared, read-only view of the same index,
/// so all worker threads use one vocabulary.
///
/// # Errors
///
/// Returns an error if either board dimension is zero.
pub fn run_benchmark(
    boggle: &Boggle,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, BoardError> {
    let pb = if config.show_progress {
        ProgressBar::new(config.boards as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let solved: Vec<(String, Vec<String>)> = (0..config.boards)
        .into_par_iter()
        .map(|i| -> Result<_, BoardError> {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let board = roll_board(config.width, config.height, &mut rng)?;
            let words = boggle.solve(&board);
            pb.inc(1);
            Ok((String::from_utf8_lossy(board.cells()).into_owned(), words))
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_boards = solved.len();
    let total_words: usize = solved.iter().map(|(_, words)| words.len()).sum();
    let min_words = solved.iter().map(|(_, w)| w.len()).min().unwrap_or(0);
    let max_words = solved.iter().map(|(_, w)| w.len()).max().unwrap_or(0);

    let best_board = solved
        .iter()
        .max_by_key(|(_, words)| words.len())
        .map(|(letters, words)| (letters.clone(), words.len()));

    let mut unique: FxHashSet<&str> = FxHashSet::default();
    let mut length_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for word in solved.iter().flat_map(|(_, words)| words) {
        unique.insert(word.as_str());
        *length_distribution.entry(word.len()).or_insert(0) += 1;
    }

    let average_words = if total_boards > 0 {
        total_words as f64 / total_boards as f64
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        total_boards,
        total_words,
        unique_words: unique.len(),
        average_words,
        min_words,
        max_words,
        best_board,
        length_distribution,
        duration,
        boards_per_second: total_boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
