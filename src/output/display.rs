//! Display functions for command results

use super::formatters::{board_rows, create_progress_bar, length_histogram, word_columns};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board: {}",
        format!("{}x{}", result.board.width(), result.board.height())
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    for row in board_rows(&result.board) {
        println!("   {}", row.bright_white().bold());
    }

    if result.words.is_empty() {
        println!("\n{}", "No words found.".red().bold());
        return;
    }

    println!("\n📖 {}", "Words:".bright_cyan().bold());
    for line in word_columns(&result.words, 6) {
        println!("   {line}");
    }

    if verbose {
        println!("\n📈 {}", "Lengths:".bright_cyan().bold());
        print_length_distribution(&length_histogram(&result.words), result.words.len());

        if let Some(longest) = result.longest_word() {
            println!("   Longest:      {}", longest.to_uppercase().bright_yellow());
        }
        println!("   Time taken:   {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }

    println!();
    println!(
        "{}",
        format!("✅ Found {} words", result.words.len())
            .green()
            .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Distinct words:   {}", result.unique_words);
    if let Some((letters, count)) = &result.best_board {
        println!(
            "   Richest board:    {} ({count} words)",
            letters.to_uppercase().bright_white()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if !result.length_distribution.is_empty() {
        println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
        print_length_distribution(&result.length_distribution, result.total_words);
    }
}

fn print_length_distribution(distribution: &BTreeMap<usize, usize>, total: usize) {
    for (&len, &count) in distribution {
        let pct = (count as f64 / total.max(1) as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
