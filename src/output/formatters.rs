//! Formatting utilities for terminal output

use crate::core::Board;
use std::collections::BTreeMap;

/// Format a board as uppercase rows with spaced letters
#[must_use]
pub fn board_rows(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|&b| char::from(b.to_ascii_uppercase()).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Lay words out in left-aligned columns, `per_line` words to a line
#[must_use]
pub fn word_columns(words: &[String], per_line: usize) -> Vec<String> {
    let width = words.iter().map(String::len).max().unwrap_or(0);

    words
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Count words by length
#[must_use]
pub fn length_histogram(words: &[String]) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for word in words {
        *histogram.entry(word.len()).or_insert(0) += 1;
    }
    histogram
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
