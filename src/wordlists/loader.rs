//! Word list loading utilities
//!
//! Turns raw word lists into the sorted, deduplicated, lowercase vocabulary
//! the dictionary index expects.

use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased. Blank lines are skipped, as are lines
/// with anything other than ASCII letters (logged at warn level). The result
/// is sorted and deduplicated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize_words(content.lines()))
}

fn normalize_words<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut words: Vec<String> = lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
                Some(trimmed.to_ascii_lowercase())
            } else {
                warn!("skipping word list entry '{trimmed}': not plain ASCII letters");
                None
            }
        })
        .collect();

    words.sort_unstable();
    words.dedup();
    words
}
