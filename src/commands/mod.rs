//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use solve::{SolveConfig, SolveResult, solve_board, solve_random};
