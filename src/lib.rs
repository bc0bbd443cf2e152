//! filecalc - small calculators over plain-text files
//!
//! Three programs share this library:
//! - `compute-statistics`: descriptive statistics of a list of numbers
//! - `convert-numbers`: each number in binary and hexadecimal
//! - `word-count`: case-insensitive word frequency
//!
//! Each one prints its results and saves them next to the input file,
//! followed by the elapsed time.

pub mod cli;
pub mod core;
pub mod flows;
