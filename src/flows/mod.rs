//! Flows module - The analyzers and the pipeline that drives them
//!
//! Provides:
//! - statistics: count, mean, median, mode, variance, standard deviation
//! - conversion: decimal to binary and hexadecimal
//! - word_count: case-insensitive word frequency
//! - pipeline: load, analyze, report

pub mod conversion;
pub mod pipeline;
pub mod statistics;
pub mod word_count;
