//! Descriptive statistics over a numeric dataset

use std::cmp::Ordering;
use std::path::Path;

use crate::core::diagnostics::Diagnostics;
use crate::core::error::ToolError;
use crate::core::file_reader::read_numbers;
use crate::core::model::{NumericDataset, StatisticsRecord};
use crate::core::util::square_root;

/// Compute count, mean, median, mode, population variance and standard
/// deviation.
///
/// Mode ties resolve to the smallest value. Fails with
/// [`ToolError::EmptyDataset`] when there is nothing to compute on.
pub fn compute_statistics(dataset: &NumericDataset) -> Result<StatisticsRecord, ToolError> {
    let values = dataset.values();
    if values.is_empty() {
        return Err(ToolError::EmptyDataset);
    }

    let count = values.len();
    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let median = median_of_sorted(&sorted);
    let mode = mode_of_sorted(&sorted);

    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let standard_deviation = square_root(variance);

    Ok(StatisticsRecord {
        count,
        mean,
        median,
        mode,
        standard_deviation,
        variance,
    })
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

// Runs of equal values are adjacent once sorted. Only a strictly longer run
// replaces the current best, so the first (smallest) value wins a tie.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_run = 0usize;
    let mut start = 0usize;

    while start < sorted.len() {
        let value = sorted[start];
        let mut end = start + 1;
        while end < sorted.len() && sorted[end] == value {
            end += 1;
        }
        if end - start > best_run {
            best = value;
            best_run = end - start;
        }
        start = end;
    }

    best
}

/// Load the dataset at `path` and compute its statistics
pub fn analyze(
    path: &Path,
    diagnostics: &mut dyn Diagnostics,
) -> Result<StatisticsRecord, ToolError> {
    let dataset = read_numbers(path, diagnostics)?;
    compute_statistics(&dataset)
}
