//! Input loading
//!
//! The whole file is read into memory. File-level problems (missing file,
//! I/O failure, invalid UTF-8) fail the load; a line that does not parse as a
//! number is reported as a warning and skipped.

use std::fs;
use std::path::Path;

use crate::core::diagnostics::Diagnostics;
use crate::core::error::ToolError;
use crate::core::model::NumericDataset;

/// Read a file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, ToolError> {
    fs::read_to_string(path).map_err(|err| ToolError::from_io(path, err))
}

/// Read a file and return its lines
pub fn read_lines(path: &Path) -> Result<Vec<String>, ToolError> {
    let content = read_text(path)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "read text input");
    Ok(lines)
}

/// Read one number per line.
///
/// Blank lines are ignored. Lines that are not a finite number produce one
/// warning each and are left out of the dataset.
pub fn read_numbers(
    path: &Path,
    diagnostics: &mut dyn Diagnostics,
) -> Result<NumericDataset, ToolError> {
    let content = read_text(path)?;
    let dataset = parse_numbers(&content, diagnostics);
    tracing::debug!(path = %path.display(), values = dataset.len(), "read numeric input");
    Ok(dataset)
}

/// Parse numeric text, one value per line
pub fn parse_numbers(content: &str, diagnostics: &mut dyn Diagnostics) -> NumericDataset {
    let mut dataset = NumericDataset::default();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => dataset.push(value),
            _ => diagnostics.warn(&format!(
                "Invalid data in the file at line {}, skipping: {}",
                idx + 1,
                trimmed
            )),
        }
    }

    dataset
}
