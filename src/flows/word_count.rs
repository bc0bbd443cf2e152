//! Case-insensitive word frequency

use std::path::Path;

use crate::core::error::ToolError;
use crate::core::file_reader::read_lines;
use crate::core::model::WordFrequencyTable;

/// Lowercase a token and keep only its alphanumeric characters
pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Count normalized words across lines, in first-seen order
pub fn count_words<I, S>(lines: I) -> WordFrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = WordFrequencyTable::new();
    for line in lines {
        for token in line.as_ref().split_whitespace() {
            table.record(&normalize_word(token));
        }
    }
    table
}

/// Load the text at `path` and count its words
pub fn analyze(path: &Path) -> Result<WordFrequencyTable, ToolError> {
    let lines = read_lines(path)?;
    Ok(count_words(&lines))
}
