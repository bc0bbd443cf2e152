//! Data model
//!
//! Every program produces one of these result structures, wrapped in a
//! [`ResultReport`] together with the elapsed time of the run.

use chrono::{DateTime, Local};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::core::paths::Tool;
use crate::core::util::{format_float, round_to};

/// Numbers parsed from an input file, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NumericDataset {
    values: Vec<f64>,
}

impl NumericDataset {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }
}

impl From<Vec<f64>> for NumericDataset {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Descriptive statistics of a non-empty dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsRecord {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub standard_deviation: f64,
    pub variance: f64,
}

/// One decimal value with its base-2 and base-16 forms
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionEntry {
    pub decimal: f64,
    pub binary: String,
    pub hexadecimal: String,
}

impl fmt::Display for ConversionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal: {} | Binary: {} | Hexadecimal: {}",
            format_float(self.decimal),
            self.binary,
            self.hexadecimal
        )
    }
}

/// Conversion entries in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConversionTable {
    pub entries: Vec<ConversionEntry>,
}

/// Word counts keyed by normalized word, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of an already-normalized word.
    /// Empty words are ignored.
    pub fn record(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        match self.index.get(word) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl Serialize for WordFrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

/// A finished result plus the time it took to load and analyze
#[derive(Debug, Clone, Serialize)]
pub struct ResultReport<T> {
    pub tool: Tool,
    /// Input base name as given on the command line
    pub input: String,
    pub generated_at: DateTime<Local>,
    pub result: T,
    /// Seconds, rounded per tool
    pub elapsed_seconds: f64,
}

impl<T> ResultReport<T> {
    pub fn new(tool: Tool, input: impl Into<String>, result: T, elapsed: Duration) -> Self {
        Self {
            tool,
            input: input.into(),
            generated_at: Local::now(),
            result,
            elapsed_seconds: round_to(elapsed.as_secs_f64(), tool.elapsed_precision()),
        }
    }
}
