//! Renderer module
//!
//! Turns a [`ResultReport`] into text (console and results file) or JSON
//! (console only).

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::model::{
    ConversionTable, ResultReport, StatisticsRecord, WordFrequencyTable,
};
use crate::core::util::format_float;

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Text layout of a result structure
pub trait ReportBody {
    /// First line of the report
    fn heading(&self, input: &str) -> String;

    /// One line per field or entry, in definition order
    fn lines(&self) -> Vec<String>;
}

impl ReportBody for StatisticsRecord {
    fn heading(&self, _input: &str) -> String {
        "Descriptive Statistics".to_string()
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("Count: {}", self.count),
            format!("Mean: {}", format_float(self.mean)),
            format!("Median: {}", format_float(self.median)),
            format!("Mode: {}", format_float(self.mode)),
            format!(
                "Standard Deviation: {}",
                format_float(self.standard_deviation)
            ),
            format!("Variance: {}", format_float(self.variance)),
        ]
    }
}

impl ReportBody for ConversionTable {
    fn heading(&self, _input: &str) -> String {
        "Conversion Results".to_string()
    }

    fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.to_string()).collect()
    }
}

impl ReportBody for WordFrequencyTable {
    fn heading(&self, input: &str) -> String {
        format!("Word\tCount of {}", input)
    }

    fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(word, count)| format!("{}\t{}", word, count))
            .collect()
    }
}

/// Render the plain-text report: heading, body, blank line, elapsed trailer
pub fn render_text<T: ReportBody>(report: &ResultReport<T>) -> String {
    let mut out = report.result.heading(&report.input);
    out.push('\n');
    for line in report.result.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!(
        "\nElapsed Time: {} seconds\n",
        format_float(report.elapsed_seconds)
    ));
    out
}

/// Renderer for reports
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T: ReportBody + Serialize>(
        &self,
        report: &ResultReport<T>,
    ) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(render_text(report)),
            OutputFormat::Json => serde_json::to_string_pretty(report),
        }
    }
}

/// Write the text report to `path`, replacing any previous results
pub fn write_report<T: ReportBody>(report: &ResultReport<T>, path: &Path) -> std::io::Result<()> {
    fs::write(path, render_text(report))
}
