//! Diagnostic sink
//!
//! Loaders and the pipeline never print directly. They report through a
//! [`Diagnostics`] implementation so the computations stay testable.

use colored::Colorize;

/// Receiver for user-facing warnings and errors
pub trait Diagnostics {
    /// A recoverable problem (e.g. a skipped input line)
    fn warn(&mut self, message: &str);

    /// A problem that ends the run
    fn error(&mut self, message: &str);
}

/// Writes diagnostics to stdout, interleaved with normal output
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics;

impl ConsoleDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for ConsoleDiagnostics {
    fn warn(&mut self, message: &str) {
        println!("{} {}", "Warning:".yellow().bold(), message);
    }

    fn error(&mut self, message: &str) {
        println!("{} {}", "Error:".red().bold(), message);
    }
}

/// Severity of a collected diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

/// Collects diagnostics in memory
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    pub entries: Vec<(Level, String)>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(level, _)| *level == Level::Warning)
            .map(|(_, msg)| msg.as_str())
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn warn(&mut self, message: &str) {
        self.entries.push((Level::Warning, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.entries.push((Level::Error, message.to_string()));
    }
}
