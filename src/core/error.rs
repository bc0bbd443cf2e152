//! Error taxonomy shared by the three programs

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a run before any report is written.
///
/// Malformed numeric lines are not represented here: they are recovered
/// inside the loader and surfaced as warnings.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrong number of command-line arguments
    #[error("{usage}")]
    Usage { usage: String },

    #[error("File '{}' not found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{}' is not valid UTF-8 text.", path.display())]
    Encoding { path: PathBuf },

    #[error("Cannot compute statistics with an empty list of numbers.")]
    EmptyDataset,
}

impl ToolError {
    /// Classify an I/O error raised while opening or reading `path`
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ToolError::FileNotFound { path },
            std::io::ErrorKind::InvalidData => ToolError::Encoding { path },
            _ => ToolError::Io { path, source },
        }
    }
}
