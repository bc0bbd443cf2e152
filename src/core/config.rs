//! Runtime settings
//!
//! The command line only carries the input name; everything else comes from
//! the environment:
//! - `FILECALC_ROOT`: directory the per-program folders live under (default `.`)
//! - `FILECALC_FORMAT`: console rendering, `text` or `json` (default `text`)

use std::path::PathBuf;

use crate::core::render::OutputFormat;

pub const ROOT_VAR: &str = "FILECALC_ROOT";
pub const FORMAT_VAR: &str = "FILECALC_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(root) = lookup(ROOT_VAR).filter(|v| !v.trim().is_empty()) {
            settings.root = PathBuf::from(root);
        }

        if let Some(raw) = lookup(FORMAT_VAR) {
            settings.format = raw.parse().unwrap_or_else(|err| {
                tracing::debug!("{}; falling back to text", err);
                OutputFormat::default()
            });
        }

        settings
    }
}
