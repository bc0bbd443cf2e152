//! Program identities and the file layout each one reads and writes
//!
//! Input:  `<root>/<dir>/<name>.txt`
//! Output: `<root>/<dir>/<prefix><name>Results.txt`

use serde::Serialize;
use std::path::{Path, PathBuf};

/// The three programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    Statistics,
    Conversion,
    WordCount,
}

impl Tool {
    /// Executable name
    pub fn bin_name(self) -> &'static str {
        match self {
            Tool::Statistics => "compute-statistics",
            Tool::Conversion => "convert-numbers",
            Tool::WordCount => "word-count",
        }
    }

    /// Directory holding both inputs and results
    pub fn dir_name(self) -> &'static str {
        match self {
            Tool::Statistics => "ComputeStatisticsFiles",
            Tool::Conversion => "ConvertNumbersFiles",
            Tool::WordCount => "CountWordsFiles",
        }
    }

    fn output_prefix(self) -> &'static str {
        match self {
            Tool::Statistics => "Statistics",
            Tool::Conversion => "Convertion",
            Tool::WordCount => "WordCount",
        }
    }

    /// Decimal places kept on the elapsed-time trailer
    pub fn elapsed_precision(self) -> u32 {
        match self {
            Tool::Statistics => 5,
            Tool::Conversion | Tool::WordCount => 4,
        }
    }

    pub fn usage(self) -> String {
        format!(
            "Usage: {} <FILE_NAME>\n\
             Reads ./{}/<FILE_NAME>.txt (name given without extension).",
            self.bin_name(),
            self.dir_name()
        )
    }

    pub fn input_path(self, root: &Path, name: &str) -> PathBuf {
        root.join(self.dir_name()).join(format!("{}.txt", name))
    }

    pub fn output_path(self, root: &Path, name: &str) -> PathBuf {
        root.join(self.dir_name())
            .join(format!("{}{}Results.txt", self.output_prefix(), name))
    }
}
