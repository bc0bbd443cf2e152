//! Print and save the word frequencies of a text file

use filecalc::core::paths::Tool;
use std::process::ExitCode;

fn main() -> ExitCode {
    filecalc::cli::main_for(Tool::WordCount)
}
