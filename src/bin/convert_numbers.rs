//! Print and save the binary and hexadecimal forms of a list of numbers

use filecalc::core::paths::Tool;
use std::process::ExitCode;

fn main() -> ExitCode {
    filecalc::cli::main_for(Tool::Conversion)
}
