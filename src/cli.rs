//! CLI module - Argument parsing, logging setup and exit codes

use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::core::config::Settings;
use crate::core::diagnostics::{ConsoleDiagnostics, Diagnostics};
use crate::core::error::ToolError;
use crate::core::paths::Tool;
use crate::flows::pipeline::run_tool;

/// Exactly one positional argument, taken literally; no flags are recognized.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Base name of the input file, without the .txt extension
    #[arg(value_name = "FILE_NAME")]
    pub name: String,
}

/// Parse the full argv (program name first) for `tool`.
///
/// Exactly one argument after the program name is accepted and taken
/// literally as the name, even if it starts with `-` or is `--`.
pub fn parse_args<I, T>(tool: Tool, args: I) -> Result<Cli, ToolError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let usage = || ToolError::Usage {
        usage: tool.usage(),
    };

    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        tracing::debug!("expected 1 argument, got {}", args.len().saturating_sub(1));
        return Err(usage());
    }

    let name = args.pop().unwrap_or_default();
    let program = args.pop().unwrap_or_default();
    Cli::try_parse_from([program, OsString::from("--"), name]).map_err(|err| {
        tracing::debug!("argument error: {:?}", err.kind());
        usage()
    })
}

/// Route `tracing` events to stderr, filtered by `RUST_LOG` (default: warn)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point shared by the three binaries
pub fn main_for(tool: Tool) -> ExitCode {
    init_logging();

    let cli = match parse_args(tool, std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            println!("{}", err);
            return ExitCode::from(1);
        }
    };

    let settings = Settings::from_env();
    let mut diagnostics = ConsoleDiagnostics::new();

    match run_tool(tool, &cli.name, &settings, &mut diagnostics) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            diagnostics.error(&format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
