//! Loading → Analyzing → Reporting
//!
//! The timer brackets load + analyze only; rendering and writing the results
//! file happen after it stops. Nothing is written unless analysis succeeded.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::config::Settings;
use crate::core::diagnostics::Diagnostics;
use crate::core::error::ToolError;
use crate::core::model::ResultReport;
use crate::core::paths::Tool;
use crate::core::render::{write_report, ReportBody, Renderer};
use crate::flows::{conversion, statistics, word_count};

/// Run one tool against input `name`. Returns the path of the results file.
pub fn run_tool(
    tool: Tool,
    name: &str,
    settings: &Settings,
    diagnostics: &mut dyn Diagnostics,
) -> Result<PathBuf> {
    match tool {
        Tool::Statistics => run_pipeline(tool, name, settings, diagnostics, statistics::analyze),
        Tool::Conversion => run_pipeline(tool, name, settings, diagnostics, conversion::analyze),
        Tool::WordCount => {
            run_pipeline(tool, name, settings, diagnostics, |path, _| word_count::analyze(path))
        }
    }
}

fn run_pipeline<T, F>(
    tool: Tool,
    name: &str,
    settings: &Settings,
    diagnostics: &mut dyn Diagnostics,
    analyze: F,
) -> Result<PathBuf>
where
    T: ReportBody + Serialize,
    F: FnOnce(&Path, &mut dyn Diagnostics) -> Result<T, ToolError>,
{
    let input = tool.input_path(&settings.root, name);
    let output = tool.output_path(&settings.root, name);
    tracing::info!(tool = tool.bin_name(), input = %input.display(), "starting");

    let started = Instant::now();
    let result = analyze(&input, diagnostics)?;
    let report = ResultReport::new(tool, name, result, started.elapsed());
    tracing::debug!(elapsed = report.elapsed_seconds, "analysis finished");

    let rendered = Renderer::new(settings.format)
        .render(&report)
        .context("Failed to render report")?;
    println!("{}", rendered.trim_end());

    write_report(&report, &output)
        .with_context(|| format!("Failed to write results to '{}'", output.display()))?;
    tracing::info!(output = %output.display(), "results written");

    Ok(output)
}
