//! Human-readable output on stdout.

use std::io::Write;

use anyhow::Result;
use pkgenv_core::{EnvironmentSummary, RunReport};

pub fn print_environments(summaries: &[EnvironmentSummary]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Found the following environment information:")?;
    for summary in summaries {
        let marker = if summary.is_current { " (current)" } else { "" };
        writeln!(stdout, "- {}: {}{marker}", summary.name, summary.solution_id)?;
        writeln!(stdout, "  {}", summary.cdn_path)?;
    }
    Ok(())
}

pub fn print_report(report: &RunReport) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let state = if report.created { "created" } else { "existing" };
    writeln!(stdout, "Environment: {} ({state})", report.environment)?;
    writeln!(stdout, "CDN: {}", report.cdn_path)?;
    if !report.added_bindings.is_empty() {
        writeln!(stdout, "New component ids:")?;
        for binding in &report.added_bindings {
            writeln!(
                stdout,
                "  {} {}",
                binding.component_id, binding.manifest_location
            )?;
        }
    }
    writeln!(
        stdout,
        "{} manifest(s) updated, {} file(s) written",
        report.manifest_updates.len(),
        report.written.len()
    )?;
    Ok(())
}
