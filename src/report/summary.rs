// Tue Jan 13 2026 - Alex

use crate::executor::{LaunchFailure, TaskResult};
use crate::orchestrator::BatchOutcome;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// Prints the end-of-batch summary: accounts that could not run,
/// then failures, then successes, then the batch wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, outcome: &BatchOutcome) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write(outcome, &mut out)
    }

    pub fn write<W: Write>(&self, outcome: &BatchOutcome, out: &mut W) -> io::Result<()> {
        self.write_summary(&outcome.results, &outcome.launch_failures, outcome.elapsed, out)
    }

    pub fn write_summary<W: Write>(
        &self,
        results: &[TaskResult],
        launch_failures: &[LaunchFailure],
        total: Duration,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "{}", "Migrated Accounts".cyan().bold())?;

        if !launch_failures.is_empty() {
            writeln!(out, "{} ({})", "Could not run".red().bold(), launch_failures.len())?;
            for failure in launch_failures {
                writeln!(out, "\t{}: {}", route(&failure.result), failure.error)?;
            }
        }

        let failed: Vec<&TaskResult> = results
            .iter()
            .filter(|r| r.launched && !r.succeeded)
            .collect();
        if !failed.is_empty() {
            writeln!(out, "{} ({})", "Failed".red().bold(), failed.len())?;
            for result in failed {
                writeln!(out, "\t{} (exit code {})", line(result), result.exit_code)?;
            }
        }

        let succeeded: Vec<&TaskResult> = results.iter().filter(|r| r.succeeded).collect();
        if !succeeded.is_empty() {
            writeln!(out, "{} ({})", "Succeeded".green().bold(), succeeded.len())?;
            for result in succeeded {
                writeln!(out, "\t{}", line(result))?;
            }
        }

        writeln!(out, "Total duration: {:.2} seconds", total.as_secs_f64())?;
        Ok(())
    }
}

fn route(result: &TaskResult) -> String {
    format!(
        "{}::{} to {}::{}",
        result.source_host,
        result.account.source_username(),
        result.dest_host,
        result.account.dest_username()
    )
}

fn line(result: &TaskResult) -> String {
    format!("{} in {:.2} seconds", route(result), result.duration().as_secs_f64())
}
