// Tue Jan 13 2026 - Alex

pub mod pool;

pub use pool::{PoolStats, SyncTask, TaskOutcome, WorkerPool};

use crate::account::Account;
use crate::command::{CommandAssembler, TemplateError};
use crate::config::SyncParameters;
use crate::executor::{LaunchFailure, TaskExecutor, TaskResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Everything a finished batch produced.
///
/// `results` holds exactly one entry per submitted account, in
/// completion order. Accounts whose command could not be launched
/// appear there with a failing sentinel result and, in addition, in
/// `launch_failures` with the underlying error.
///
/// `elapsed` is the wall-clock time during which at least one task was
/// running, so it never exceeds the sum of the task durations and never
/// falls short of the longest one.
#[derive(Debug)]
pub struct BatchOutcome {
    pub results: Vec<TaskResult>,
    pub launch_failures: Vec<LaunchFailure>,
    pub elapsed: Duration,
    pub stats: PoolStats,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.succeeded).count()
    }

    pub fn has_launch_failures(&self) -> bool {
        !self.launch_failures.is_empty()
    }
}

pub struct Orchestrator {
    assembler: CommandAssembler,
    executor: TaskExecutor,
    pool: WorkerPool,
    show_progress: bool,
}

impl Orchestrator {
    /// Fails when the command template cannot be parsed.
    pub fn new(params: &SyncParameters) -> Result<Self, TemplateError> {
        Ok(Self {
            assembler: CommandAssembler::new(params)?,
            executor: TaskExecutor::new(params),
            pool: WorkerPool::new(params.workers),
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn workers(&self) -> usize {
        self.pool.size()
    }

    /// Synchronizes every account and waits for all of them.
    pub fn run(&self, accounts: Vec<Account>) -> BatchOutcome {
        let tasks: Vec<SyncTask> = accounts
            .into_iter()
            .map(|account| {
                let command = self.assembler.assemble(&account);
                if log::log_enabled!(log::Level::Debug) {
                    log::debug!("{}: {}", account.source_username(), self.assembler.assemble_redacted(&account));
                }
                SyncTask {
                    account: Arc::new(account),
                    command,
                }
            })
            .collect();

        let progress = self.progress_bar(tasks.len() as u64);
        let executor = self.executor
            .clone()
            .with_quiet(progress.as_ref().map_or(false, |pb| !pb.is_hidden()));

        let (outcomes, stats) = self.pool.run(tasks, &executor, |outcome| {
            if let Some(pb) = &progress {
                let username = match outcome {
                    Ok(result) => result.account.source_username(),
                    Err(failure) => failure.username.as_str(),
                };
                pb.set_message(username.to_string());
                pb.inc(1);
            }
        });

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        let mut results = Vec::with_capacity(outcomes.len());
        let mut launch_failures = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(failure) => {
                    results.push(failure.result.clone());
                    launch_failures.push(failure);
                }
            }
        }

        let elapsed = busy_time(&results);

        log::debug!(
            "Batch of {} accounts finished in {:.2}s (peak concurrency {})",
            results.len(),
            elapsed.as_secs_f64(),
            stats.peak_active
        );

        BatchOutcome {
            results,
            launch_failures,
            elapsed,
            stats,
        }
    }

    fn progress_bar(&self, total: u64) -> Option<ProgressBar> {
        if !self.show_progress || total == 0 {
            return None;
        }

        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .ok()?
            .progress_chars("█▓▒░ ");

        let pb = ProgressBar::new(total);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

/// Length of the union of all task intervals.
fn busy_time(results: &[TaskResult]) -> Duration {
    let mut spans: Vec<(Instant, Instant)> = results
        .iter()
        .map(|r| (r.start_time, r.end_time.max(r.start_time)))
        .collect();
    spans.sort_by_key(|(start, _)| *start);

    let mut total = Duration::ZERO;
    let mut current: Option<(Instant, Instant)> = None;

    for (start, end) in spans {
        current = match current {
            Some((cur_start, cur_end)) if start <= cur_end => Some((cur_start, cur_end.max(end))),
            Some((cur_start, cur_end)) => {
                total += cur_end - cur_start;
                Some((start, end))
            }
            None => Some((start, end)),
        };
    }

    if let Some((start, end)) = current {
        total += end - start;
    }
    total
}
