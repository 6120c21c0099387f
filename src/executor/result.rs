// Tue Jan 13 2026 - Alex

use crate::account::Account;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Exit code recorded for tasks whose child process never ran.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = -1;

/// Decides which exit codes of the external tool count as a successful sync.
pub trait ExitPolicy: Send + Sync {
    fn is_success(&self, exit_code: i32) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroExitPolicy;

impl ExitPolicy for ZeroExitPolicy {
    fn is_success(&self, exit_code: i32) -> bool {
        exit_code == 0
    }
}

#[derive(Debug, Clone)]
pub struct AcceptedExitCodes {
    codes: Vec<i32>,
}

impl AcceptedExitCodes {
    pub fn new(codes: Vec<i32>) -> Self {
        Self { codes }
    }
}

impl ExitPolicy for AcceptedExitCodes {
    fn is_success(&self, exit_code: i32) -> bool {
        exit_code != LAUNCH_FAILURE_EXIT_CODE && self.codes.contains(&exit_code)
    }
}

#[derive(Debug, Clone)]
pub struct TaskResult {
    pub account: Arc<Account>,
    pub source_host: String,
    pub dest_host: String,
    pub start_time: Instant,
    pub end_time: Instant,
    pub exit_code: i32,
    pub succeeded: bool,
    pub launched: bool,
    pub log_file: Option<PathBuf>,
}

impl TaskResult {
    pub fn completed(
        account: Arc<Account>,
        source_host: &str,
        dest_host: &str,
        start_time: Instant,
        exit_code: i32,
        policy: &dyn ExitPolicy,
    ) -> Self {
        Self {
            account,
            source_host: source_host.to_string(),
            dest_host: dest_host.to_string(),
            start_time,
            end_time: Instant::now().max(start_time),
            exit_code,
            succeeded: policy.is_success(exit_code),
            launched: true,
            log_file: None,
        }
    }

    pub fn not_launched(
        account: Arc<Account>,
        source_host: &str,
        dest_host: &str,
        start_time: Instant,
    ) -> Self {
        Self {
            account,
            source_host: source_host.to_string(),
            dest_host: dest_host.to_string(),
            start_time,
            end_time: Instant::now().max(start_time),
            exit_code: LAUNCH_FAILURE_EXIT_CODE,
            succeeded: false,
            launched: false,
            log_file: None,
        }
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn duration(&self) -> Duration {
        self.end_time.saturating_duration_since(self.start_time)
    }
}
