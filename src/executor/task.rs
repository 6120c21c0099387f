// Tue Jan 13 2026 - Alex

use super::{ExitPolicy, LaunchError, LaunchFailure, TaskLog, TaskResult};
use crate::account::Account;
use crate::command::AssembledCommand;
use crate::config::SyncParameters;
use chrono::Local;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Instant;

/// Runs one assembled command as a child process and times it.
#[derive(Clone)]
pub struct TaskExecutor {
    source_host: String,
    dest_host: String,
    logging_enabled: bool,
    log_dir: PathBuf,
    policy: Arc<dyn ExitPolicy>,
    quiet: bool,
}

impl TaskExecutor {
    pub fn new(params: &SyncParameters) -> Self {
        Self {
            source_host: params.source_host.clone(),
            dest_host: params.dest_host.clone(),
            logging_enabled: params.logging_enabled,
            log_dir: params.log_dir.clone(),
            policy: params.exit_policy(),
            quiet: false,
        }
    }

    /// Demotes per-task dispatch and launch-error lines to `debug`.
    ///
    /// Used while a progress bar owns the terminal; launch errors still
    /// reach the report.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn level(&self, loud: log::Level) -> log::Level {
        if self.quiet {
            log::Level::Debug
        } else {
            loud
        }
    }

    /// Blocks until the child exits.
    ///
    /// A child that ran, whatever its exit code, yields `Ok`. A child
    /// that could not be started yields a [`LaunchFailure`].
    pub fn execute(&self, account: Arc<Account>, command: &AssembledCommand) -> Result<TaskResult, LaunchFailure> {
        let started_at = Local::now();
        let start_time = Instant::now();

        log::log!(
            self.level(log::Level::Info),
            "[{}] Synchronizing account {}",
            started_at.format("%a %b %e %H:%M:%S %Y"),
            account.source_username()
        );

        match self.run(&account, command) {
            Ok((exit_code, log_file)) => {
                let result = TaskResult::completed(
                    account,
                    &self.source_host,
                    &self.dest_host,
                    start_time,
                    exit_code,
                    self.policy.as_ref(),
                )
                .with_log_file(log_file);

                log::debug!(
                    "{} exited with code {} after {:.2}s",
                    result.account.source_username(),
                    exit_code,
                    result.duration().as_secs_f64()
                );
                Ok(result)
            }
            Err(error) => {
                log::log!(self.level(log::Level::Error), "{}: {}", account.source_username(), error);

                Err(LaunchFailure {
                    username: account.source_username().to_string(),
                    error,
                    result: TaskResult::not_launched(
                        account,
                        &self.source_host,
                        &self.dest_host,
                        start_time,
                    ),
                })
            }
        }
    }

    fn run(&self, account: &Account, command: &AssembledCommand) -> Result<(i32, Option<PathBuf>), LaunchError> {
        let mut child_command = command.to_command();
        child_command.stdin(Stdio::null());

        let log_file = if self.logging_enabled {
            let log = TaskLog::open(&self.log_dir, account.source_username(), Local::now())?;
            let (path, stdout, stderr) = log.into_stdio()?;
            child_command.stdout(stdout).stderr(stderr);
            Some(path)
        } else {
            None
        };

        let mut child = child_command.spawn().map_err(|source| LaunchError::Spawn {
            program: command.program().to_string(),
            source,
        })?;

        let status = child.wait().map_err(|source| LaunchError::Wait {
            program: command.program().to_string(),
            source,
        })?;

        Ok((exit_code(status), log_file))
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(super::LAUNCH_FAILURE_EXIT_CODE)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(super::LAUNCH_FAILURE_EXIT_CODE)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;

    fn account(name: &str) -> Arc<Account> {
        Arc::new(Account::new(name, "pw", None, None))
    }

    fn sh(script: &str) -> AssembledCommand {
        AssembledCommand::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    #[test]
    fn test_zero_exit_is_success() {
        let executor = TaskExecutor::new(&SyncParameters::new("h1", "h2"));
        let result = executor.execute(account("a"), &sh("exit 0")).unwrap();

        assert!(result.succeeded);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.source_host, "h1");
        assert_eq!(result.dest_host, "h2");
        assert!(result.end_time >= result.start_time);
    }

    #[test]
    fn test_non_zero_exit_is_failure_not_launch_error() {
        let executor = TaskExecutor::new(&SyncParameters::new("h1", "h2"));
        let result = executor.execute(account("a"), &sh("exit 3")).unwrap();

        assert!(!result.succeeded);
        assert!(result.launched);
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn test_signal_is_reported_as_128_plus_signal() {
        let executor = TaskExecutor::new(&SyncParameters::new("h1", "h2"));
        let result = executor.execute(account("a"), &sh("kill -9 $$")).unwrap();

        assert_eq!(result.exit_code, 137);
        assert!(!result.succeeded);
    }

    #[test]
    fn test_missing_program_is_a_launch_failure() {
        let executor = TaskExecutor::new(&SyncParameters::new("h1", "h2"));
        let command = AssembledCommand::new("/nonexistent/beast-imapsync", Vec::new());
        let failure = executor.execute(account("a"), &command).unwrap_err();

        assert!(matches!(failure.error, LaunchError::Spawn { .. }));
        assert_eq!(failure.username, "a");
        assert!(!failure.result.succeeded);
        assert!(!failure.result.launched);
    }

    #[test]
    fn test_logging_captures_stdout_and_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let params = SyncParameters::new("h1", "h2").with_logging(dir.path().join("log"));
        let executor = TaskExecutor::new(&params);

        let result = executor
            .execute(account("carol"), &sh("echo to-stdout; echo to-stderr >&2"))
            .unwrap();

        let path = result.log_file.expect("log file path");
        assert!(path.file_name().unwrap().to_string_lossy().ends_with("-carol"));

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("to-stdout"));
        assert!(contents.contains("to-stderr"));
    }

    #[test]
    fn test_accepted_exit_codes_override_zero_exit() {
        let params = SyncParameters::new("h1", "h2").with_success_exit_codes(vec![0, 11]);
        let result = TaskExecutor::new(&params).execute(account("a"), &sh("exit 11")).unwrap();

        assert!(result.succeeded);
    }

    #[test]
    fn test_quiet_executor_logs_at_debug() {
        let executor = TaskExecutor::new(&SyncParameters::new("h1", "h2"));

        assert_eq!(executor.level(log::Level::Info), log::Level::Info);
        assert_eq!(executor.level(log::Level::Error), log::Level::Error);

        let quiet = executor.with_quiet(true);
        assert_eq!(quiet.level(log::Level::Info), log::Level::Debug);
        assert_eq!(quiet.level(log::Level::Error), log::Level::Debug);
    }
}
