// Tue Jan 13 2026 - Alex

use super::TaskResult;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Cannot create log directory {0}: {1}")]
    LogDirectory(PathBuf, #[source] io::Error),
    #[error("Cannot open log file {0}: {1}")]
    LogFile(PathBuf, #[source] io::Error),
    #[error("Cannot launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Lost track of `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// A task whose child process never ran to completion.
///
/// Carries a synthesized failing [`TaskResult`] so the batch still
/// holds exactly one result per account.
#[derive(Error, Debug)]
#[error("{username}: {error}")]
pub struct LaunchFailure {
    pub username: String,
    #[source]
    pub error: LaunchError,
    pub result: TaskResult,
}
