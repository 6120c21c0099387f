// Tue Jan 13 2026 - Alex

use super::LaunchError;
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::Stdio;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Per-account log file receiving the child's stdout and stderr.
pub struct TaskLog {
    path: PathBuf,
    file: File,
}

impl TaskLog {
    /// Creates `log_dir` if needed and opens `<timestamp>-<username>` for appending.
    ///
    /// Two accounts with the same username starting in the same second
    /// share one file; appending keeps both outputs.
    pub fn open(log_dir: &Path, username: &str, now: DateTime<Local>) -> Result<Self, LaunchError> {
        fs::create_dir_all(log_dir)
            .map_err(|e| LaunchError::LogDirectory(log_dir.to_path_buf(), e))?;

        let path = log_dir.join(file_name(username, now));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LaunchError::LogFile(path.clone(), e))?;

        Ok(Self { path, file })
    }

    /// Two handles on the same file, for stdout and stderr.
    pub fn into_stdio(self) -> Result<(PathBuf, Stdio, Stdio), LaunchError> {
        let stderr = self.file
            .try_clone()
            .map_err(|e| LaunchError::LogFile(self.path.clone(), e))?;

        Ok((self.path, Stdio::from(self.file), Stdio::from(stderr)))
    }
}

pub fn file_name(username: &str, now: DateTime<Local>) -> String {
    let safe: String = username
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    format!("{}-{}", now.format(TIMESTAMP_FORMAT), safe)
}
