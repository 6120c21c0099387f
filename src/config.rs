// Tue Jan 13 2026 - Alex

use crate::command::DEFAULT_COMMAND_TEMPLATE;
use crate::executor::{AcceptedExitCodes, ExitPolicy, ZeroExitPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_IMAP_PORT: u16 = 993;
pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.csv";
pub const DEFAULT_LOG_DIR: &str = "log";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Process-wide settings shared read-only by every synchronization task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncParameters {
    pub source_host: String,
    pub source_port: u16,
    pub dest_host: String,
    pub dest_port: u16,
    pub dry_run: bool,
    pub command_template: String,
    pub logging_enabled: bool,
    pub log_dir: PathBuf,
    pub workers: usize,
    pub success_exit_codes: Vec<i32>,
}

impl Default for SyncParameters {
    fn default() -> Self {
        Self {
            source_host: String::new(),
            source_port: DEFAULT_IMAP_PORT,
            dest_host: String::new(),
            dest_port: DEFAULT_IMAP_PORT,
            dry_run: false,
            command_template: DEFAULT_COMMAND_TEMPLATE.to_string(),
            logging_enabled: false,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            workers: num_cpus::get(),
            success_exit_codes: vec![0],
        }
    }
}

impl SyncParameters {
    pub fn new(source_host: &str, dest_host: &str) -> Self {
        Self {
            source_host: source_host.to_string(),
            dest_host: dest_host.to_string(),
            ..Self::default()
        }
    }

    pub fn with_ports(mut self, source_port: u16, dest_port: u16) -> Self {
        self.source_port = source_port;
        self.dest_port = dest_port;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_command_template(mut self, template: &str) -> Self {
        self.command_template = template.to_string();
        self
    }

    pub fn with_logging(mut self, log_dir: PathBuf) -> Self {
        self.logging_enabled = true;
        self.log_dir = log_dir;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_success_exit_codes(mut self, codes: Vec<i32>) -> Self {
        self.success_exit_codes = codes;
        self
    }

    /// Loads parameters from a JSON file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match ext.to_lowercase().as_str() {
            "json" => serde_json::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_host.trim().is_empty() {
            return Err(ConfigError::Validation("source_host must be set".to_string()));
        }
        if self.dest_host.trim().is_empty() {
            return Err(ConfigError::Validation("dest_host must be set".to_string()));
        }
        if self.source_port == 0 || self.dest_port == 0 {
            return Err(ConfigError::Validation("ports must be greater than 0".to_string()));
        }
        if self.workers == 0 {
            return Err(ConfigError::Validation("workers must be greater than 0".to_string()));
        }
        if self.success_exit_codes.is_empty() {
            return Err(ConfigError::Validation(
                "at least one success exit code is required".to_string()
            ));
        }
        Ok(())
    }

    pub fn exit_policy(&self) -> Arc<dyn ExitPolicy> {
        if self.success_exit_codes == [0] {
            Arc::new(ZeroExitPolicy)
        } else {
            Arc::new(AcceptedExitCodes::new(self.success_exit_codes.clone()))
        }
    }
}
