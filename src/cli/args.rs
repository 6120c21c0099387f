// Wed Jan 15 2026 - Alex

use crate::config::{ConfigError, SyncParameters, DEFAULT_ACCOUNTS_FILE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "beast")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Bulk Email Account Synchronization Tool (BEAST)", long_about = None)]
pub struct Args {
    /// The fully qualified (source) hostname from which you want to sync
    #[arg(
        long,
        value_name = "SRC_HOST",
        required_unless_present_any = ["config", "print_accounts_file_example", "print_accounts"]
    )]
    pub source_host: Option<String>,

    /// The fully qualified (destination) hostname where you want to sync to
    #[arg(
        long,
        value_name = "DST_HOST",
        required_unless_present_any = ["config", "print_accounts_file_example", "print_accounts"]
    )]
    pub dest_host: Option<String>,

    /// The port of the source host where the IMAP service is running [default: 993]
    #[arg(long, value_name = "SRC_PORT")]
    pub source_port: Option<u16>,

    /// The port of the destination host [default: 993]
    #[arg(long, value_name = "DST_PORT")]
    pub dest_port: Option<u16>,

    /// Ask the sync tool to simulate instead of executing a real run
    #[arg(long)]
    pub dry_run: bool,

    /// The accounts CSV file. Run --print-accounts-file-example for an example.
    #[arg(long, default_value = DEFAULT_ACCOUNTS_FILE)]
    pub accounts_file: PathBuf,

    /// Print the assembled sync command of every account and exit
    #[arg(short = 'o', long)]
    pub only_assemble_command: bool,

    /// Custom sync command with {source_host}, {source_port}, {dest_host}, {dest_port} and
    /// {account.source_username}, {account.source_password}, {account.dest_username},
    /// {account.dest_password} placeholders
    #[arg(long)]
    pub command_template: Option<String>,

    /// Write the output of every sync into its own file under the log directory
    #[arg(long)]
    pub enable_logs: bool,

    /// Directory for per-account log files [default: log]
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Number of accounts synchronized in parallel [default: number of CPUs]
    #[arg(long)]
    pub workers: Option<usize>,

    /// Exit code of the sync tool that counts as success; repeatable [default: 0]
    #[arg(long = "success-exit-code", value_name = "CODE", allow_negative_numbers = true)]
    pub success_exit_codes: Vec<i32>,

    /// JSON file with default parameters; command line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Display an example accounts file and exit
    #[arg(short = 'e', long)]
    pub print_accounts_file_example: bool,

    /// Display the effectively used accounts and passwords and exit
    #[arg(short = 'p', long)]
    pub print_accounts: bool,

    /// Do not draw a progress bar while logs are captured
    #[arg(long)]
    pub no_progress: bool,

    #[arg(long)]
    pub no_color: bool,

    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Layers command line flags over the config file (if any) over defaults.
    pub fn to_parameters(&self) -> Result<SyncParameters, ConfigError> {
        let mut params = match &self.config {
            Some(path) => SyncParameters::load(path)?,
            None => SyncParameters::default(),
        };

        if let Some(host) = &self.source_host {
            params.source_host = host.clone();
        }
        if let Some(host) = &self.dest_host {
            params.dest_host = host.clone();
        }
        if let Some(port) = self.source_port {
            params.source_port = port;
        }
        if let Some(port) = self.dest_port {
            params.dest_port = port;
        }
        if self.dry_run {
            params.dry_run = true;
        }
        if let Some(template) = &self.command_template {
            params.command_template = template.clone();
        }
        if self.enable_logs {
            params.logging_enabled = true;
        }
        if let Some(dir) = &self.log_dir {
            params.log_dir = dir.clone();
        }
        if let Some(workers) = self.workers {
            params.workers = workers;
        }
        if !self.success_exit_codes.is_empty() {
            params.success_exit_codes = self.success_exit_codes.clone();
        }

        params.validate()?;
        Ok(params)
    }
}
