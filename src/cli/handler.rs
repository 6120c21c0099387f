// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::account::{Account, AccountLoader, ACCOUNTS_FILE_EXAMPLE};
use crate::command::CommandAssembler;
use crate::orchestrator::Orchestrator;
use crate::report::Reporter;
use crate::utils::LoggingUtils;
use anyhow::Context;
use colored::Colorize;
use std::io::{self, Write};

/// Process exit code when every account was at least attempted.
pub const EXIT_OK: i32 = 0;
/// Process exit code when one or more sync commands could not be launched.
pub const EXIT_LAUNCH_FAILURE: i32 = 1;
/// Process exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Process exit code when the report or the requested listing could not be written to stdout.
pub const EXIT_OUTPUT_ERROR: i32 = 3;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    /// Runs the requested action and returns the process exit code.
    ///
    /// Errors returned from here are configuration errors: nothing has
    /// been dispatched yet when they occur. Failing to write to stdout is
    /// reported through [`EXIT_OUTPUT_ERROR`] instead.
    pub fn execute(&self, args: Args) -> anyhow::Result<i32> {
        if args.no_color {
            colored::control::set_override(false);
        }

        LoggingUtils::init_logger(LoggingUtils::level_from_str(&args.log_level));

        if args.print_accounts_file_example {
            return Ok(output_status(writeln!(io::stdout().lock(), "{}", ACCOUNTS_FILE_EXAMPLE)));
        }

        let loader = AccountLoader::new(&args.accounts_file);
        let accounts = loader
            .load()
            .with_context(|| format!("Failed to load accounts from {}", loader.path().display()))?;

        if args.print_accounts {
            return Ok(output_status(self.print_accounts(&accounts, &mut io::stdout().lock())));
        }

        let params = args.to_parameters().context("Invalid configuration")?;

        if args.only_assemble_command {
            let assembler = CommandAssembler::new(&params).context("Invalid command template")?;
            let written = assembler.write_commands(&accounts, &mut io::stdout().lock());
            return Ok(output_status(written.map(|_| ())));
        }

        let orchestrator = Orchestrator::new(&params)
            .context("Invalid command template")?
            .with_progress(params.logging_enabled && !args.no_progress);

        log::info!(
            "Synchronizing {} accounts from {} to {} with {} workers",
            accounts.len(),
            params.source_host,
            params.dest_host,
            orchestrator.workers()
        );
        if params.logging_enabled {
            log::info!("Writing sync logs to {}", params.log_dir.display());
        }

        let outcome = orchestrator.run(accounts);
        log::debug!(
            "{} accounts succeeded, {} did not",
            outcome.succeeded_count(),
            outcome.failed_count()
        );

        let status = output_status(writeln!(io::stdout()).and_then(|_| Reporter::new().print(&outcome)));
        if status != EXIT_OK {
            return Ok(status);
        }

        if outcome.has_launch_failures() {
            eprintln!(
                "{} {} of {} sync commands could not be launched",
                "[!]".red(),
                outcome.launch_failures.len(),
                outcome.total()
            );
            return Ok(EXIT_LAUNCH_FAILURE);
        }

        Ok(EXIT_OK)
    }

    pub fn print_accounts<W: Write>(&self, accounts: &[Account], out: &mut W) -> io::Result<()> {
        for account in accounts {
            writeln!(
                out,
                "From Host: ['{:>32}', '{:>32}'], To Host: ['{:>32}', '{:>32}']",
                account.source_username(),
                account.source_password(),
                account.dest_username(),
                account.dest_password()
            )?;
        }
        Ok(())
    }
}

fn output_status(written: io::Result<()>) -> i32 {
    match written {
        Ok(()) => EXIT_OK,
        Err(e) => {
            log::error!("Cannot write to stdout: {}", e);
            EXIT_OUTPUT_ERROR
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
