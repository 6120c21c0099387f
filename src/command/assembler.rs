// Tue Jan 13 2026 - Alex

use super::{CommandTemplate, Field, TemplateError};
use crate::account::Account;
use crate::config::SyncParameters;
use std::fmt;
use std::io::{self, Write};
use std::process::Command;

/// Appended as a single extra argument when a dry run is requested.
pub const DRY_RUN_FLAG: &str = "--dry";

const REDACTED: &str = "***";

/// A fully rendered command: one program and its argument vector.
///
/// Each argument is handed to the OS as-is, so the content of an
/// account field can never add, remove or split arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledCommand {
    program: String,
    args: Vec<String>,
}

impl AssembledCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Shell-quoted rendering, suitable for copy and paste into a terminal.
impl fmt::Display for AssembledCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

pub fn shell_quote(value: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c);

    if !value.is_empty() && value.chars().all(is_safe) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

/// Renders the configured template once per account.
///
/// The template is parsed when the assembler is built, so unknown
/// fields and malformed quoting surface before any task is dispatched.
#[derive(Debug, Clone)]
pub struct CommandAssembler {
    template: CommandTemplate,
    source_host: String,
    source_port: u16,
    dest_host: String,
    dest_port: u16,
    dry_run: bool,
}

impl CommandAssembler {
    pub fn new(params: &SyncParameters) -> Result<Self, TemplateError> {
        let template = CommandTemplate::parse(&params.command_template)?;

        Ok(Self {
            template,
            source_host: params.source_host.clone(),
            source_port: params.source_port,
            dest_host: params.dest_host.clone(),
            dest_port: params.dest_port,
            dry_run: params.dry_run,
        })
    }

    pub fn assemble(&self, account: &Account) -> AssembledCommand {
        self.render(account, false)
    }

    /// Same shape as [`assemble`](Self::assemble), with every password
    /// replaced by `***`. Safe to log.
    pub fn assemble_redacted(&self, account: &Account) -> AssembledCommand {
        self.render(account, true)
    }

    fn render(&self, account: &Account, redact: bool) -> AssembledCommand {
        let lookup = |field: Field| -> String {
            if redact && field.is_secret() {
                return REDACTED.to_string();
            }
            match field {
                Field::SourceHost => self.source_host.clone(),
                Field::SourcePort => self.source_port.to_string(),
                Field::DestHost => self.dest_host.clone(),
                Field::DestPort => self.dest_port.to_string(),
                Field::SourceUsername => account.source_username().to_string(),
                Field::SourcePassword => account.source_password().to_string(),
                Field::DestUsername => account.dest_username().to_string(),
                Field::DestPassword => account.dest_password().to_string(),
            }
        };

        let mut args: Vec<String> = self.template
            .args()
            .iter()
            .map(|token| token.render(&lookup))
            .collect();

        if self.dry_run {
            args.push(DRY_RUN_FLAG.to_string());
        }

        AssembledCommand::new(self.template.program(), args)
    }

    /// Writes one shell-quoted command line per account without running anything.
    pub fn write_commands<W: Write>(&self, accounts: &[Account], out: &mut W) -> io::Result<usize> {
        for account in accounts {
            writeln!(out, "{}", self.assemble(account))?;
        }
        Ok(accounts.len())
    }
}
