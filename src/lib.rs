// Tue Jan 13 2026 - Alex

pub mod account;
pub mod cli;
pub mod command;
pub mod config;
pub mod executor;
pub mod orchestrator;
pub mod report;
pub mod utils;

pub use account::{Account, AccountLoader};
pub use command::{AssembledCommand, CommandAssembler};
pub use config::SyncParameters;
pub use executor::{TaskExecutor, TaskResult};
pub use orchestrator::{BatchOutcome, Orchestrator};
pub use report::Reporter;
