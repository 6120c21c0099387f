// Tue Jan 13 2026 - Alex

pub mod assembler;
pub mod error;
pub mod template;

pub use assembler::{AssembledCommand, CommandAssembler, DRY_RUN_FLAG};
pub use error::TemplateError;
pub use template::{CommandTemplate, Field};

pub const DEFAULT_COMMAND_TEMPLATE: &str = "imapsync --nosyncacls --subscribe --syncinternaldates --fast \
--host1 '{source_host}' --port1 {source_port} \
--user1 '{account.source_username}' --password1 '{account.source_password}' --ssl1 \
--host2 '{dest_host}' --port2 {dest_port} \
--user2 '{account.dest_username}' --password2 '{account.dest_password}' --ssl2 --delete2";
