// Tue Jan 13 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Cannot read accounts file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Malformed accounts file at line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("Accounts file has no `{0}` column")]
    MissingColumn(&'static str),
    #[error("Missing {field} at line {line}")]
    MissingField { field: &'static str, line: u64 },
}
