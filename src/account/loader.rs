// Tue Jan 13 2026 - Alex

use super::{Account, AccountError};
use std::fs;
use std::path::{Path, PathBuf};

const SOURCE_USERNAME: &str = "from_host_username";
const SOURCE_PASSWORD: &str = "from_host_password";
const DEST_USERNAME: &str = "to_host_username";
const DEST_PASSWORD: &str = "to_host_password";

pub struct AccountLoader {
    path: PathBuf,
}

impl AccountLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Account>, AccountError> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| AccountError::Io(self.path.clone(), e))?;

        let accounts = Self::parse(&contents)?;
        log::debug!("Loaded {} accounts from {}", accounts.len(), self.path.display());

        Ok(accounts)
    }

    /// Parses a header-bearing CSV document.
    ///
    /// Lines starting with `#` and empty lines between records are
    /// skipped by the reader itself, so quoted fields keep their text
    /// verbatim, blank lines included.
    pub fn parse(contents: &str) -> Result<Vec<Account>, AccountError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::Headers)
            .from_reader(contents.as_bytes());

        let headers = reader
            .headers()
            .map_err(|source| AccountError::Csv {
                line: source.position().map(|p| record_line(contents, p)).unwrap_or(1),
                source,
            })?
            .clone();

        if headers.iter().all(|h| h.is_empty()) {
            return Ok(Vec::new());
        }

        let column = |name: &str| headers.iter().position(|h| h == name);
        let source_username = column(SOURCE_USERNAME).ok_or(AccountError::MissingColumn(SOURCE_USERNAME))?;
        let source_password = column(SOURCE_PASSWORD).ok_or(AccountError::MissingColumn(SOURCE_PASSWORD))?;
        let dest_username = column(DEST_USERNAME);
        let dest_password = column(DEST_PASSWORD);

        let mut accounts = Vec::new();

        for record in reader.records() {
            let record = record.map_err(|source| AccountError::Csv {
                line: source.position().map(|p| record_line(contents, p)).unwrap_or(0),
                source,
            })?;

            // whitespace-only line
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            let line = record.position().map(|p| record_line(contents, p)).unwrap_or(0);
            let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::to_string);

            let username = field(Some(source_username))
                .filter(|u| !u.is_empty())
                .ok_or(AccountError::MissingField {
                    field: SOURCE_USERNAME,
                    line,
                })?;
            let password = field(Some(source_password)).unwrap_or_default();

            accounts.push(Account::new(
                username,
                password,
                field(dest_username),
                field(dest_password),
            ));
        }

        Ok(accounts)
    }
}

/// The reader positions a record right after the previous one, which may
/// be a run of comment or empty lines. Steps over those to the line the
/// record text starts on.
fn record_line(contents: &str, position: &csv::Position) -> u64 {
    let rest = contents.get(position.byte() as usize..).unwrap_or("");
    let skipped = rest
        .lines()
        .take_while(|line| line.is_empty() || line.starts_with('#'))
        .count();

    position.line() + skipped as u64
}
