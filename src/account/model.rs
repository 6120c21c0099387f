// Tue Jan 13 2026 - Alex

use std::fmt;

/// Source and destination credentials of one mailbox.
///
/// Destination fields are resolved at construction time: an empty
/// destination username or password falls back to the source value.
/// The record is never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    source_username: String,
    source_password: String,
    dest_username: String,
    dest_password: String,
}

impl Account {
    pub fn new(
        source_username: impl Into<String>,
        source_password: impl Into<String>,
        dest_username: Option<String>,
        dest_password: Option<String>,
    ) -> Self {
        let source_username = source_username.into();
        let source_password = source_password.into();

        let dest_username = dest_username
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| source_username.clone());
        let dest_password = dest_password
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| source_password.clone());

        Self {
            source_username,
            source_password,
            dest_username,
            dest_password,
        }
    }

    pub fn source_username(&self) -> &str {
        &self.source_username
    }

    pub fn source_password(&self) -> &str {
        &self.source_password
    }

    pub fn dest_username(&self) -> &str {
        &self.dest_username
    }

    pub fn dest_password(&self) -> &str {
        &self.dest_password
    }
}

// Passwords stay out of debug output and therefore out of log records.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("source_username", &self.source_username)
            .field("dest_username", &self.dest_username)
            .finish_non_exhaustive()
    }
}
