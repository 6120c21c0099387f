// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Command template is empty")]
    Empty,
    #[error("Unterminated {0} quote in command template")]
    UnterminatedQuote(char),
    #[error("Command template ends with a dangling backslash")]
    TrailingBackslash,
    #[error("Unterminated placeholder in `{0}`")]
    UnterminatedPlaceholder(String),
    #[error("Unmatched `}}` in `{0}` (write `}}}}` for a literal brace)")]
    UnmatchedBrace(String),
    #[error("Unknown template field `{{{0}}}`, expected one of: {1}")]
    UnknownField(String, String),
    #[error("The program `{0}` must not contain placeholders")]
    PlaceholderInProgram(String),
}
