// Tue Jan 13 2026 - Alex

use super::TemplateError;
use std::iter::Peekable;
use std::str::Chars;

/// The closed set of values a command template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SourceHost,
    SourcePort,
    DestHost,
    DestPort,
    SourceUsername,
    SourcePassword,
    DestUsername,
    DestPassword,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::SourceHost,
        Field::SourcePort,
        Field::DestHost,
        Field::DestPort,
        Field::SourceUsername,
        Field::SourcePassword,
        Field::DestUsername,
        Field::DestPassword,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::SourceHost => "source_host",
            Field::SourcePort => "source_port",
            Field::DestHost => "dest_host",
            Field::DestPort => "dest_port",
            Field::SourceUsername => "account.source_username",
            Field::SourcePassword => "account.source_password",
            Field::DestUsername => "account.dest_username",
            Field::DestPassword => "account.dest_password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Field::SourcePassword | Field::DestPassword)
    }

    fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|f| format!("{{{}}}", f.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Field),
}

/// One argument of the command, as a sequence of literal text and
/// placeholders. Rendering a token always yields exactly one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    segments: Vec<Segment>,
}

impl Token {
    pub fn render<F>(&self, lookup: F) -> String
    where
        F: Fn(Field) -> String,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&lookup(*field)),
            }
        }
        out
    }

    fn has_fields(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Field(_)))
    }
}

/// A parsed command template.
///
/// The template is split into words the way a POSIX shell would split
/// a simple command (whitespace separates words, single quotes keep
/// text verbatim, double quotes honour `\"` and `\\`, a backslash
/// outside quotes escapes the next character). Each word is then
/// scanned for `{field}` placeholders; `{{` and `}}` stand for literal
/// braces. No expansion, globbing or evaluation ever happens, and the
/// word structure is fixed before any account value is seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    program: String,
    args: Vec<Token>,
}

impl CommandTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut words = split_words(template)?.into_iter();

        let program_word = words
            .next()
            .filter(|w| !w.is_empty())
            .ok_or(TemplateError::Empty)?;
        let program = parse_token(&program_word)?;
        if program.has_fields() {
            return Err(TemplateError::PlaceholderInProgram(program_word));
        }

        let args = words
            .map(|word| parse_token(&word))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            program: program.render(|_| String::new()),
            args,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[Token] {
        &self.args
    }
}

fn split_words(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(TemplateError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err(TemplateError::UnterminatedQuote('"')),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(TemplateError::UnterminatedQuote('"')),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(ch) => current.push(ch),
                    None => return Err(TemplateError::TrailingBackslash),
                }
            }
            _ => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

fn parse_token(word: &str) -> Result<Token, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars: Peekable<Chars> = word.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => return Err(TemplateError::UnterminatedPlaceholder(word.to_string())),
                    }
                }

                let field = Field::from_name(name.trim())
                    .ok_or_else(|| TemplateError::UnknownField(name.clone(), Field::expected_list()))?;

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(TemplateError::UnmatchedBrace(word.to_string())),
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() || segments.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(Token { segments })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(template: &CommandTemplate) -> Vec<Field> {
        template.args
            .iter()
            .flat_map(|t| &t.segments)
            .filter_map(|s| match s {
                Segment::Field(f) => Some(*f),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_split_respects_quotes() {
        let words = split_words(r#"cmd 'a b' "c \"d\"" e\ f ''"#).unwrap();

        assert_eq!(words, vec!["cmd", "a b", "c \"d\"", "e f", ""]);
    }

    #[test]
    fn test_parse_default_template() {
        let template = CommandTemplate::parse(crate::command::DEFAULT_COMMAND_TEMPLATE).unwrap();

        assert_eq!(template.program(), "imapsync");
        let used = fields(&template);
        for field in Field::ALL {
            assert!(used.contains(&field), "missing {}", field.name());
        }
    }

    #[test]
    fn test_mixed_literal_and_field_token() {
        let template = CommandTemplate::parse("sync --to={dest_host}:{dest_port}").unwrap();
        let token = &template.args()[0];

        assert_eq!(
            token.segments,
            vec![
                Segment::Literal("--to=".to_string()),
                Segment::Field(Field::DestHost),
                Segment::Literal(":".to_string()),
                Segment::Field(Field::DestPort),
            ]
        );
    }

    #[test]
    fn test_double_braces_are_literal() {
        let template = CommandTemplate::parse("echo {{json}}").unwrap();

        assert_eq!(template.args()[0].render(|_| unreachable!()), "{json}");
        assert!(fields(&template).is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = CommandTemplate::parse("imapsync --user1 {account.host1_username}").unwrap_err();

        assert!(matches!(err, TemplateError::UnknownField(ref name, _) if name == "account.host1_username"));
    }

    #[test]
    fn test_expression_is_not_a_field() {
        let err = CommandTemplate::parse("echo {__import__('os').system('id')}").unwrap_err();

        assert!(matches!(err, TemplateError::UnknownField(..)));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(CommandTemplate::parse("   ").unwrap_err(), TemplateError::Empty);
        assert_eq!(CommandTemplate::parse("echo 'open").unwrap_err(), TemplateError::UnterminatedQuote('\''));
        assert_eq!(CommandTemplate::parse("echo \"open").unwrap_err(), TemplateError::UnterminatedQuote('"'));
        assert_eq!(CommandTemplate::parse("echo \\").unwrap_err(), TemplateError::TrailingBackslash);
        assert!(matches!(
            CommandTemplate::parse("echo {source_host").unwrap_err(),
            TemplateError::UnterminatedPlaceholder(_)
        ));
        assert!(matches!(
            CommandTemplate::parse("echo a}b").unwrap_err(),
            TemplateError::UnmatchedBrace(_)
        ));
    }

    #[test]
    fn test_placeholder_in_program_is_rejected() {
        let err = CommandTemplate::parse("{source_host} --flag").unwrap_err();

        assert!(matches!(err, TemplateError::PlaceholderInProgram(_)));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert!(Field::SourcePassword.is_secret());
        assert!(!Field::DestHost.is_secret());
    }
}
