use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language, remove it or place it inside a string",
                character.escape_default()
            )),
            ErrorImpl::UnterminatedString => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character")]
    UnexpectedCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,
}

/// Sink for lexical diagnostics.
///
/// The scanner never fails; every problem it finds is handed to a reporter
/// and scanning carries on. Implementors only need [`Reporter::report`].
/// Override [`Reporter::error`] to keep the typed [`Error`] as well.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);

    fn error(&mut self, error: Error) {
        self.report(error.line(), &error.internal_error.to_string());
    }
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

/// Collecting reporter. Whether the source as a whole was lexically valid
/// is answered here, not by the scanner.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    errors: Vec<Error>,
    messages: Vec<(usize, String)>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Typed errors, in the order they were reported.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Every `(line, message)` pair received, including plain `report` calls.
    pub fn messages(&self) -> &[(usize, String)] {
        &self.messages
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, line: usize, message: &str) {
        self.messages.push((line, message.to_string()));
    }

    fn error(&mut self, error: Error) {
        self.report(error.line(), &error.internal_error.to_string());
        self.errors.push(error);
    }
}
