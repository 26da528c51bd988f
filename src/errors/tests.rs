//! Unit tests for error handling.
//!
//! This module contains tests for error types and the diagnostic sinks.

use crate::errors::errors::{Diagnostics, Error, ErrorImpl, ErrorTip, Reporter};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 10);

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.line(), 10);
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, 3);

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.kind(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ErrorImpl::UnexpectedCharacter { character: '#' }.to_string(),
        "unexpected character"
    );
    assert_eq!(ErrorImpl::UnterminatedString.to_string(), "unterminated string");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnterminatedString, 7);

    assert_eq!(error.to_string(), "[line 7] Error: unterminated string");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '\t' }, 1);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.starts_with("`\\t`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_unterminated_string_has_no_tip() {
    let error = Error::new(ErrorImpl::UnterminatedString, 1);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostics_collects_typed_errors() {
    let mut diagnostics = Diagnostics::new();
    assert!(!diagnostics.had_error());

    diagnostics.error(Error::new(ErrorImpl::UnterminatedString, 2));
    diagnostics.error(Error::new(ErrorImpl::UnexpectedCharacter { character: '~' }, 4));

    assert!(diagnostics.had_error());
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.errors()[1].line(), 4);
    assert_eq!(
        diagnostics.messages(),
        &[
            (2, "unterminated string".to_string()),
            (4, "unexpected character".to_string())
        ]
    );
}

#[test]
fn test_diagnostics_plain_report() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(5, "something odd");

    assert!(diagnostics.had_error());
    assert!(diagnostics.errors().is_empty());
    assert_eq!(diagnostics.messages()[0], (5, "something odd".to_string()));
}

#[test]
fn test_default_error_forwards_to_report() {
    struct Lines(Vec<usize>);

    impl Reporter for Lines {
        fn report(&mut self, line: usize, _message: &str) {
            self.0.push(line);
        }
    }

    let mut lines = Lines(vec![]);
    lines.error(Error::new(ErrorImpl::UnterminatedString, 9));

    assert_eq!(lines.0, vec![9]);
}
