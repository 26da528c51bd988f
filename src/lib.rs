#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a lexical error with the offending source line.
///
/// ```text
/// Error: UnexpectedCharacter (`@` is not part of the language, ...)
/// -> main.lang:2
///   |
/// 2 | var a = @;
///   |
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let line_string = error.line().to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}:{}\n", file, error.line()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line(source, error.line()).unwrap_or("");
    out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    out
}
