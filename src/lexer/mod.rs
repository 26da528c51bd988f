//! Lexical analysis module.
//!
//! This module contains the scanner that converts source code into a flat
//! stream of tokens for parsing. It handles:
//!
//! - Single- and two-character punctuation and operators
//! - Recognition of keywords, identifiers, numbers and strings
//! - Line tracking for diagnostics
//! - Line comments and whitespace
//! - Recovery from unexpected characters and unterminated strings

pub mod lexer;
pub mod tokens;
