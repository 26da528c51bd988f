//! Error types and diagnostic reporting for the scanner.
//!
//! This module defines:
//!
//! - The two lexical error kinds and their line information
//! - The `Reporter` sink the scanner reports through
//! - `Diagnostics`, a reporter that collects everything it is given

pub mod errors;

#[cfg(test)]
mod tests;
