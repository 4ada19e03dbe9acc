//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! pull-based stream of tokens for parsing. It handles:
//!
//! - Keywords and identifiers (letters and digits)
//! - Integer, float and string literals
//! - Single and compound (`+=`, `==`, ...) operators and punctuation
//! - Row/column tracking for diagnostics

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
