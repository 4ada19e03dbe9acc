//! Parser module for building expression trees.
//!
//! This module contains the parser that transforms the scanner's token
//! stream into a sequence of top-level expressions. It uses precedence
//! climbing over a fixed operator table and handles:
//!
//! - Literal, identifier and binary expressions
//! - `let` and `const` bindings terminated by `;`
//! - Fail-fast error reporting: the first error stops the parse
//!
//! Primary operands are dispatched through a NUD (null denotation) table
//! keyed by token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
