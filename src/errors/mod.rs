//! Error types for the parser.
//!
//! This module defines the errors returned by `parse_program`. Each one
//! pairs an error kind with the scanner position it was raised at and can
//! produce a short name and a suggestion for the rendered diagnostic.

pub mod errors;
