#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Zero-based row and column of the scanner cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Returns the text of line `row` (zero-based) without its newline, or
/// `None` when the source has fewer lines.
pub fn get_line_at_row(source: &str, row: usize) -> Option<&str> {
    source.split('\n').nth(row)
}

/// Renders a caret diagnostic for `error` against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `)`)
/// -> <stdin>
///   |
/// 1 | let a = );
///   | --------^
/// ```
pub fn render_error(error: &Error, source: &str, origin: &str) -> String {
    let position = error.get_position();
    let line_string = (position.row + 1).to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();
    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", origin));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line_at_row(source, position.row).unwrap_or_default();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // The scanner reports the column just past the offending lexeme.
    let arrows = position.column.saturating_sub(removed_whitespace).max(1);
    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (&string[start..], start)
}
