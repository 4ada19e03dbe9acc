//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a kind and a lexeme

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - Anything convertible into the token's lexeme `String`
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {
        Token {
            kind: $kind,
            lexeme: String::from($lexeme),
        }
    };
}
