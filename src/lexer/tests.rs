//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals
//! - Operators and punctuation
//! - Whitespace, illegal characters and end of input

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_single_characters() {
    let cases = [
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        ("[", TokenKind::OpenBracket),
        ("]", TokenKind::CloseBracket),
        ("{", TokenKind::OpenCurly),
        ("}", TokenKind::CloseCurly),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Dash),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("<", TokenKind::Less),
        (">", TokenKind::Greater),
        ("=", TokenKind::Assignment),
        (":", TokenKind::Colon),
        (";", TokenKind::Semicolon),
        ("^", TokenKind::Caret),
    ];

    for (source, kind) in cases {
        let tokens = tokenize(source);

        assert_eq!(tokens.len(), 2, "{:?} should scan to one token", source);
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].lexeme, source);
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_compound_operators() {
    let cases = [
        ("+=", TokenKind::PlusEquals),
        ("-=", TokenKind::MinusEquals),
        ("*=", TokenKind::StarEquals),
        ("/=", TokenKind::SlashEquals),
        ("==", TokenKind::Equals),
        ("<=", TokenKind::LessEquals),
        (">=", TokenKind::GreaterEquals),
    ];

    for (source, kind) in cases {
        let tokens = tokenize(source);

        assert_eq!(tokens.len(), 2, "{:?} should scan to one token", source);
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].lexeme, source);
    }
}

#[test]
fn test_tokenize_compound_needs_adjacent_equals() {
    let tokens = tokenize("+ =");

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_triple_equals() {
    let tokens = tokenize("===");

    assert_eq!(tokens[0].kind, TokenKind::Equals);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    let cases = [
        ("if", TokenKind::If),
        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("function", TokenKind::Function),
        ("class", TokenKind::Class),
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("not", TokenKind::Not),
        ("let", TokenKind::Let),
        ("const", TokenKind::Const),
        ("else", TokenKind::Else),
    ];

    for (source, kind) in cases {
        let tokens = tokenize(source);

        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].lexeme, source);
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("potato x1 letter Constant café");

    let expected = ["potato", "x1", "letter", "Constant", "café"];
    for (token, lexeme) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, lexeme);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_underscore_is_illegal() {
    let tokens = tokenize("foo_bar");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].lexeme, "_");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].lexeme, "bar");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("1555 1894.525 0");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].lexeme, "1555");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].lexeme, "1894.525");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].lexeme, "0");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_malformed_number_is_one_lexeme() {
    let tokens = tokenize("1.2.3");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].lexeme, "1.2.3");
}

#[test]
fn test_tokenize_number_followed_by_letters() {
    let tokens = tokenize("12ab");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].lexeme, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "ab");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""string" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "string");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].lexeme, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_keeps_backslashes() {
    let tokens = tokenize(r#""a\nb""#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "a\\nb");
}

#[test]
fn test_tokenize_unterminated_string() {
    let tokens = tokenize("\"never closed");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "never closed");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_tab_and_carriage_return_are_illegal() {
    let tokens = tokenize("a\tb\r");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].lexeme, "\t");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].lexeme, "\r");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_characters_advance() {
    let tokens = tokenize("@#→");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].lexeme, "@");
    assert_eq!(tokens[1].lexeme, "#");
    assert_eq!(tokens[2].lexeme, "→");
    assert!(tokens[..3].iter().all(|token| token.kind == TokenKind::Illegal));
}

#[test]
fn test_tokenize_mixed_program() {
    let source = "+ - / * let const potato \"string\" 1555 1894.525 class function for if else and or not () [] {}";
    let tokens = tokenize(source);

    let expected = [
        (TokenKind::Plus, "+"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Let, "let"),
        (TokenKind::Const, "const"),
        (TokenKind::Identifier, "potato"),
        (TokenKind::String, "string"),
        (TokenKind::Int, "1555"),
        (TokenKind::Float, "1894.525"),
        (TokenKind::Class, "class"),
        (TokenKind::Function, "function"),
        (TokenKind::For, "for"),
        (TokenKind::If, "if"),
        (TokenKind::Else, "else"),
        (TokenKind::And, "and"),
        (TokenKind::Or, "or"),
        (TokenKind::Not, "not"),
        (TokenKind::OpenParen, "("),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenBracket, "["),
        (TokenKind::CloseBracket, "]"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::EOF, "Eof"),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, lexeme)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind, "unexpected {}", token);
        assert_eq!(token.lexeme, lexeme);
    }
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.lexeme, "Eof");
    }
}

#[test]
fn test_empty_and_blank_sources() {
    assert_eq!(tokenize("").len(), 1);
    assert_eq!(tokenize("   \n  \n").len(), 1);
}

#[test]
fn test_position_tracks_rows_and_columns() {
    let mut lexer = Lexer::new("ab cd\n  ef");

    lexer.next_token();
    assert_eq!(lexer.position().row, 0);
    assert_eq!(lexer.position().column, 2);

    lexer.next_token();
    assert_eq!(lexer.position().column, 5);

    lexer.next_token();
    assert_eq!(lexer.position().row, 1);
    assert_eq!(lexer.position().column, 4);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("+=");

    assert_eq!(tokens[0].to_string(), "Token(kind: PlusEquals, lexeme: '+=')");
}
