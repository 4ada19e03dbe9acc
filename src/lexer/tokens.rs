use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("function", TokenKind::Function);
        map.insert("class", TokenKind::Class);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("let", TokenKind::Let);
        map.insert("const", TokenKind::Const);
        map.insert("else", TokenKind::Else);
        map
    };
}

/// Lexeme carried by every end-of-input token.
pub const EOF_LEXEME: &str = "Eof";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Int,
    Float,
    String,
    Identifier,

    OpenParen,    // (
    CloseParen,   // )
    OpenBracket,  // [
    CloseBracket, // ]
    OpenCurly,    // {
    CloseCurly,   // }

    Plus,
    PlusEquals,
    Dash,
    MinusEquals,
    Star,
    StarEquals,
    Slash,
    SlashEquals,

    Assignment, // =
    Equals,     // ==
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Colon,
    Semicolon,
    Caret,

    // Reserved
    Let,
    Const,
    For,
    Function,
    Class,
    While,
    If,
    Else,
    And,
    Or,
    Not,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token(kind: {}, lexeme: '{}')", self.kind, self.lexeme)
    }
}
