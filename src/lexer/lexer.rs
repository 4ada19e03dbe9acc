use log::trace;

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, EOF_LEXEME, RESERVED_LOOKUP};

/// Pull-based scanner over a borrowed source buffer.
///
/// Each call to [`Lexer::next_token`] consumes the longest lexeme at the
/// cursor. Anomalies never raise errors: they are absorbed into token content
/// (an `Illegal` token, or a string cut short by the end of input).
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    row: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            row: 0,
            column: 0,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn advance(&mut self) {
        if let Some(current) = self.at() {
            self.pos += current.len_utf8();
            self.column += 1;
        }
    }

    /// Row and column of the cursor, both zero-based.
    pub fn position(&self) -> Position {
        Position {
            row: self.row,
            column: self.column,
        }
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!("scanned {} at {}", token, self.position());

        token
    }

    fn scan(&mut self) -> Token {
        self.skip_whitespace();

        let Some(current) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, EOF_LEXEME);
        };

        match current {
            '(' => self.single(TokenKind::OpenParen, current),
            ')' => self.single(TokenKind::CloseParen, current),
            '[' => self.single(TokenKind::OpenBracket, current),
            ']' => self.single(TokenKind::CloseBracket, current),
            '{' => self.single(TokenKind::OpenCurly, current),
            '}' => self.single(TokenKind::CloseCurly, current),
            ':' => self.single(TokenKind::Colon, current),
            ';' => self.single(TokenKind::Semicolon, current),
            '^' => self.single(TokenKind::Caret, current),
            '+' => self.compound(TokenKind::Plus, TokenKind::PlusEquals, current),
            '-' => self.compound(TokenKind::Dash, TokenKind::MinusEquals, current),
            '*' => self.compound(TokenKind::Star, TokenKind::StarEquals, current),
            '/' => self.compound(TokenKind::Slash, TokenKind::SlashEquals, current),
            '=' => self.compound(TokenKind::Assignment, TokenKind::Equals, current),
            '<' => self.compound(TokenKind::Less, TokenKind::LessEquals, current),
            '>' => self.compound(TokenKind::Greater, TokenKind::GreaterEquals, current),
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() => self.symbol(),
            // Tabs and carriage returns land here too.
            _ => self.single(TokenKind::Illegal, current),
        }
    }

    /// Only the plain space and the newline count as whitespace.
    fn skip_whitespace(&mut self) {
        loop {
            match self.at() {
                Some(' ') => self.advance(),
                Some('\n') => {
                    self.advance();
                    self.row += 1;
                    self.column = 0;
                }
                _ => return,
            }
        }
    }

    fn single(&mut self, kind: TokenKind, current: char) -> Token {
        self.advance();
        MK_TOKEN!(kind, current)
    }

    /// Scans `current`, then folds a directly following `=` into `augmented`.
    fn compound(&mut self, base: TokenKind, augmented: TokenKind, current: char) -> Token {
        self.advance();

        if self.at() == Some('=') {
            self.advance();
            return MK_TOKEN!(augmented, format!("{}=", current));
        }

        MK_TOKEN!(base, current)
    }

    /// No escape processing. An unterminated string yields whatever was read.
    fn string(&mut self) -> Token {
        self.advance();

        let mut value = String::new();
        while let Some(current) = self.at() {
            self.advance();
            if current == '"' {
                break;
            }
            value.push(current);
        }

        MK_TOKEN!(TokenKind::String, value)
    }

    /// Digits and any number of dots; `1.2.3` is one lexeme and left for the
    /// parser to reject.
    fn number(&mut self) -> Token {
        let mut value = String::new();
        let mut is_float = false;

        while let Some(current) = self.at() {
            if current == '.' {
                is_float = true;
            } else if !current.is_ascii_digit() {
                break;
            }

            value.push(current);
            self.advance();
        }

        let value = value.trim_matches('\n');
        if is_float {
            MK_TOKEN!(TokenKind::Float, value)
        } else {
            MK_TOKEN!(TokenKind::Int, value)
        }
    }

    fn symbol(&mut self) -> Token {
        let mut value = String::new();

        while let Some(current) = self.at() {
            if !current.is_alphabetic() && !current.is_ascii_digit() {
                break;
            }

            value.push(current);
            self.advance();
        }

        match RESERVED_LOOKUP.get(value.as_str()) {
            Some(kind) => MK_TOKEN!(*kind, value),
            None => MK_TOKEN!(TokenKind::Identifier, value),
        }
    }
}

/// Drains a fresh scanner over `source`. The final token is always the one
/// `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if is_eof {
            return tokens;
        }
    }
}
