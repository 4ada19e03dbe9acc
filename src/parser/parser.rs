//! Parser implementation for building expression trees.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from a [`Lexer`] one at a time, keeping exactly
//! one token of lookahead plus the token it consumed last.
//!
//! Operand dispatch and operator precedence come from the process-wide
//! tables in [`super::lookups`].

use std::mem;

use log::{debug, info, trace};

use crate::{
    ast::ast::Expression,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{Operator, OperatorLookup, OPERATOR_LOOKUP},
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Source of tokens, pulled on demand
    lexer: Lexer<'a>,
    /// Lookahead token
    current: Token,
    /// Most recently consumed token
    previous: Option<Token>,
    /// Operator precedence table, [`OPERATOR_LOOKUP`] unless overridden
    operators: &'a OperatorLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser and primes the lookahead from `lexer`.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_operators(lexer, &OPERATOR_LOOKUP)
    }

    /// Creates a Parser that folds binary operators from `operators`.
    pub fn with_operators(mut lexer: Lexer<'a>, operators: &'a OperatorLookup) -> Self {
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            previous: None,
            operators,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the last consumed token, if any.
    pub fn previous_token(&self) -> Option<&Token> {
        self.previous.as_ref()
    }

    /// Consumes the current token, refills the lookahead from the scanner and
    /// returns the consumed token.
    pub fn advance(&mut self) -> &Token {
        let next = self.lexer.next_token();
        let consumed = mem::replace(&mut self.current, next);
        trace!("consumed {}", consumed);

        self.previous.insert(consumed)
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise `error` or
    /// an unexpected-token error at the scanner position.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(error.unwrap_or_else(|| self.unexpected_token()));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an unexpected-token error for the current token.
    pub fn unexpected_token(&self) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: self.current.lexeme.clone(),
            },
            self.get_position(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Operator-table entry keyed by the current token's lexeme, whatever
    /// its kind.
    pub fn current_operator(&self) -> Option<Operator> {
        self.operators.get(self.current.lexeme.as_str()).copied()
    }

    /// Returns the current position of the scanner.
    pub fn get_position(&self) -> Position {
        self.lexer.position()
    }

    /// Parses top-level expressions until end of input.
    ///
    /// Parsing stops at the first error: the returned list holds every
    /// expression completed before it, and the error is returned alongside.
    pub fn parse_program(&mut self) -> (Vec<Expression>, Option<Error>) {
        info!("parsing program");

        let mut body = vec![];

        while self.has_tokens() {
            match parse_expr(self, 0) {
                Ok(expr) => {
                    debug!("parsed {:?} expression", expr.get_expr_type());
                    body.push(expr);
                }
                Err(error) => {
                    debug!("parse failed after {} expressions: {}", body.len(), error);
                    return (body, Some(error));
                }
            }
        }

        info!("parsed {} expressions", body.len());
        (body, None)
    }
}

/// Parses `source` into its top-level expressions.
///
/// This is the main entry point for parsing. It creates a scanner and a
/// parser over the text and runs [`Parser::parse_program`].
///
/// # Returns
///
/// A tuple containing:
/// - The expressions completed before any error, in source order
/// - The first error encountered, if any
pub fn parse(source: &str) -> (Vec<Expression>, Option<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program()
}
