use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expression, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Operator {
    pub precedence: u8,
    pub associativity: Associativity,
}

impl Operator {
    pub const fn left(precedence: u8) -> Self {
        Operator {
            precedence,
            associativity: Associativity::Left,
        }
    }

    pub const fn right(precedence: u8) -> Self {
        Operator {
            precedence,
            associativity: Associativity::Right,
        }
    }

    /// Minimum precedence for the right-hand operand.
    pub fn next_min_precedence(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }
}

pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expression, Error>;

// Lookup tables shared by every parser, so it's easier
pub type OperatorLookup = HashMap<&'static str, Operator>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: OperatorLookup = {
        let mut map = HashMap::new();

        // Logical and equality
        map.insert("or", Operator::left(0));
        map.insert("and", Operator::left(0));
        map.insert("not", Operator::left(0));
        map.insert("==", Operator::left(0));

        // Relational
        map.insert("<", Operator::left(1));
        map.insert("<=", Operator::left(1));
        map.insert(">", Operator::left(1));
        map.insert(">=", Operator::left(1));

        // Assignment
        map.insert("=", Operator::left(3));

        // Additive and multiplicative
        map.insert("+", Operator::left(5));
        map.insert("-", Operator::left(5));
        map.insert("*", Operator::left(6));
        map.insert("/", Operator::left(6));
        map
    };

    pub static ref NUD_LOOKUP: NUDLookup = {
        let mut map: NUDLookup = HashMap::new();

        // Literals and symbols
        map.insert(TokenKind::Int, parse_int_expr);
        map.insert(TokenKind::Float, parse_float_expr);
        map.insert(TokenKind::String, parse_string_expr);
        map.insert(TokenKind::Identifier, parse_identifier_expr);

        // Bindings
        map.insert(TokenKind::Let, parse_binding_expr);
        map.insert(TokenKind::Const, parse_binding_expr);
        map
    };
}
