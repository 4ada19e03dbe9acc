use log::debug;

use crate::{
    ast::{ast::Expression, expressions::Identifier},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::NUD_LOOKUP, parser::Parser};

/// Precedence climbing.
///
/// The loop chains operators of at least `min_precedence` onto the left-hand
/// side; the recursive call binds tighter operators beneath the right-hand
/// side.
pub fn parse_expr(parser: &mut Parser, min_precedence: u8) -> Result<Expression, Error> {
    let mut left = parse_primary_expr(parser)?;

    while let Some(operator) = parser.current_operator() {
        if operator.precedence < min_precedence {
            break;
        }

        let operator_token = parser.advance().lexeme.clone();
        let right = parse_expr(parser, operator.next_min_precedence())?;

        debug!("folding binary `{}`", operator_token);
        left = Expression::binary(left, operator_token, right);
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    match NUD_LOOKUP.get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected_token()),
    }
}

pub fn parse_int_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.expect(TokenKind::Int)?;

    token
        .lexeme
        .parse()
        .map(Expression::IntLiteral)
        .map_err(|source| {
            Error::new(
                ErrorImpl::IntParseError {
                    token: token.lexeme.clone(),
                    source,
                },
                parser.get_position(),
            )
        })
}

pub fn parse_float_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.expect(TokenKind::Float)?;

    token
        .lexeme
        .parse()
        .map(Expression::FloatLiteral)
        .map_err(|source| {
            Error::new(
                ErrorImpl::FloatParseError {
                    token: token.lexeme.clone(),
                    source,
                },
                parser.get_position(),
            )
        })
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.expect(TokenKind::String)?;

    Ok(Expression::StringLiteral(token.lexeme))
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(Identifier::new(token.lexeme))
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parse_identifier(parser).map(Expression::Identifier)
}
