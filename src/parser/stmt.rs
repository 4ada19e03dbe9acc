use log::debug;

use crate::{
    ast::ast::Expression,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::{parse_expr, parse_identifier},
};

use super::parser::Parser;

/// `let name = value;` or `const name = value;`
///
/// The target goes through the identifier rule directly, so `let 5 = 1;`
/// fails with an unexpected token rather than parsing a full operand.
pub fn parse_binding_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let start_token = parser.advance().clone();
    let is_constant = start_token.kind == TokenKind::Const;

    let target = parse_identifier(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let value = Box::new(parse_expr(parser, 0)?);

    if parser.current_token_kind() != TokenKind::Semicolon {
        let after = parser
            .previous_token()
            .map(|token| token.lexeme.clone())
            .unwrap_or_default();

        return Err(Error::new(
            ErrorImpl::ExpectedSemicolon {
                token: parser.current_token().lexeme.clone(),
                after,
            },
            parser.get_position(),
        ));
    }
    parser.advance();

    debug!("parsed {} binding for `{}`", start_token.lexeme, target.name);

    if is_constant {
        Ok(Expression::Const { target, value })
    } else {
        Ok(Expression::Let { target, value })
    }
}
