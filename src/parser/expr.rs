use crate::ast::expressions::{
    BooleanLiteral, Expr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
    PrefixExpr,
};
use crate::errors::errors::{SyntaxError, SyntaxErrorKind};
use crate::lexer::tokens::TokenKind;

use super::lookups::Precedence;
use super::parser::Parser;
use super::stmt::parse_block_stmt;

/// Pratt core. Parses one expression starting at the current token and
/// leaves the cursor on the expression's final token.
///
/// The strict `<` against the peek precedence keeps equal-precedence
/// operators left-associative; the semicolon guard lets an expression
/// statement terminate without consulting the precedence table.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expr, SyntaxError> {
    let kind = parser.current_kind();
    let prefix = parser.prefix_handler(kind).ok_or_else(|| {
        SyntaxError::new(
            SyntaxErrorKind::NoPrefixParseFn(kind),
            parser.current_token().span,
        )
    })?;

    let mut left = prefix(parser)?;

    while parser.peek_kind() != TokenKind::Semicolon && precedence < parser.peek_precedence() {
        let infix = match parser.infix_handler(parser.peek_kind()) {
            Some(handler) => handler,
            None => return Ok(left),
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.current_token().clone();
    Ok(Expr::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.current_token().clone();

    // Overflow counts as a malformed literal; the lexer never emits a
    // sign, so the value is always non-negative.
    let value = token.literal.parse::<i64>().map_err(|_| {
        SyntaxError::new(
            SyntaxErrorKind::MalformedInteger(token.literal.clone()),
            token.span,
        )
    })?;

    Ok(Expr::Integer(IntegerLiteral { token, value }))
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.current_token().clone();
    let value = token.kind == TokenKind::True;
    Ok(Expr::Boolean(BooleanLiteral { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.advance();
    let operator = token.literal.clone();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        token,
        operator,
        right: Box::new(right),
    }))
}

/// Shared handler for every registered binary operator. On entry the
/// cursor sits on the operator token.
pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, SyntaxError> {
    let precedence = parser.current_precedence();
    let token = parser.advance();
    let operator = token.literal.clone();

    let right = parse_expr(parser, precedence)?;

    Ok(Expr::Infix(InfixExpr {
        token,
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// Grouping discards the parens themselves and returns the inner
/// expression unchanged.
pub fn parse_grouped_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    parser.advance();

    let expr = parse_expr(parser, Precedence::Lowest)?;

    parser.expect(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.current_token().clone();

    parser.expect(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest)?;

    parser.expect(TokenKind::RParen)?;
    parser.expect(TokenKind::LBrace)?;
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_kind() == TokenKind::Else {
        parser.advance();
        parser.expect(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.current_token().clone();

    parser.expect(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser);

    Ok(Expr::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, SyntaxError> {
    let mut parameters = Vec::new();

    if parser.peek_kind() == TokenKind::RParen {
        parser.advance();
        return Ok(parameters);
    }

    parser.advance();
    let token = parser.current_token().clone();
    parameters.push(Identifier {
        value: token.literal.clone(),
        token,
    });

    while parser.peek_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        let token = parser.current_token().clone();
        parameters.push(Identifier {
            value: token.literal.clone(),
            token,
        });
    }

    parser.expect(TokenKind::RParen)?;

    Ok(parameters)
}
