use crate::ast::expressions::Identifier;
use crate::ast::statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt, Stmt};
use crate::errors::errors::SyntaxError;
use crate::lexer::tokens::TokenKind;

use super::expr::parse_expr;
use super::lookups::Precedence;
use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    if let Some(handler) = parser.stmt_handler(parser.current_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let token = parser.current_token().clone();

    parser.expect(TokenKind::Ident)?;
    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let token = parser.current_token().clone();
    parser.advance();

    let return_value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Return(ReturnStmt {
        token,
        return_value,
    }))
}

/// The trailing semicolon is optional here, so bare expressions work as
/// statements.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Consumes statements until the matching `}`. Like the program loop,
/// this is a recovery point: a failed statement is recorded and skipped.
/// An unterminated block stops quietly at end of input.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    let mut statements = Vec::new();

    parser.advance();

    while !matches!(parser.current_kind(), TokenKind::RBrace | TokenKind::Eof) {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => parser.record_error(error),
        }
        parser.advance();
    }

    BlockStmt { token, statements }
}
