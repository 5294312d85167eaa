use std::collections::HashMap;

use crate::ast::{expressions::Expr, statements::Stmt};
use crate::errors::errors::SyntaxError;
use crate::lexer::tokens::TokenKind;

use super::expr::{
    parse_boolean, parse_function_literal, parse_grouped_expr, parse_identifier, parse_if_expr,
    parse_infix_expr, parse_integer_literal, parse_prefix_expr,
};
use super::parser::Parser;
use super::stmt::{parse_let_stmt, parse_return_stmt};

/// Binding strength, weakest first. The climbing loop compares with
/// strict `<`, which makes every registered operator left-associative.
/// `Call` is reserved for call expressions, which the grammar does not
/// register yet.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, SyntaxError>;
pub type PrefixHandler = fn(&mut Parser) -> Result<Expr, SyntaxError>;
pub type InfixHandler = fn(&mut Parser, Expr) -> Result<Expr, SyntaxError>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.infix(TokenKind::Eq, Precedence::Equals, parse_infix_expr);
    parser.infix(TokenKind::NotEq, Precedence::Equals, parse_infix_expr);

    // Comparison
    parser.infix(TokenKind::Lt, Precedence::LessGreater, parse_infix_expr);
    parser.infix(TokenKind::Gt, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Minus, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Asterisk, Precedence::Product, parse_infix_expr);
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    // Literals and symbols
    parser.prefix(TokenKind::Ident, parse_identifier);
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::True, parse_boolean);
    parser.prefix(TokenKind::False, parse_boolean);
    parser.prefix(TokenKind::Bang, parse_prefix_expr);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);
    parser.prefix(TokenKind::LParen, parse_grouped_expr);
    parser.prefix(TokenKind::If, parse_if_expr);
    parser.prefix(TokenKind::Function, parse_function_literal);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}
