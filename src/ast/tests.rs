//! Unit tests for AST construction and pretty-printing.

use crate::lexer::tokens::{Token, TokenKind};
use crate::{Span, MK_TOKEN};

use super::ast::Program;
use super::expressions::{Expr, Identifier, InfixExpr, IntegerLiteral, PrefixExpr};
use super::statements::{LetStmt, Stmt};

fn ident(name: &str) -> Identifier {
    Identifier {
        token: MK_TOKEN!(TokenKind::Ident, name.to_string(), Span::default()),
        value: name.to_string(),
    }
}

#[test]
fn test_program_display() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: MK_TOKEN!(TokenKind::Let, "let".to_string(), Span::default()),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_token_literal() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: MK_TOKEN!(TokenKind::Let, "let".to_string(), Span::default()),
            name: ident("x"),
            value: Expr::Identifier(ident("y")),
        })],
    };

    assert_eq!(program.token_literal(), "let");
    assert_eq!(Program::default().token_literal(), "");
}

#[test]
fn test_expression_display_parenthesizes() {
    let five = Expr::Integer(IntegerLiteral {
        token: MK_TOKEN!(TokenKind::Int, "5".to_string(), Span::default()),
        value: 5,
    });
    let negated = Expr::Prefix(PrefixExpr {
        token: MK_TOKEN!(TokenKind::Minus, "-".to_string(), Span::default()),
        operator: "-".to_string(),
        right: Box::new(five.clone()),
    });
    let product = Expr::Infix(InfixExpr {
        token: MK_TOKEN!(TokenKind::Asterisk, "*".to_string(), Span::default()),
        operator: "*".to_string(),
        left: Box::new(negated),
        right: Box::new(five),
    });

    assert_eq!(product.to_string(), "((-5) * 5)");
}

#[test]
fn test_empty_program_displays_nothing() {
    assert_eq!(Program::default().to_string(), "");
}
