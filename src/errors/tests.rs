//! Unit tests for diagnostic formatting.

use crate::lexer::tokens::TokenKind;
use crate::Span;

use super::errors::{SyntaxError, SyntaxErrorKind};

#[test]
fn test_unexpected_token_message() {
    let error = SyntaxError::new(
        SyntaxErrorKind::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Int,
        },
        Span::new(6, 7),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_unexpected_token_message_uses_catalog_names() {
    let error = SyntaxError::new(
        SyntaxErrorKind::UnexpectedToken {
            expected: TokenKind::Ident,
            found: TokenKind::Function,
        },
        Span::default(),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got FUNCTION instead"
    );
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = SyntaxError::new(
        SyntaxErrorKind::NoPrefixParseFn(TokenKind::Assign),
        Span::default(),
    );

    assert_eq!(error.to_string(), "no prefix parse function for = found");
}

#[test]
fn test_malformed_integer_message() {
    let error = SyntaxError::new(
        SyntaxErrorKind::MalformedInteger("9223372036854775808".to_string()),
        Span::default(),
    );

    assert_eq!(
        error.to_string(),
        "could not parse \"9223372036854775808\" as integer"
    );
}

#[test]
fn test_kind_and_span_accessors() {
    let error = SyntaxError::new(
        SyntaxErrorKind::NoPrefixParseFn(TokenKind::RBrace),
        Span::new(3, 4),
    );

    assert_eq!(
        *error.kind(),
        SyntaxErrorKind::NoPrefixParseFn(TokenKind::RBrace)
    );
    assert_eq!(error.span(), Span::new(3, 4));
}
