use thiserror::Error;

use crate::lexer::tokens::TokenKind;
use crate::Span;

/// A syntax diagnostic tied to the token that triggered it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    span: Span,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        SyntaxError { kind, span }
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),
    #[error("could not parse {0:?} as integer")]
    MalformedInteger(String),
}
