use std::collections::HashMap;
use std::mem;

use crate::ast::ast::Program;
use crate::errors::errors::{SyntaxError, SyntaxErrorKind};
use crate::lexer::lexer::Lexer;
use crate::lexer::tokens::{Token, TokenKind};

use super::lookups::{
    create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup, PrefixHandler,
    PrefixLookup, StmtHandler, StmtLookup,
};
use super::stmt::parse_stmt;

/// Drives the lexer one token ahead of the cursor and dispatches on the
/// lookup tables to build the AST. Handlers leave the cursor on the final
/// token of their production; `parse_program` advances once after every
/// statement, which doubles as the resynchronization point after an error.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    errors: Vec<SyntaxError>,
    stmt_lookup: StmtLookup,
    prefix_lookup: PrefixLookup,
    infix_lookup: InfixLookup,
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::default(),
            peek: Token::default(),
            errors: Vec::new(),
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        // Prime the two-token window.
        parser.advance();
        parser.advance();

        parser
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Slides the window forward and hands back the token that was
    /// current.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, mem::replace(&mut self.peek, next))
    }

    /// Advances onto the peek token when it matches the expectation. On a
    /// mismatch the cursor stays put and the caller gets the diagnostic.
    pub fn expect(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        if self.peek.kind == expected {
            self.advance();
            Ok(())
        } else {
            Err(SyntaxError::new(
                SyntaxErrorKind::UnexpectedToken {
                    expected,
                    found: self.peek.kind,
                },
                self.peek.span,
            ))
        }
    }

    pub fn record_error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    /// Diagnostics accumulated so far, in detection order.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    pub fn stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn prefix_handler(&self, kind: TokenKind) -> Option<PrefixHandler> {
        self.prefix_lookup.get(&kind).copied()
    }

    pub fn infix_handler(&self, kind: TokenKind) -> Option<InfixHandler> {
        self.infix_lookup.get(&kind).copied()
    }

    pub(super) fn stmt(&mut self, kind: TokenKind, handler: StmtHandler) {
        self.stmt_lookup.insert(kind, handler);
    }

    pub(super) fn prefix(&mut self, kind: TokenKind, handler: PrefixHandler) {
        self.prefix_lookup.insert(kind, handler);
    }

    pub(super) fn infix(&mut self, kind: TokenKind, precedence: Precedence, handler: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, handler);
    }

    /// Runs to end of input and always returns a program; a statement that
    /// fails to parse is skipped, its diagnostic recorded, and parsing
    /// resumes at the next token.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::Eof {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => self.record_error(error),
            }
            self.advance();
        }

        program
    }
}

/// One-shot convenience: lex and parse `source`, returning the program
/// alongside every diagnostic.
pub fn parse(source: &str) -> (Program, Vec<SyntaxError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.errors)
}
