use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Ordered: two-character operators must come before their
    // one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
        RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
        RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{") },
        RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}") },
    ];
}

/// On-demand tokenizer. The parser pulls one token at a time; once the
/// source is exhausted every further pull yields `Eof`.
pub struct Lexer {
    source: String,
    pos: u32,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(
                    TokenKind::Eof,
                    String::new(),
                    Span { start: self.pos, end: self.pos }
                );
            }

            let mut matched = None;
            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(self.remainder()) {
                    if found.start() == 0 {
                        matched = Some((pattern.handler, &pattern.regex));
                        break;
                    }
                }
            }

            match matched {
                Some((handler, regex)) => {
                    if let Some(token) = handler(self, regex) {
                        return token;
                    }
                    // Whitespace was skipped, scan again.
                }
                None => {
                    let ch = self.at();
                    let width = ch.len_utf8() as u32;
                    let span = Span { start: self.pos, end: self.pos + width };
                    self.advance_n(width);
                    return MK_TOKEN!(TokenKind::Illegal, ch.to_string(), span);
                }
            }
        }
    }

    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let span = Span {
        start: lexer.pos,
        end: lexer.pos + matched.len() as u32,
    };
    lexer.advance_n(matched.len() as u32);

    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Ident);

    Some(MK_TOKEN!(kind, matched, span))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let span = Span {
        start: lexer.pos,
        end: lexer.pos + matched.len() as u32,
    };
    lexer.advance_n(matched.len() as u32);

    Some(MK_TOKEN!(TokenKind::Int, matched, span))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let end = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(end as u32);
    None
}

/// Drains the lexer into a vector, including the trailing `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
