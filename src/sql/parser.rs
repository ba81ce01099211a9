//! Recursive-descent parser for `CREATE TABLE` statements.
//!
//! Each grammar production is one method:
//!
//! ```text
//! statement        := CREATE TABLE name '(' column_list ')' ';'
//! name             := IDENT
//! column_list      := column column_list_tail
//! column_list_tail := ',' column column_list_tail | ε
//! column           := name type
//! type             := NULL | INTEGER | REAL | TEXT | BLOB
//! ```
//!
//! Errors use panic mode: the first one is recorded, and every later one is
//! swallowed until the [`Recovery`] policy reports a synchronization point.

use alloc::vec::Vec;

use tracing::{debug, trace};

use super::lexer::{Token, TokenClass, TokenKind, Tokenizer};
use super::recovery::{NoResync, Recovery};
use crate::errors::SyntaxError;

/// SQL parser with a two-token lookahead window.
///
/// A parser handles exactly one input line and is discarded afterwards.
#[derive(Debug)]
pub struct Parser<'input, R = NoResync> {
    tokenizer: Tokenizer<'input>,
    previous: Token<'input>,
    current: Token<'input>,
    had_error: bool,
    panicking: bool,
    diagnostics: Vec<SyntaxError>,
    recovery: R,
    finished: bool,
}

impl<'input> Parser<'input> {
    /// Create a new parser for the given input.
    ///
    /// Only the first syntax error of the line is ever reported.
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self::with_recovery(input, NoResync)
    }
}

impl<'input, R: Recovery> Parser<'input, R> {
    /// Create a new parser that leaves panic mode wherever `recovery` says so.
    #[must_use]
    pub fn with_recovery(input: &'input str, recovery: R) -> Self {
        let start = Token {
            kind: TokenKind::Eof,
            text: &input[..0],
            pos: 0,
        };
        let mut parser = Self {
            tokenizer: Tokenizer::new(input),
            previous: start,
            current: start,
            had_error: false,
            panicking: false,
            diagnostics: Vec::new(),
            recovery,
            finished: false,
        };
        parser.advance();
        parser
    }

    /// Parse the whole input as a single statement.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error encountered, left to right.
    ///
    /// The grammar runs once per parser; later calls return the same verdict.
    pub fn parse(&mut self) -> Result<(), SyntaxError> {
        if !self.finished {
            self.statement();
            self.expect(TokenKind::Eof);
            self.finished = true;
        }

        match self.diagnostics.first() {
            Some(error) if self.had_error => Err(*error),
            _ => Ok(()),
        }
    }

    /// The token currently under inspection.
    #[must_use]
    pub fn current(&self) -> &Token<'input> {
        &self.current
    }

    /// The most recently consumed token.
    #[must_use]
    pub fn previous(&self) -> &Token<'input> {
        &self.previous
    }

    /// Whether any syntax error has been recorded.
    #[must_use]
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Whether errors are currently being suppressed.
    #[must_use]
    pub fn is_panicking(&self) -> bool {
        self.panicking
    }

    /// Every diagnostic recorded so far, in the order they were raised.
    #[must_use]
    pub fn diagnostics(&self) -> &[SyntaxError] {
        &self.diagnostics
    }

    /// `statement := CREATE TABLE name '(' column_list ')' ';'`
    fn statement(&mut self) {
        self.expect(TokenKind::Create);
        self.expect(TokenKind::Table);
        self.name();
        self.expect(TokenKind::LParen);
        self.column_list();
        self.expect(TokenKind::RParen);
        self.expect(TokenKind::Semicolon);
    }

    /// `name := IDENT`
    fn name(&mut self) {
        self.expect(TokenKind::Identifier);
    }

    /// `column_list := column column_list_tail`
    fn column_list(&mut self) {
        self.column();
        self.column_list_tail();
    }

    /// `column_list_tail := ',' column column_list_tail | ε`
    ///
    /// The tail call is written as a loop so long column lists do not grow
    /// the stack.
    fn column_list_tail(&mut self) {
        while self.current.kind == TokenKind::Comma {
            self.advance();
            self.column();
        }
    }

    /// `column := name type`
    fn column(&mut self) {
        self.name();
        self.column_type();
    }

    /// `type := NULL | INTEGER | REAL | TEXT | BLOB`
    fn column_type(&mut self) {
        self.expect_class(TokenClass::TypeName);
    }

    /// Shift the lookahead window by one token.
    fn advance(&mut self) {
        self.previous = self.current;
        self.current = self.tokenizer.next();
        trace!(
            kind = %self.current.kind,
            text = self.current.text,
            pos = self.current.pos,
            "token"
        );

        if self.panicking && self.recovery.is_sync_point(&self.current) {
            trace!(pos = self.current.pos, "leaving panic mode");
            self.panicking = false;
        }

        if self.current.kind == TokenKind::Illegal {
            if let Some(found) = self.current.text.chars().next() {
                self.error(SyntaxError::UnexpectedChar {
                    found,
                    pos: self.current.pos,
                });
            }
        }
    }

    /// Consume the current token if it is of kind `expected`.
    ///
    /// On mismatch the token stays current.
    fn expect(&mut self, expected: TokenKind) {
        if self.current.kind == expected {
            self.advance();
        } else {
            self.error(SyntaxError::UnexpectedToken {
                expected,
                found: self.current.kind,
                pos: self.current.pos,
            });
        }
    }

    /// Consume the current token if it belongs to `expected`.
    fn expect_class(&mut self, expected: TokenClass) {
        if expected.contains(self.current.kind) {
            self.advance();
        } else {
            self.error(SyntaxError::WrongTokenClass {
                expected,
                pos: self.current.pos,
            });
        }
    }

    fn error(&mut self, error: SyntaxError) {
        if self.panicking {
            trace!(%error, "suppressed while panicking");
            return;
        }
        debug!(%error, pos = error.position(), "syntax error");
        self.had_error = true;
        self.panicking = true;
        self.diagnostics.push(error);
    }
}
