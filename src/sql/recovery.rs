//! Resynchronization policies for panic-mode error recovery.

use super::lexer::{Token, TokenKind};

/// Decides where a panicking parser may resume reporting errors.
///
/// The parser consults the policy every time a new token enters the
/// lookahead while it is panicking.
pub trait Recovery {
    /// Whether `token` is a synchronization point that ends panic mode.
    fn is_sync_point(&self, token: &Token<'_>) -> bool;
}

/// Never leaves panic mode: only the first error of a parse is reported.
///
/// The single-statement grammar has no separator to resynchronize on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoResync;

impl Recovery for NoResync {
    fn is_sync_point(&self, _token: &Token<'_>) -> bool {
        false
    }
}

/// Leaves panic mode at a statement separator or at the end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementBoundary;

impl Recovery for StatementBoundary {
    fn is_sync_point(&self, token: &Token<'_>) -> bool {
        matches!(token.kind, TokenKind::Semicolon | TokenKind::Eof)
    }
}
