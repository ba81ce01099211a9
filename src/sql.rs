//! Tokenizer and parser for the `CREATE TABLE` grammar.
//!
//! This module only answers whether a line is a syntactically valid
//! statement:
//! - `CREATE TABLE name (column type, ...);`
//! - column types are `NULL`, `INTEGER`, `REAL`, `TEXT` or `BLOB`
//!
//! Nothing is stored or executed, and no syntax tree is built.

mod lexer;
mod parser;
mod recovery;

pub use lexer::{Token, TokenClass, TokenKind, Tokenizer, TypeName};
pub use parser::Parser;
pub use recovery::{NoResync, Recovery, StatementBoundary};

use crate::errors::SyntaxError;

/// Parse one input line as a `CREATE TABLE` statement.
///
/// # Errors
///
/// Returns the first syntax error in the line. Errors that follow it are
/// suppressed.
pub fn parse(line: &str) -> Result<(), SyntaxError> {
    tracing::debug!(line, "parsing statement");
    Parser::new(line).parse()
}
