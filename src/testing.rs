//! Testing utilities for property and fuzz testing of the tokenizer and parser.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`FuzzStatement`]: an `arbitrary`-generated, well-formed `CREATE TABLE` statement
//! - [`check_tokenizer_invariants`]: tokenize to exhaustion and assert the scanner invariants
//! - [`check_parse`]: parse arbitrary input and assert the panic-mode invariants
//! - [`check_statement_accepted`]: assert that a generated statement is accepted

use alloc::string::String;
use alloc::vec::Vec;
use arbitrary::{Arbitrary, Unstructured};

use crate::sql::{Parser, TokenKind, Tokenizer, TypeName};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An identifier made of ASCII letters that never collides with a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzIdent(String);

impl FuzzIdent {
    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> Arbitrary<'a> for FuzzIdent {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(1..=12)?;
        let mut name = String::with_capacity(len + 1);
        if u.arbitrary()? {
            name.push('_');
        }
        while name.len() < len {
            name.push(char::from(*u.choose(LETTERS)?));
        }
        if TokenKind::keyword(&name).is_some() {
            name.push('x');
        }
        Ok(Self(name))
    }
}

/// A column definition: a name followed by a type keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzColumn {
    /// Column name.
    pub name: FuzzIdent,
    /// Column type.
    pub type_name: TypeName,
}

/// A well-formed `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzStatement {
    /// Table name.
    pub table: FuzzIdent,
    /// The mandatory first column.
    pub first: FuzzColumn,
    /// Any further columns.
    pub rest: Vec<FuzzColumn>,
    /// Pad every token with spaces, tabs and carriage returns.
    pub loose: bool,
}

impl<'a> Arbitrary<'a> for FuzzColumn {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self {
            name: u.arbitrary()?,
            type_name: u.arbitrary()?,
        })
    }
}

impl<'a> Arbitrary<'a> for FuzzStatement {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self {
            table: u.arbitrary()?,
            first: u.arbitrary()?,
            rest: u.arbitrary()?,
            loose: u.arbitrary()?,
        })
    }
}

impl FuzzStatement {
    /// Render the statement as a single input line.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let gap = if self.loose { " \t\r " } else { " " };
        let tight = if self.loose { "\t" } else { "" };

        let mut sql = String::new();
        sql.push_str(tight);
        sql.push_str("CREATE");
        sql.push_str(gap);
        sql.push_str("TABLE");
        sql.push_str(gap);
        sql.push_str(self.table.as_str());
        sql.push_str(gap);
        sql.push('(');
        for (i, column) in core::iter::once(&self.first).chain(&self.rest).enumerate() {
            if i > 0 {
                sql.push_str(tight);
                sql.push(',');
                sql.push_str(gap);
            }
            sql.push_str(tight);
            sql.push_str(column.name.as_str());
            sql.push_str(gap);
            sql.push_str(column.type_name.as_str());
        }
        sql.push_str(tight);
        sql.push(')');
        sql.push_str(tight);
        sql.push(';');
        sql.push_str(gap);
        sql
    }
}

/// Tokenize `input` to exhaustion and assert the tokenizer invariants.
///
/// # Panics
///
/// Panics if a token escapes the input, if a non-terminal token is empty or
/// contains whitespace, if the cursor stalls, or if end-of-input is not
/// idempotent.
pub fn check_tokenizer_invariants(input: &str) {
    let mut tokenizer = Tokenizer::new(input);
    let mut last_end = 0;

    // Every token but the last consumes at least one byte.
    for _ in 0..=input.len() {
        let token = tokenizer.next();
        assert!(token.pos >= last_end, "token {token:?} overlaps the previous one");
        assert_eq!(
            input.get(token.span()),
            Some(token.text),
            "token {token:?} does not borrow from the input"
        );

        if token.kind == TokenKind::Eof {
            assert!(token.text.is_empty());
            for _ in 0..2 {
                assert_eq!(tokenizer.next(), token, "end of input is not idempotent");
            }
            return;
        }

        assert!(!token.text.is_empty(), "empty token {token:?}");
        assert!(
            !token.text.contains([' ', '\t', '\r']),
            "token {token:?} contains whitespace"
        );
        last_end = token.span().end;
    }

    panic!("tokenizer did not reach end of input for {input:?}");
}

/// Parse `input` and assert the panic-mode invariants.
///
/// Returns whether the input was accepted.
///
/// # Panics
///
/// Panics if more than one diagnostic is recorded, or if the verdict
/// disagrees with the recorded diagnostics.
#[must_use]
pub fn check_parse(input: &str) -> bool {
    let mut parser = Parser::new(input);
    let verdict = parser.parse();

    assert!(parser.diagnostics().len() <= 1, "{:?}", parser.diagnostics());
    assert_eq!(verdict.is_err(), parser.had_error());
    assert_eq!(verdict.err(), parser.diagnostics().first().copied());
    verdict.is_ok()
}

/// Assert that a generated statement is accepted.
///
/// # Panics
///
/// Panics if the statement is rejected.
pub fn check_statement_accepted(statement: &FuzzStatement) {
    let sql = statement.to_sql();
    check_tokenizer_invariants(&sql);
    assert_eq!(crate::parse(&sql), Ok(()), "{sql:?}");
}
