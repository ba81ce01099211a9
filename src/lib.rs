#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod errors;
pub mod sql;
#[cfg(feature = "testing")]
pub mod testing;

// Re-export main types
pub use sql::{
    NoResync, Parser, Recovery, StatementBoundary, Token, TokenClass, TokenKind, Tokenizer,
    TypeName, parse,
};

// Re-export errors
pub use errors::SyntaxError;
