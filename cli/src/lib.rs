//! Interactive shell for the tasiadb `CREATE TABLE` parser.
//!
//! Lines starting with `.` are meta-commands (`.help`, `.exit`); every other
//! line is handed verbatim to [`tasiadb::parse`] and the verdict is printed.

mod config;
mod repl;

pub use config::{DEFAULT_PROMPT, PROMPT_VAR, ReplConfig};
pub use repl::{MetaCommand, Repl, ReplError};
