//! tasiadb shell: reads one statement per line from stdin.
//!
//! `TASIADB_PROMPT` overrides the prompt. Logs go to stderr and are
//! filtered with `RUST_LOG` (for instance `RUST_LOG=tasiadb=trace`).

use std::io;
use std::process::ExitCode;

use tasiadb_cli::{Repl, ReplConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = ReplConfig::from_env();
    tracing::debug!(prompt = %config.prompt, "starting shell");

    let mut repl = Repl::new(io::stdin().lock(), io::stdout().lock(), config);
    match repl.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "shell terminated");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
