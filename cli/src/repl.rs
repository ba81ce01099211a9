//! Read-eval loop dispatching meta-commands and SQL lines.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::ReplConfig;

/// Errors that end a shell session.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Commands introduced by a leading `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    /// `.help`: list the meta-commands.
    Help,
    /// `.exit`: end the session.
    Exit,
}

impl MetaCommand {
    /// Recognize a meta-command line. The whole line must match.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            ".help" => Some(MetaCommand::Help),
            ".exit" => Some(MetaCommand::Exit),
            _ => None,
        }
    }
}

/// What the loop does after handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive shell over any line source and output sink.
pub struct Repl<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a shell reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until `.exit` or end of input.
    ///
    /// Syntax errors are printed and never end the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), ReplError> {
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                info!("end of input");
                return Ok(());
            };

            let flow = if line.starts_with('.') {
                self.meta_command(&line)?
            } else {
                self.statement(&line)?
            };

            if flow == Flow::Exit {
                info!("exit requested");
                return Ok(());
            }
        }
    }

    /// Read one line, dropping a single trailing newline.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD so the parser rejects the line
    /// instead of the session ending.
    fn read_line(&mut self) -> Result<Option<String>, ReplError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn meta_command(&mut self, line: &str) -> Result<Flow, ReplError> {
        debug!(line, "meta-command");
        match MetaCommand::parse(line) {
            Some(MetaCommand::Help) => {
                writeln!(self.output, ".exit Exit this program.")?;
                writeln!(self.output, ".help Display help text.")?;
                Ok(Flow::Continue)
            }
            Some(MetaCommand::Exit) => Ok(Flow::Exit),
            None => {
                writeln!(
                    self.output,
                    "Unknown command '{line}'. Enter '.help' for help."
                )?;
                Ok(Flow::Continue)
            }
        }
    }

    fn statement(&mut self, line: &str) -> Result<Flow, ReplError> {
        match tasiadb::parse(line) {
            Ok(()) => writeln!(self.output, "OK")?,
            Err(error) => {
                debug!(%error, pos = error.position(), "statement rejected");
                writeln!(self.output, "Parse Error: {error}")?;
            }
        }
        Ok(Flow::Continue)
    }
}
