//! lie compiler driver.
//!
//! `liec lex` prints the lexeme stream of a program, `liec parse` its tree.
//! The binary in `main.rs` only turns arguments into a [`Command`] and runs
//! it; everything testable lives here.

pub mod commands;

use std::path::PathBuf;
use std::sync::Once;

pub use commands::{lex, parse, Input};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=lie_parse=debug` or
/// `RUST_LOG=lie_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Lex(Input),
    Parse(Input),
    Help,
}

impl Command {
    /// Read a command from the arguments after the program name.
    ///
    /// `<command> <file>` or `<command> -e <source>`. The error is the usage
    /// line to print.
    pub fn from_args(args: &[String]) -> Result<Command, String> {
        let Some(command) = args.first() else {
            return Ok(Command::Help);
        };
        let wrap: fn(Input) -> Command = match command.as_str() {
            "lex" => Command::Lex,
            "parse" => Command::Parse,
            "help" | "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("error: unknown command '{other}'")),
        };

        let usage = || format!("Usage: liec {command} <file.lie> | liec {command} -e <source>");
        let input = match &args[1..] {
            [flag, source] if flag == "-e" => Input::Source(source.clone()),
            [path] if !path.starts_with('-') => Input::File(PathBuf::from(path)),
            _ => return Err(usage()),
        };
        Ok(wrap(input))
    }
}

pub const USAGE: &str = "\
lie compiler front end

Usage: liec <command> <file.lie>
       liec <command> -e <source>

Commands:
  lex      Print the lexemes of a program
  parse    Print the syntax tree of a program, one statement per line
  help     Show this message

Set RUST_LOG (for example RUST_LOG=lie_parse=debug) for tracing output.";

#[cfg(test)]
mod tests;
