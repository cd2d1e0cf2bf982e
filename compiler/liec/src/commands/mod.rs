//! `lex` and `parse` commands.
//!
//! Both write their report to `out` and diagnostics to `err`, and return
//! `Ok(false)` when the program had an error. `Err` is reserved for failing
//! to write the report itself.

use std::io::{self, Write};
use std::path::PathBuf;

use lie_ir::ast::to_sexpr;
use lie_ir::LexemeKind;
use lie_lexer::{LexError, Lexer};
use lie_lexer_core::SourceBuffer;
use tracing::debug;

/// Where a program comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    /// Program text given on the command line.
    Source(String),
}

impl Input {
    /// Name used in reports.
    pub fn name(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Source(_) => "<command line>".to_owned(),
        }
    }

    fn open(&self) -> Result<SourceBuffer, LexError> {
        match self {
            Input::File(path) => Ok(SourceBuffer::open(path)?),
            Input::Source(source) => Ok(SourceBuffer::new(source)),
        }
    }
}

/// Print every lexeme of `input`, one per line, up to the first lexer error.
pub fn lex(input: &Input, out: &mut impl Write, err: &mut impl Write) -> io::Result<bool> {
    let source = match input.open() {
        Ok(source) => source,
        Err(e) => {
            writeln!(err, "{}", e.to_diagnostic())?;
            return Ok(false);
        }
    };

    writeln!(out, "Lexemes for '{}':", input.name())?;
    let mut lexer = Lexer::new(source);
    let mut count = 0usize;
    let ok = loop {
        match lexer.scan() {
            Ok(lexeme) => {
                count += 1;
                if lexeme.kind.is_literal() {
                    writeln!(out, "  {:?} {:?} @ {}", lexeme.kind, lexeme.text, lexeme.span)?;
                } else {
                    writeln!(out, "  {:?} @ {}", lexeme.kind, lexeme.span)?;
                }
                if lexeme.kind == LexemeKind::EndOfInput {
                    break true;
                }
            }
            Err(e) => {
                writeln!(err, "{}", e.to_diagnostic())?;
                break false;
            }
        }
    };
    lexer.source_mut().close();
    debug!(count, ok, "lexed");
    Ok(ok)
}

/// Print the tree of `input` as s-expressions, one statement per line.
///
/// On an error the statements parsed before it are still printed.
pub fn parse(input: &Input, out: &mut impl Write, err: &mut impl Write) -> io::Result<bool> {
    let source = match input.open() {
        Ok(source) => source,
        Err(e) => {
            writeln!(err, "{}", e.to_diagnostic())?;
            return Ok(false);
        }
    };

    let output = lie_parse::parse(source);
    writeln!(out, "Parse result for '{}':", input.name())?;
    write!(out, "{}", to_sexpr(&output.root))?;

    match &output.error {
        Some(e) => {
            writeln!(err, "{}", e.to_diagnostic())?;
            Ok(false)
        }
        None => Ok(true),
    }
}
