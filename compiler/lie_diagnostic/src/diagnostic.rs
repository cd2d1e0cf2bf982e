use std::fmt;

use lie_ir::Position;

use crate::ErrorCode;

/// How bad a diagnostic is, derived from its code.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Severity {
    Error,
    /// End-of-input style conditions that callers may ignore.
    Warning,
}

impl Severity {
    pub fn of(code: ErrorCode) -> Self {
        if code.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered front-end failure: code, message and where it happened.
///
/// ```text
/// error [E0301]: unexpected symbol '#'
///   --> line 2, column 5
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Offending character or lexeme; `None` for failures outside the text
    /// (opening or reading the source, allocation).
    pub position: Option<Position>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            position: None,
        }
    }

    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn at_opt(self, position: Option<Position>) -> Self {
        match position {
            Some(position) => self.at(position),
            None => self,
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::of(self.code)
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity(), self.code, self.message)?;
        if let Some(Position { line, column }) = self.position {
            write!(f, "\n  --> line {line}, column {column}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
