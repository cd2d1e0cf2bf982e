use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the second digit indicates origin:
/// - E01xx: Resource errors
/// - E02xx: Source buffer errors
/// - E03xx: Lexer errors
/// - E04xx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Resource Errors (E01xx)
    /// Source file could not be opened
    E0101,
    /// Allocation failed while growing a structure
    E0102,

    // Buffer Errors (E02xx)
    /// Source exhausted (end of input, not fatal)
    E0201,
    /// Buffer used in an invalid state (closed, bad configuration)
    E0202,
    /// Peek distance exceeds the batch size
    E0203,
    /// Reading the next batch from the source failed
    E0204,

    // Lexer Errors (E03xx)
    /// Unexpected symbol
    E0301,
    /// End of input inside a comment
    E0302,
    /// End of input inside a string literal
    E0303,
    /// Unrecognized escape sequence
    E0304,

    // Parser Errors (E04xx)
    /// Expected lexeme class not found
    E0401,
    /// Matched lexeme carries no value
    E0402,
    /// Expected an atom
    E0403,
    /// Numeric literal not representable in 64 bits
    E0404,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E0301").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Resource
            ErrorCode::E0101 => "E0101",
            ErrorCode::E0102 => "E0102",
            // Buffer
            ErrorCode::E0201 => "E0201",
            ErrorCode::E0202 => "E0202",
            ErrorCode::E0203 => "E0203",
            ErrorCode::E0204 => "E0204",
            // Lexer
            ErrorCode::E0301 => "E0301",
            ErrorCode::E0302 => "E0302",
            ErrorCode::E0303 => "E0303",
            ErrorCode::E0304 => "E0304",
            // Parser
            ErrorCode::E0401 => "E0401",
            ErrorCode::E0402 => "E0402",
            ErrorCode::E0403 => "E0403",
            ErrorCode::E0404 => "E0404",
        }
    }

    /// Stable kebab-case identifier of the error kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ErrorCode::E0101 => "cannot-open-source",
            ErrorCode::E0102 => "out-of-memory",
            ErrorCode::E0201 => "source-exhausted",
            ErrorCode::E0202 => "invalid-buffer-state",
            ErrorCode::E0203 => "lookahead-distance-exceeded",
            ErrorCode::E0204 => "read-failed",
            ErrorCode::E0301 => "unexpected-symbol",
            ErrorCode::E0302 => "unterminated-comment",
            ErrorCode::E0303 => "unterminated-string",
            ErrorCode::E0304 => "unrecognized-escape-sequence",
            ErrorCode::E0401 => "match-failed",
            ErrorCode::E0402 => "matched-token-has-no-value",
            ErrorCode::E0403 => "expected-atom",
            ErrorCode::E0404 => "literal-out-of-range",
        }
    }

    /// Check if this is a lexer error (E03xx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E03")
    }

    /// Check if this is a parser error (E04xx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E04")
    }

    /// End of input is reported through the error channel but is not a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::E0201)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
