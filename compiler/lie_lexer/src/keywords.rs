//! Keyword resolution.
//!
//! Identifiers are scanned in full first, then looked up here. The lookup
//! uses the identifier's length as a first-pass filter (keywords are 2-9
//! chars), then matches against the keywords of that length.

use lie_ir::LexemeKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers, including ones ending in `?`.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<LexemeKind> {
    if !(2..=9).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            "as" => Some(LexemeKind::As),
            "fn" => Some(LexemeKind::Fn),
            "if" => Some(LexemeKind::If),
            "or" => Some(LexemeKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(LexemeKind::And),
            "let" => Some(LexemeKind::Let),
            "mod" => Some(LexemeKind::Mod),
            "not" => Some(LexemeKind::Not),
            "use" => Some(LexemeKind::Use),
            "xor" => Some(LexemeKind::Xor),
            _ => None,
        },
        4 => match text {
            "else" => Some(LexemeKind::Else),
            "func" => Some(LexemeKind::Func),
            "true" => Some(LexemeKind::True),
            _ => None,
        },
        5 => match text {
            "cases" => Some(LexemeKind::Cases),
            "false" => Some(LexemeKind::False),
            "where" => Some(LexemeKind::Where),
            _ => None,
        },
        9 => match text {
            "otherwise" => Some(LexemeKind::Otherwise),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
