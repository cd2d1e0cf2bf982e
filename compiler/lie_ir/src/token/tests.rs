use super::*;

#[test]
fn take_text_leaves_empty_shell() {
    let mut lexeme = Lexeme::new(
        LexemeKind::Identifier,
        "answer",
        Span::point(Position::new(2, 4)),
    );
    let text = lexeme.take_text();
    assert_eq!(text, "answer");
    assert!(lexeme.text.is_empty());
    assert_eq!(lexeme.kind, LexemeKind::Identifier);
    assert_eq!(lexeme.position(), Position::new(2, 4));
}

#[test]
fn end_of_input_has_no_text() {
    let eof = Lexeme::end_of_input(Position::START);
    assert_eq!(eof.kind, LexemeKind::EndOfInput);
    assert!(eof.text.is_empty());
    assert_eq!(eof.span.start, eof.span.end);
}

#[test]
fn literal_classes() {
    assert!(LexemeKind::HexInteger.is_literal());
    assert!(LexemeKind::Identifier.is_literal());
    assert!(!LexemeKind::Xor.is_literal());
    assert!(!LexemeKind::RightBracket.is_literal());
}

#[test]
fn spellings_and_names() {
    assert_eq!(LexemeKind::Ellipsis.spelling(), "...");
    assert_eq!(LexemeKind::NotEqual.spelling(), "!=");
    assert_eq!(LexemeKind::StatementTerminator.spelling(), ".");
    assert_eq!(LexemeKind::StatementTerminator.to_string(), "statement terminator");
    assert_eq!(LexemeKind::Otherwise.to_string(), "otherwise");
}
