use super::*;

#[test]
fn digits_split_on_zero() {
    assert_eq!(classify(Some(b'0')), CharClass::Zero);
    for c in b'1'..=b'9' {
        assert_eq!(classify(Some(c)), CharClass::NonZeroDigit);
    }
    assert!(CharClass::Zero.is_digit());
    assert!(!CharClass::Letter.is_digit());
}

#[test]
fn identifier_classes() {
    assert_eq!(classify(Some(b'q')), CharClass::Letter);
    assert_eq!(classify(Some(b'Z')), CharClass::Letter);
    assert_eq!(classify(Some(b'_')), CharClass::Underscore);
    assert!(classify(Some(b'7')).is_identifier_continue());
    assert!(!classify(Some(b'?')).is_identifier_continue());
}

#[test]
fn layout_classes() {
    assert_eq!(classify(Some(b' ')), CharClass::Whitespace);
    assert_eq!(classify(Some(b'\t')), CharClass::Whitespace);
    assert_eq!(classify(Some(b'\r')), CharClass::Whitespace);
    assert_eq!(classify(Some(b'\n')), CharClass::LineBreak);
    assert_eq!(classify(None), CharClass::EndOfInput);
}

#[test]
fn symbols_keep_their_byte() {
    for &c in b"()[]{}<>!=.:,;^+-*/" {
        assert_eq!(classify(Some(c)), CharClass::Symbol(c));
    }
    assert_eq!(classify(Some(b'"')), CharClass::Quote);
}

#[test]
fn everything_else_is_invalid() {
    for &c in b"#$%&'?@\\`|~" {
        assert_eq!(classify(Some(c)), CharClass::Invalid(c));
    }
    assert_eq!(classify(Some(0xC3)), CharClass::Invalid(0xC3));
    assert_eq!(classify(Some(0)), CharClass::Invalid(0));
}
