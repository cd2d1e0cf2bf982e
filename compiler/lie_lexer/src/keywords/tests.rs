use super::*;

#[test]
fn declaration_keywords() {
    assert_eq!(lookup("mod"), Some(LexemeKind::Mod));
    assert_eq!(lookup("func"), Some(LexemeKind::Func));
    assert_eq!(lookup("fn"), Some(LexemeKind::Fn));
    assert_eq!(lookup("use"), Some(LexemeKind::Use));
    assert_eq!(lookup("as"), Some(LexemeKind::As));
    assert_eq!(lookup("let"), Some(LexemeKind::Let));
}

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("if"), Some(LexemeKind::If));
    assert_eq!(lookup("else"), Some(LexemeKind::Else));
    assert_eq!(lookup("where"), Some(LexemeKind::Where));
    assert_eq!(lookup("cases"), Some(LexemeKind::Cases));
    assert_eq!(lookup("otherwise"), Some(LexemeKind::Otherwise));
}

#[test]
fn operator_and_value_keywords() {
    assert_eq!(lookup("not"), Some(LexemeKind::Not));
    assert_eq!(lookup("and"), Some(LexemeKind::And));
    assert_eq!(lookup("or"), Some(LexemeKind::Or));
    assert_eq!(lookup("xor"), Some(LexemeKind::Xor));
    assert_eq!(lookup("true"), Some(LexemeKind::True));
    assert_eq!(lookup("false"), Some(LexemeKind::False));
}

#[test]
fn every_keyword_spelling_round_trips() {
    for kind in [
        LexemeKind::Mod,
        LexemeKind::Func,
        LexemeKind::Fn,
        LexemeKind::Use,
        LexemeKind::As,
        LexemeKind::Let,
        LexemeKind::If,
        LexemeKind::Else,
        LexemeKind::Where,
        LexemeKind::Cases,
        LexemeKind::Otherwise,
        LexemeKind::Not,
        LexemeKind::And,
        LexemeKind::Or,
        LexemeKind::Xor,
        LexemeKind::True,
        LexemeKind::False,
    ] {
        assert_eq!(lookup(kind.spelling()), Some(kind), "{kind:?}");
    }
}

#[test]
fn non_keywords() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("modulo"), None);
    assert_eq!(lookup("True"), None);
    assert_eq!(lookup("empty?"), None);
    assert_eq!(lookup("otherwiser"), None);
}
