use pretty_assertions::assert_eq;

use super::*;

#[test]
fn renders_code_message_and_location() {
    let diag = Diagnostic::new(ErrorCode::E0301, "unexpected symbol '#'").at(Position::new(2, 5));
    assert_eq!(
        diag.to_string(),
        "error [E0301]: unexpected symbol '#'\n  --> line 2, column 5"
    );
    assert!(diag.is_error());
}

#[test]
fn failures_outside_the_text_have_no_location() {
    let diag = Diagnostic::new(ErrorCode::E0101, "cannot open source `missing.lie`").at_opt(None);
    assert_eq!(diag.position, None);
    assert_eq!(
        diag.to_string(),
        "error [E0101]: cannot open source `missing.lie`"
    );
}

#[test]
fn end_of_input_is_a_warning() {
    let diag = Diagnostic::new(ErrorCode::E0201, "source exhausted");
    assert_eq!(diag.severity(), Severity::Warning);
    assert!(!diag.is_error());
    assert_eq!(diag.to_string(), "warning [E0201]: source exhausted");
}
