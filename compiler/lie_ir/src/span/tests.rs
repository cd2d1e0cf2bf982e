use super::*;

#[test]
fn merge_covers_both() {
    let a = Span::new(Position::new(1, 3), Position::new(1, 5));
    let b = Span::new(Position::new(1, 9), Position::new(2, 1));
    let merged = a.merge(b);
    assert_eq!(merged.start, Position::new(1, 3));
    assert_eq!(merged.end, Position::new(2, 1));
    assert_eq!(b.merge(a), merged);
}

#[test]
fn positions_order_by_line_then_column() {
    assert!(Position::new(1, 80) < Position::new(2, 1));
    assert!(Position::new(3, 2) < Position::new(3, 4));
}

#[test]
fn empty_span_is_unset() {
    assert!(Span::EMPTY.is_empty());
    assert!(!Span::point(Position::START).is_empty());
}

#[test]
fn display_formats() {
    assert_eq!(Position::new(4, 7).to_string(), "4:7");
    let span = Span::new(Position::new(1, 1), Position::new(1, 9));
    assert_eq!(span.to_string(), "1, 1 to 1, 9");
}
