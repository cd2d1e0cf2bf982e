use pretty_assertions::assert_eq;

use super::*;
use crate::Position;

fn int(i: i64) -> Node {
    Node::leaf(NodeKind::Integer, Value::Integer(i), Span::EMPTY).unwrap_or_else(|e| panic!("{e}"))
}

fn ident(name: &str) -> Node {
    Node::leaf(NodeKind::Identifier, Value::Text(name.to_owned()), Span::EMPTY)
        .unwrap_or_else(|e| panic!("{e}"))
}

fn binary(kind: NodeKind, left: Node, right: Node) -> Node {
    let mut node = Node::new(kind);
    assert!(node.push_child(left).is_ok());
    assert!(node.push_child(right).is_ok());
    node
}

// === Construction ===

#[test]
fn new_node_is_empty() {
    let node = Node::new(NodeKind::Plus);
    assert_eq!(node.kind(), NodeKind::Plus);
    assert!(node.value().is_none());
    assert!(node.span.is_empty());
    assert!(node.children().is_empty());
    assert_eq!(node.children().capacity(), 0);
}

#[test]
fn value_only_on_value_bearing_kinds() {
    let mut plus = Node::new(NodeKind::Plus);
    assert_eq!(
        plus.set_value(Value::Integer(1)),
        Err(AstError::ValueMismatch {
            kind: NodeKind::Plus,
            value: "integer",
        })
    );
    assert!(plus.value().is_none());

    let mut float = Node::new(NodeKind::Float);
    assert!(float.set_value(Value::Integer(1)).is_err());
    assert!(float.set_value(Value::Float(0.5)).is_ok());
    assert_eq!(float.as_float(), Some(0.5));
}

#[test]
fn text_kinds_accept_text() {
    assert!(NodeKind::String.accepts(&Value::Text(String::new())));
    assert!(NodeKind::Identifier.accepts(&Value::Text(String::new())));
    assert!(!NodeKind::Boolean.accepts(&Value::Text(String::new())));
    assert!(NodeKind::Boolean.accepts(&Value::Boolean(true)));
}

// === Child sequence growth ===

#[test]
fn children_grow_by_doubling_from_minimum() {
    let mut root = Node::new(NodeKind::Root);
    let mut capacities = Vec::new();
    for i in 0..9 {
        assert!(root.push_child(int(i)).is_ok());
        capacities.push(root.children().capacity());
    }
    assert_eq!(capacities, vec![2, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(root.children().len(), 9);
}

#[test]
fn fit_shrinks_to_length() {
    let mut root = Node::new(NodeKind::Root);
    for i in 0..5 {
        assert!(root.push_child(int(i)).is_ok());
    }
    assert_eq!(root.children().capacity(), 8);
    root.fit();
    assert_eq!(root.children().capacity(), 5);
    assert_eq!(root.children().len(), 5);

    // Growth resumes by doubling from the fitted capacity.
    assert!(root.push_child(int(5)).is_ok());
    assert_eq!(root.children().capacity(), 10);
}

#[test]
fn fit_on_empty_sequence() {
    let mut node = Node::new(NodeKind::Call);
    node.fit();
    assert_eq!(node.children().capacity(), 0);
}

#[test]
fn children_preserve_order() {
    let node = binary(NodeKind::Minus, int(7), int(3));
    assert_eq!(node.child(0).and_then(Node::as_integer), Some(7));
    assert_eq!(node.child(1).and_then(Node::as_integer), Some(3));
    assert!(node.child(2).is_none());
}

// === Ownership ===

#[test]
fn take_text_leaves_empty_marker() {
    let mut node = ident("speed");
    assert_eq!(node.take_text().as_deref(), Some("speed"));
    assert_eq!(node.as_text(), Some(""));
    // Taking again yields the empty marker, never a stale value.
    assert_eq!(node.take_text().as_deref(), Some(""));
    assert_eq!(int(1).take_text(), None);
}

#[test]
fn node_count_counts_each_node_once() {
    let tree = binary(
        NodeKind::Plus,
        int(2),
        binary(NodeKind::Mul, int(6), ident("x")),
    );
    assert_eq!(tree.node_count(), 5);
}

#[test]
fn with_span_builds_an_empty_node() {
    let span = Span::new(Position::new(2, 3), Position::new(2, 9));
    let node = Node::with_span(NodeKind::Call, span);
    assert_eq!(node.kind(), NodeKind::Call);
    assert_eq!(node.span, span);
    assert_eq!(node.value(), None);
    assert!(node.children().is_empty());
}

#[test]
fn dropping_deep_tree_does_not_overflow() {
    let mut node = int(0);
    for _ in 0..200_000 {
        let mut parent = Node::new(NodeKind::UnaryMinus);
        assert!(parent.push_child(node).is_ok());
        node = parent;
    }
    assert_eq!(node.children().len(), 1);
    drop(node);
}

#[test]
fn printing_deep_tree_does_not_overflow() {
    const DEPTH: usize = 100_000;
    let mut node = int(1);
    for _ in 0..DEPTH {
        let mut parent = Node::new(NodeKind::UnaryMinus);
        assert!(parent.push_child(node).is_ok());
        node = parent;
    }
    let printed = to_sexpr(&node);
    assert_eq!(printed.len(), DEPTH * 4 + 1);
    assert!(printed.starts_with("(- (- "));
    assert!(printed.ends_with(" 1))"));
}

// === Printing ===

#[test]
fn sexpr_of_arithmetic() {
    let tree = binary(
        NodeKind::Minus,
        binary(NodeKind::Plus, int(2), binary(NodeKind::Mul, int(6), int(7))),
        binary(NodeKind::Mod, int(4), int(6)),
    );
    assert_eq!(to_sexpr(&tree), "(- (+ 2 (* 6 7)) (mod 4 6))");
}

#[test]
fn sexpr_of_comparison_chain() {
    let mut ops = Node::new(NodeKind::ComparisonOps);
    assert!(ops.push_child(Node::new(NodeKind::Less)).is_ok());
    assert!(ops.push_child(Node::new(NodeKind::LessOrEqual)).is_ok());
    let mut operands = Node::new(NodeKind::ComparisonOperands);
    assert!(operands.push_child(int(5)).is_ok());
    assert!(operands.push_child(ident("y")).is_ok());
    let mut cmp = Node::new(NodeKind::Comparison);
    assert!(cmp.push_child(ident("x")).is_ok());
    assert!(cmp.push_child(ops).is_ok());
    assert!(cmp.push_child(operands).is_ok());
    assert_eq!(cmp.to_string(), "(x < 5 <= y)");
}

#[test]
fn sexpr_of_literals() {
    let s = Node::leaf(NodeKind::String, Value::Text("a\tb\n".into()), Span::EMPTY)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(to_sexpr(&s), "\"a\\tb\\n\"");
    let f = Node::leaf(NodeKind::Float, Value::Float(0.42), Span::EMPTY)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(to_sexpr(&f), "0.42");
    let b = Node::leaf(NodeKind::Boolean, Value::Boolean(false), Span::EMPTY)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(to_sexpr(&b), "false");
    let mut neg = Node::new(NodeKind::UnaryMinus);
    assert!(neg.push_child(int(3)).is_ok());
    assert_eq!(to_sexpr(&neg), "(- 3)");
}

#[test]
fn sexpr_of_root_lists_statements_with_spans() {
    let mut root = Node::new(NodeKind::Root);
    let mut stmt = binary(NodeKind::Call, ident("f"), int(1));
    stmt.span = Span::new(Position::new(1, 1), Position::new(1, 4));
    assert!(root.push_child(stmt).is_ok());
    assert_eq!(to_sexpr(&root), "(call f 1) spans 1, 1 to 1, 4\n");
    assert_eq!(to_sexpr(&Node::new(NodeKind::Root)), "");
}
