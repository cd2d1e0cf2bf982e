//! Compositional tests for the parser.
//!
//! Every pair of binary operators is checked for precedence and
//! associativity, generated expression trees must come back in the shape
//! they were written, and deeply nested input must parse and drop without
//! exhausting the stack.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lie_ir::ast::to_sexpr;
use lie_ir::{Node, NodeKind};

use crate::parse_str;

fn parse_ok(source: &str) -> Node {
    let output = parse_str(source);
    assert!(output.error.is_none(), "{:?}", output.error);
    output.root
}

fn sexpr(source: &str) -> String {
    let root = parse_ok(source);
    to_sexpr(root.child(0).unwrap())
}

mod operator_matrix {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Binary operators with their binding strength (higher binds tighter).
    const OPERATORS: &[(&str, u8)] = &[
        ("or", 1),
        ("xor", 1),
        ("and", 2),
        ("+", 4),
        ("-", 4),
        ("*", 5),
        ("/", 5),
        ("mod", 5),
        ("^", 6),
    ];

    #[test]
    fn every_pair_of_binary_operators() {
        for &(first, first_level) in OPERATORS {
            for &(second, second_level) in OPERATORS {
                let source = format!("a {first} b {second} c.\n");
                let right_nested = second_level > first_level
                    || (first == "^" && second == "^");
                let expected = if right_nested {
                    format!("({first} a ({second} b c))")
                } else {
                    format!("({second} ({first} a b) c)")
                };
                assert_eq!(sexpr(&source), expected, "{source:?}");
            }
        }
    }

    #[test]
    fn comparisons_sit_between_arithmetic_and_logic() {
        for &(op, level) in OPERATORS {
            let source = format!("a {op} b < c.\n");
            let expected = if level > 3 {
                format!("(({op} a b) < c)")
            } else {
                format!("({op} a (b < c))")
            };
            assert_eq!(sexpr(&source), expected, "{source:?}");
        }
    }
}

mod generated {
    use proptest::prelude::*;

    use super::*;

    /// `(source, expected s-expression)` for a fully parenthesized tree.
    fn expression() -> impl Strategy<Value = (String, String)> {
        let leaf = prop_oneof![
            (0u32..1000).prop_map(|n| (n.to_string(), n.to_string())),
            "[a-z][a-z0-9]{0,3}"
                .prop_filter("keywords are not operands", |name| !matches!(
                    name.as_str(),
                    "mod" | "func" | "fn" | "use" | "as" | "let" | "if" | "else" | "not" | "and"
                        | "or" | "xor" | "true"
                ))
                .prop_map(|name| (name.clone(), name)),
        ];
        leaf.prop_recursive(6, 64, 2, |inner| {
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "mod", "^", "and", "or", "xor"]),
                inner,
            )
                .prop_map(|((ls, le), op, (rs, re))| {
                    (format!("({ls} {op} {rs})"), format!("({op} {le} {re})"))
                })
        })
    }

    proptest! {
        #[test]
        fn parenthesized_trees_keep_their_shape((source, expected) in expression()) {
            let parsed = sexpr(&format!("{source}.\n"));
            prop_assert_eq!(parsed, expected);
        }

        #[test]
        fn additive_chains_fold_left(
            first in 0u32..100,
            rest in prop::collection::vec((prop::bool::ANY, 0u32..100), 0..12),
        ) {
            let mut source = first.to_string();
            let mut expected = first.to_string();
            for (plus, n) in rest {
                let op = if plus { "+" } else { "-" };
                source = format!("{source} {op} {n}");
                expected = format!("({op} {expected} {n})");
            }
            prop_assert_eq!(sexpr(&format!("{source}.\n")), expected);
        }

        #[test]
        fn statement_count_matches_input(count in 0usize..40) {
            let source = "x + 1.\n".repeat(count);
            let root = parse_ok(&source);
            prop_assert_eq!(root.children().len(), count);
            prop_assert_eq!(root.children().capacity(), count);
        }
    }
}

mod deep_nesting {
    use pretty_assertions::assert_eq;

    use super::*;

    const DEPTH: usize = 100_000;

    #[test]
    fn nested_parentheses() {
        let source = format!("{}1{}.\n", "(".repeat(DEPTH), ")".repeat(DEPTH));
        let root = parse_ok(&source);
        assert_eq!(root.child(0).unwrap().as_integer(), Some(1));
    }

    #[test]
    fn nested_unary_minus() {
        let source = format!("{}1.\n", "- ".repeat(DEPTH));
        let root = parse_ok(&source);
        assert_eq!(root.node_count(), DEPTH + 2);
        assert_eq!(root.child(0).unwrap().kind(), NodeKind::UnaryMinus);
    }

    #[test]
    fn nested_unary_minus_prints() {
        let source = format!("{}1.\n", "-".repeat(DEPTH));
        let root = parse_ok(&source);
        let expected = format!(
            "{}1{} spans 1, 1 to 1, {}\n",
            "(- ".repeat(DEPTH),
            ")".repeat(DEPTH),
            DEPTH + 1
        );
        assert_eq!(to_sexpr(&root), expected);
    }

    #[test]
    fn nested_not() {
        let source = format!("{}a.\n", "not ".repeat(DEPTH));
        let root = parse_ok(&source);
        assert_eq!(root.node_count(), DEPTH + 2);
    }

    #[test]
    fn right_nested_powers() {
        let source = format!("{}2.\n", "2^".repeat(DEPTH));
        let root = parse_ok(&source);
        assert_eq!(root.child(0).unwrap().kind(), NodeKind::Pow);
        assert_eq!(root.node_count(), 2 * DEPTH + 2);
    }

    #[test]
    fn long_left_fold() {
        let source = format!("1{}.\n", " + 1".repeat(DEPTH));
        let root = parse_ok(&source);
        assert_eq!(root.node_count(), 2 * DEPTH + 2);
    }
}
