//! S-expression rendering for debugging and tests.
//!
//! Operators render as `(op child ...)`, literals as their value, and
//! comparison chains as their operands and operators interleaved with no
//! tag: `(x < 5 <= y)`. The root renders one statement per line, each
//! followed by its span.

use std::fmt::Write;

use lie_stack::ensure_sufficient_stack;

use super::{Node, NodeKind, Value};

/// Render a tree as an s-expression.
pub fn to_sexpr(node: &Node) -> String {
    let mut out = String::new();
    if node.kind() == NodeKind::Root {
        for statement in node.children() {
            write_node(&mut out, statement);
            let _ = writeln!(out, " spans {}", statement.span);
        }
    } else {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    ensure_sufficient_stack(|| write_node_inner(out, node));
}

fn write_node_inner(out: &mut String, node: &Node) {
    match node.kind() {
        NodeKind::Root => out.push_str(&to_sexpr(node)),
        NodeKind::Integer
        | NodeKind::Float
        | NodeKind::Boolean
        | NodeKind::String
        | NodeKind::Identifier => write_value(out, node),
        NodeKind::Less
        | NodeKind::LessOrEqual
        | NodeKind::Greater
        | NodeKind::GreaterOrEqual
        | NodeKind::Equal
        | NodeKind::NotEqual => out.push_str(node.kind().spelling()),
        NodeKind::Comparison => write_comparison(out, node),
        NodeKind::ComparisonOps | NodeKind::ComparisonOperands => {
            write_list(out, None, node);
        }
        kind => write_list(out, Some(kind.spelling()), node),
    }
}

fn write_value(out: &mut String, node: &Node) {
    match node.value() {
        Some(Value::Integer(i)) => {
            let _ = write!(out, "{i}");
        }
        Some(Value::Float(d)) => {
            let _ = write!(out, "{d:?}");
        }
        Some(Value::Boolean(b)) => {
            let _ = write!(out, "{b}");
        }
        Some(Value::Text(text)) if node.kind() == NodeKind::String => {
            out.push('"');
            for c in text.chars() {
                match c {
                    '\n' => out.push_str("\\n"),
                    '\t' => out.push_str("\\t"),
                    c => out.push(c),
                }
            }
            out.push('"');
        }
        Some(Value::Text(text)) => out.push_str(text),
        None => {
            let _ = write!(out, "<{}>", node.kind().spelling());
        }
    }
}

fn write_list(out: &mut String, tag: Option<&str>, node: &Node) {
    out.push('(');
    let mut first = true;
    if let Some(tag) = tag {
        out.push_str(tag);
        first = false;
    }
    for child in node.children() {
        if !first {
            out.push(' ');
        }
        write_node(out, child);
        first = false;
    }
    out.push(')');
}

/// `{operand0, ops, operands}` renders as `(operand0 op0 operand1 op1 ...)`.
fn write_comparison(out: &mut String, node: &Node) {
    let (Some(first), Some(ops), Some(operands)) = (node.child(0), node.child(1), node.child(2))
    else {
        write_list(out, Some(NodeKind::Comparison.spelling()), node);
        return;
    };
    out.push('(');
    write_node(out, first);
    for (op, operand) in ops.children().iter().zip(operands.children()) {
        out.push(' ');
        write_node(out, op);
        out.push(' ');
        write_node(out, operand);
    }
    out.push(')');
}
