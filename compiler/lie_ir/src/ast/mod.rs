//! Abstract syntax tree.
//!
//! A tree of owned [`Node`]s. Every node has a class ([`NodeKind`]), a source
//! [`Span`] and an ordered child sequence ([`NodeVec`]). Only value-bearing
//! literal classes carry a [`Value`]; all other classes mean what their kind
//! and children say.
//!
//! # Shapes
//!
//! | Kind | Children |
//! |---|---|
//! | `Root` | statements, in source order |
//! | binary operators | left, right |
//! | `UnaryMinus`, `Not` | operand |
//! | `Comparison` | first operand, `ComparisonOps`, `ComparisonOperands` |
//! | `Call` | callee, arguments... |
//! | `Subscript` | target, indices... |
//! | `Member` | target, `Identifier` |

mod node_vec;
mod sexpr;

use std::fmt;

pub use node_vec::{NodeVec, GROWTH_FACTOR, MIN_CAPACITY};
pub use sexpr::to_sexpr;

use crate::Span;

/// Node classes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Root,

    // === Literals ===
    Integer,
    Float,
    Boolean,
    String,
    Identifier,

    // === Arithmetic ===
    Plus,
    Minus,
    UnaryMinus,
    Mul,
    Div,
    Mod,
    Pow,

    // === Logic ===
    Not,
    And,
    Or,
    Xor,

    // === Comparison chains ===
    /// Wrapper: `{operand0, ComparisonOps, ComparisonOperands}`.
    Comparison,
    ComparisonOps,
    ComparisonOperands,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,

    // === Trailers ===
    Call,
    Subscript,
    Member,
}

impl NodeKind {
    /// Whether `value` is the payload this kind carries.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (NodeKind::Integer, Value::Integer(_))
                | (NodeKind::Float, Value::Float(_))
                | (NodeKind::Boolean, Value::Boolean(_))
                | (NodeKind::String | NodeKind::Identifier, Value::Text(_))
        )
    }

    /// Operator name used by the s-expression printer.
    pub fn spelling(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Integer => "integer",
            NodeKind::Float => "float",
            NodeKind::Boolean => "boolean",
            NodeKind::String => "string",
            NodeKind::Identifier => "identifier",
            NodeKind::Plus => "+",
            NodeKind::Minus | NodeKind::UnaryMinus => "-",
            NodeKind::Mul => "*",
            NodeKind::Div => "/",
            NodeKind::Mod => "mod",
            NodeKind::Pow => "^",
            NodeKind::Not => "not",
            NodeKind::And => "and",
            NodeKind::Or => "or",
            NodeKind::Xor => "xor",
            NodeKind::Comparison => "cmp",
            NodeKind::ComparisonOps => "ops",
            NodeKind::ComparisonOperands => "operands",
            NodeKind::Less => "<",
            NodeKind::LessOrEqual => "<=",
            NodeKind::Greater => ">",
            NodeKind::GreaterOrEqual => ">=",
            NodeKind::Equal => "==",
            NodeKind::NotEqual => "!=",
            NodeKind::Call => "call",
            NodeKind::Subscript => "subscript",
            NodeKind::Member => "member",
        }
    }
}

/// Literal payload of a value-bearing node.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// String contents or identifier name. Empty once moved out.
    Text(String),
}

impl Value {
    fn variant_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Text(_) => "text",
        }
    }
}

/// Errors raised while building a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// Growing a child sequence failed to allocate.
    #[error("out of memory growing child sequence to {requested} nodes")]
    OutOfMemory { requested: usize },
    /// A value was attached to a node kind that cannot carry it.
    #[error("{kind:?} node cannot hold a {value} value")]
    ValueMismatch { kind: NodeKind, value: &'static str },
}

/// A tree node. Owns its value and its whole subtree.
#[derive(Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    value: Option<Value>,
    pub span: Span,
    children: NodeVec,
}

impl Node {
    /// Empty node: no value, empty span, no children.
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            value: None,
            span: Span::EMPTY,
            children: NodeVec::new(),
        }
    }

    /// Empty node with a span.
    pub fn with_span(kind: NodeKind, span: Span) -> Self {
        let mut node = Node::new(kind);
        node.span = span;
        node
    }

    /// Value-bearing leaf.
    pub fn leaf(kind: NodeKind, value: Value, span: Span) -> Result<Self, AstError> {
        let mut node = Node::with_span(kind, span);
        node.set_value(value)?;
        Ok(node)
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Attach a value. Fails unless the kind accepts this payload.
    pub fn set_value(&mut self, value: Value) -> Result<(), AstError> {
        if !self.kind.accepts(&value) {
            return Err(AstError::ValueMismatch {
                kind: self.kind,
                value: value.variant_name(),
            });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Move the text payload out, leaving an empty marker behind.
    ///
    /// Returns `None` for nodes without text.
    pub fn take_text(&mut self) -> Option<String> {
        match &mut self.value {
            Some(Value::Text(text)) => Some(std::mem::take(text)),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            Some(Value::Integer(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.value {
            Some(Value::Float(d)) => Some(d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Some(Value::Boolean(b)) => Some(b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn children(&self) -> &NodeVec {
        &self.children
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Append a child. The only way trees are built.
    #[inline]
    pub fn push_child(&mut self, child: Node) -> Result<(), AstError> {
        self.children.push(child)
    }

    /// Shrink this node's child sequence to its exact length.
    #[inline]
    pub fn fit(&mut self) {
        self.children.fit();
    }

    /// Number of nodes in the subtree, this node included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&Node> = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

/// Subtrees are torn down iteratively so dropping a deeply nested tree
/// cannot overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending = self.children.take_all();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children.take_all());
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("kind", &self.kind);
        if let Some(value) = &self.value {
            s.field("value", value);
        }
        s.field("span", &self.span);
        if !self.children.is_empty() {
            s.field("children", &self.children.as_slice());
        }
        s.finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_sexpr(self))
    }
}

#[cfg(test)]
mod tests;
