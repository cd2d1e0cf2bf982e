//! Growable, order-preserving child sequence.
//!
//! Capacity is managed explicitly: a full sequence grows to
//! [`MIN_CAPACITY`] if it has never allocated, otherwise it doubles.
//! [`NodeVec::fit`] shrinks capacity to the exact length once a subtree is
//! final. Allocation failure during growth is reported, not aborted on.

use std::ops::Index;

use super::{AstError, Node};

/// Capacity allocated by the first push.
pub const MIN_CAPACITY: usize = 2;

/// Multiplier applied to the capacity of a full sequence.
pub const GROWTH_FACTOR: usize = 2;

/// Owned sequence of child nodes. Order encodes operand order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeVec {
    nodes: Vec<Node>,
}

impl NodeVec {
    /// Create an empty sequence. Does not allocate.
    pub const fn new() -> Self {
        NodeVec { nodes: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocated slots. Always `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Append a node, growing first if the sequence is full.
    pub fn push(&mut self, node: Node) -> Result<(), AstError> {
        if self.nodes.len() == self.nodes.capacity() {
            self.grow()?;
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Grow to `MIN_CAPACITY`, or by `GROWTH_FACTOR` once allocated.
    fn grow(&mut self) -> Result<(), AstError> {
        let capacity = self.nodes.capacity();
        let new_capacity = if capacity < MIN_CAPACITY {
            MIN_CAPACITY
        } else {
            capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(AstError::OutOfMemory {
                    requested: usize::MAX,
                })?
        };
        self.nodes
            .try_reserve_exact(new_capacity - self.nodes.len())
            .map_err(|_| AstError::OutOfMemory {
                requested: new_capacity,
            })
    }

    /// Shrink capacity to exactly the current length.
    pub fn fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Remove every node, leaving an unallocated sequence.
    pub(crate) fn take_all(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.nodes)
    }
}

impl Index<usize> for NodeVec {
    type Output = Node;

    #[inline]
    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a NodeVec {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
