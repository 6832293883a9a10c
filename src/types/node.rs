//! Node handles and the node payload itself.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

/// Handle to a node owned by a [`Graph`](crate::graph::Graph) arena.
///
/// Identity is the handle, not the value: two nodes holding equal values are
/// still distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A value plus the set of nodes it is directly connected to.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    /// Neighbors in the order their edges were added.
    adjacent: IndexSet<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// The payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the payload.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Neighbors in edge-insertion order.
    pub fn adjacent(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.adjacent.iter().copied()
    }

    /// Whether `other` is a neighbor.
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Number of neighbors.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        self.adjacent.insert(other)
    }

    // shift_remove keeps the remaining neighbors in insertion order, which
    // traversal order depends on.
    pub(crate) fn unlink(&mut self, other: NodeId) -> bool {
        self.adjacent.shift_remove(&other)
    }

    pub(crate) fn take_adjacent(&mut self) -> IndexSet<NodeId> {
        std::mem::take(&mut self.adjacent)
    }
}
