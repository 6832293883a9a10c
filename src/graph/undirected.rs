//! Core graph structure: an arena of nodes plus the registered vertex set.

use indexmap::IndexSet;
use log::{debug, warn};

use crate::types::{Node, NodeId};

use super::traversal;

/// An undirected graph of values of type `T`.
///
/// The graph owns every node it has created. Callers hold [`NodeId`] handles;
/// adjacency is stored as handles too, so removing a vertex never drops its
/// neighbors.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Every node ever created, indexed by `NodeId`.
    nodes: Vec<Node<T>>,
    /// Nodes registered via `add_vertex`, in registration order.
    vertices: IndexSet<NodeId>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            vertices: IndexSet::new(),
        }
    }

    /// Allocate a node holding `value` without registering it as a vertex.
    pub fn create_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value));
        id
    }

    /// Allocate a node and register it as a vertex in one step.
    pub fn insert_vertex(&mut self, value: T) -> NodeId {
        let id = self.create_node(value);
        self.add_vertex(id);
        id
    }

    /// Register `node` as a vertex. Adding a vertex twice is a no-op.
    pub fn add_vertex(&mut self, node: NodeId) {
        if !self.resolves(node) {
            warn!("add_vertex: {} does not belong to this graph", node);
            return;
        }
        if self.vertices.insert(node) {
            debug!("Added vertex {}", node);
        }
    }

    /// Register each node in order.
    pub fn add_vertices<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for node in nodes {
            self.add_vertex(node);
        }
    }

    /// Link `a` and `b` in both directions.
    ///
    /// Neither endpoint has to be registered as a vertex. If either handle does
    /// not resolve to a node of this graph nothing is linked.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if !self.resolves(a) || !self.resolves(b) {
            warn!("add_edge: {}-{} references a foreign node", a, b);
            return;
        }
        self.nodes[a.0].link(b);
        self.nodes[b.0].link(a);
        debug!("Added edge {}-{}", a, b);
    }

    /// Unlink `a` and `b` in both directions. Missing edges are ignored.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        let mut removed = false;
        if let Some(node) = self.nodes.get_mut(a.0) {
            removed |= node.unlink(b);
        }
        if let Some(node) = self.nodes.get_mut(b.0) {
            removed |= node.unlink(a);
        }
        if removed {
            debug!("Removed edge {}-{}", a, b);
        }
    }

    /// Sever every edge of `node` and drop it from the vertex set.
    ///
    /// The node itself stays in the arena, so its handle still resolves to its
    /// value, but it has no neighbors afterwards.
    pub fn remove_vertex(&mut self, node: NodeId) {
        let Some(removed) = self.nodes.get_mut(node.0) else {
            return;
        };
        let neighbors = removed.take_adjacent();
        for neighbor in &neighbors {
            if let Some(n) = self.nodes.get_mut(neighbor.0) {
                n.unlink(node);
            }
        }
        if self.vertices.shift_remove(&node) {
            debug!("Removed vertex {} ({} edges)", node, neighbors.len());
        }
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct undirected edges, self-loops counted once.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| node.adjacent().filter(|n| n.0 >= idx).count())
            .sum()
    }

    /// Whether `node` is registered as a vertex.
    pub fn contains(&self, node: NodeId) -> bool {
        self.vertices.contains(&node)
    }

    /// Whether `a` and `b` are linked.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.node(a).is_some_and(|n| n.is_adjacent(b))
    }

    /// Registered vertices in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vertices.iter().copied()
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Get the value stored at `id`.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    /// Get the value stored at `id` (mutable).
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(Node::value_mut)
    }

    /// Neighbors of `id` in edge-insertion order. Empty for unknown handles.
    pub fn neighbors(&self, id: NodeId) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.node(id).into_iter().flat_map(|n| n.adjacent())
    }

    /// Depth-first visitation order of the values reachable from `start`.
    pub fn depth_first_search(&self, start: NodeId) -> Vec<&T> {
        self.values_of(traversal::depth_first(self, start))
    }

    /// Breadth-first visitation order of the values reachable from `start`.
    pub fn breadth_first_search(&self, start: NodeId) -> Vec<&T> {
        self.values_of(traversal::breadth_first(self, start))
    }

    /// Values along a path with the fewest edges from `source` to `target`,
    /// or `None` when `target` is unreachable.
    pub fn find_shortest_path(&self, source: NodeId, target: NodeId) -> Option<Vec<&T>> {
        traversal::shortest_path(self, source, target).map(|path| self.values_of(path))
    }

    fn values_of(&self, ids: Vec<NodeId>) -> Vec<&T> {
        ids.into_iter().filter_map(|id| self.value(id)).collect()
    }

    pub(crate) fn resolves(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }
}

impl<T: PartialEq> Graph<T> {
    /// First registered vertex holding `value`.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.vertices()
            .find(|&id| self.value(id).is_some_and(|v| v == value))
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
