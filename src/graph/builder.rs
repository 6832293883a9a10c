//! Fluent API for building Graph instances.

use crate::types::NodeId;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Every value added through the builder is registered as a vertex.
pub struct GraphBuilder<T> {
    graph: Graph<T>,
}

impl<T> GraphBuilder<T> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Add a vertex, returns its handle.
    pub fn vertex(&mut self, value: T) -> NodeId {
        self.graph.insert_vertex(value)
    }

    /// Add several vertices in order, returns their handles in the same order.
    pub fn vertices<I>(&mut self, values: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(|v| self.vertex(v)).collect()
    }

    /// Add an edge between two nodes.
    pub fn edge(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.graph.add_edge(a, b);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<T> {
        self.graph
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
