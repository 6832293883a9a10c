//! JSON description of a labelled graph, used by the `dsag` front end.
//!
//! ```json
//! { "vertices": ["A", "B", "C"], "edges": [["A", "B"], ["B", "C"]] }
//! ```

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, NodeId};

/// Vertex labels plus label pairs for edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertex labels, registered in this order.
    pub vertices: Vec<String>,
    /// Edges as label pairs, added in this order.
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl GraphDocument {
    /// Parse a document from a JSON string.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Build the graph this document describes.
    pub fn into_graph(self) -> GraphResult<LabelledGraph> {
        let mut graph = Graph::new();
        let mut labels: HashMap<String, NodeId> = HashMap::with_capacity(self.vertices.len());

        for label in self.vertices {
            if labels.contains_key(&label) {
                return Err(GraphError::DuplicateVertex(label));
            }
            let id = graph.insert_vertex(label.clone());
            labels.insert(label, id);
        }

        for (a, b) in &self.edges {
            let a = *labels
                .get(a)
                .ok_or_else(|| GraphError::UnknownVertex(a.clone()))?;
            let b = *labels
                .get(b)
                .ok_or_else(|| GraphError::UnknownVertex(b.clone()))?;
            graph.add_edge(a, b);
        }

        debug!(
            "Loaded graph document: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(LabelledGraph { graph, labels })
    }
}

/// A graph of string labels together with a label lookup table.
#[derive(Debug, Clone)]
pub struct LabelledGraph {
    graph: Graph<String>,
    labels: HashMap<String, NodeId>,
}

impl LabelledGraph {
    /// The underlying graph.
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Resolve a label to its node handle.
    pub fn id(&self, label: &str) -> GraphResult<NodeId> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(label.to_string()))
    }
}
