//! dsa-graphs: an in-memory undirected graph with basic traversals.
//!
//! Nodes live in an arena owned by [`Graph`] and are addressed by
//! [`NodeId`] handles. Edges are symmetric; depth-first, breadth-first and
//! unweighted shortest-path traversals follow each node's neighbors in the
//! order the edges were added.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphDocument, LabelledGraph};
pub use graph::{breadth_first, depth_first, shortest_path, Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, Node, NodeId};
