//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::{breadth_first, depth_first, shortest_path};
pub use undirected::Graph;
