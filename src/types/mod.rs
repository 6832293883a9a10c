//! All data types for the dsa-graphs library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
