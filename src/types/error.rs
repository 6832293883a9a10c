//! Error types for the dsa-graphs library.
//!
//! Graph mutation and traversal never fail; these errors come from loading
//! graph documents and from the command-line front end.

use thiserror::Error;

/// All errors that can occur while loading or querying a graph document.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge names a vertex label the document never declared.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// The same vertex label is declared twice.
    #[error("Duplicate vertex label: {0}")]
    DuplicateVertex(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("Invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for dsa-graphs operations.
pub type GraphResult<T> = Result<T, GraphError>;
