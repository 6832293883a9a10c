//! Graph document I/O.

pub mod document;

pub use document::{GraphDocument, LabelledGraph};
