//! CLI command implementations.
//!
//! Each `cmd_*` function prints its report; the matching `*_report`
//! function builds the text so it can be checked without capturing stdout.

use std::path::Path;

use crate::format::{GraphDocument, LabelledGraph};
use crate::types::GraphResult;

/// Visitation strategy for the `dfs` / `bfs` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Depth-first, pre-order.
    DepthFirst,
    /// Breadth-first, level order.
    BreadthFirst,
}

impl Order {
    /// Short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }
}

fn load(path: &Path) -> GraphResult<LabelledGraph> {
    GraphDocument::read_from_file(path)?.into_graph()
}

/// Vertex and edge counts of a graph document.
pub fn info_report(path: &Path, json: bool) -> GraphResult<String> {
    let labelled = load(path)?;
    let graph = labelled.graph();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        });
        Ok(serde_json::to_string_pretty(&info).unwrap_or_default())
    } else {
        Ok(format!(
            "File: {}\nVertices: {}\nEdges: {}",
            path.display(),
            graph.vertex_count(),
            graph.edge_count()
        ))
    }
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    println!("{}", info_report(path, json)?);
    Ok(())
}

/// Visitation order starting at the vertex labelled `start`.
pub fn traverse_report(path: &Path, start: &str, order: Order, json: bool) -> GraphResult<String> {
    let labelled = load(path)?;
    let start_id = labelled.id(start)?;
    let graph = labelled.graph();

    let visited = match order {
        Order::DepthFirst => graph.depth_first_search(start_id),
        Order::BreadthFirst => graph.breadth_first_search(start_id),
    };

    if json {
        let info = serde_json::json!({
            "order": order.name(),
            "start": start,
            "visited": visited,
        });
        Ok(serde_json::to_string_pretty(&info).unwrap_or_default())
    } else {
        Ok(join_labels(&visited, ", "))
    }
}

/// Run a traversal from a starting vertex.
pub fn cmd_traverse(path: &Path, start: &str, order: Order, json: bool) -> GraphResult<()> {
    println!("{}", traverse_report(path, start, order, json)?);
    Ok(())
}

/// Shortest path between two labelled vertices. "No path" is not an error.
pub fn path_report(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<String> {
    let labelled = load(path)?;
    let source_id = labelled.id(source)?;
    let target_id = labelled.id(target)?;
    let found = labelled.graph().find_shortest_path(source_id, target_id);

    if json {
        let info = serde_json::json!({
            "source": source,
            "target": target,
            "path": found,
            "hops": found.as_ref().map(|p| p.len().saturating_sub(1)),
        });
        return Ok(serde_json::to_string_pretty(&info).unwrap_or_default());
    }

    Ok(match found {
        Some(p) => format!("{} ({} hops)", join_labels(&p, " -> "), p.len() - 1),
        None => format!("No path from {} to {}", source, target),
    })
}

/// Find the shortest path between two vertices.
pub fn cmd_path(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    println!("{}", path_report(path, source, target, json)?);
    Ok(())
}

fn join_labels(labels: &[&String], sep: &str) -> String {
    labels
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(sep)
}
