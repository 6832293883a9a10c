//! Graph traversal algorithms (DFS, BFS, unweighted shortest path).
//!
//! These work on adjacency alone: `start` does not have to be a registered
//! vertex, and a handle that does not resolve yields an empty result.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::types::NodeId;

use super::Graph;

/// Pre-order depth-first traversal from `start`.
///
/// Uses an explicit stack but visits nodes in exactly the order a recursive
/// walk over each adjacency list would.
pub fn depth_first<T>(graph: &Graph<T>, start: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    if !graph.resolves(start) {
        return order;
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        trace!("dfs visit {}", current);
        order.push(current);

        // Reversed so the first neighbor is popped first.
        stack.extend(
            graph
                .neighbors(current)
                .rev()
                .filter(|n| !visited.contains(n)),
        );
    }

    order
}

/// Level-order traversal from `start`.
pub fn breadth_first<T>(graph: &Graph<T>, start: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    if !graph.resolves(start) {
        return order;
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        trace!("bfs visit {}", current);
        order.push(current);

        for neighbor in graph.neighbors(current) {
            // Marked on enqueue so no node is queued twice.
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    order
}

/// A path with the fewest edges from `source` to `target`, both inclusive.
///
/// The queue holds whole partial paths, so the first one that ends at
/// `target` is minimal. Among equally short paths, the one found through
/// earlier-added edges wins. Returns `None` if `target` is unreachable.
pub fn shortest_path<T>(graph: &Graph<T>, source: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    if !graph.resolves(source) {
        return None;
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<Vec<NodeId>> = VecDeque::new();

    visited.insert(source);
    queue.push_back(vec![source]);

    while let Some(path) = queue.pop_front() {
        let Some(&node) = path.last() else {
            continue;
        };
        if node == target {
            trace!("path {}->{} found, {} hops", source, target, path.len() - 1);
            return Some(path);
        }

        for neighbor in graph.neighbors(node) {
            if visited.insert(neighbor) {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(neighbor);
                queue.push_back(extended);
            }
        }
    }

    trace!("no path {}->{}", source, target);
    None
}
