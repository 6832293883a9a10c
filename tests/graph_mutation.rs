//! Vertex and edge mutation: symmetry, removal, permissive handling.

use dsa_graphs::{Graph, GraphBuilder, NodeId};

// ==================== Helper ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn neighbors_of(graph: &Graph<&'static str>, id: NodeId) -> Vec<&'static str> {
    graph
        .neighbors(id)
        .map(|n| *graph.value(n).unwrap())
        .collect()
}

// ==================== Vertex Tests ====================

#[test]
fn test_add_vertex_is_idempotent() {
    init_logging();
    let mut graph = Graph::new();
    let a = graph.create_node("A");

    graph.add_vertex(a);
    graph.add_vertex(a);

    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.contains(a));
}

#[test]
fn test_create_node_does_not_register() {
    let mut graph = Graph::new();
    let a = graph.create_node("A");

    assert!(!graph.contains(a));
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.value(a), Some(&"A"));
}

#[test]
fn test_add_vertices_in_order() {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = ["A", "B", "C"].map(|v| graph.create_node(v)).to_vec();

    graph.add_vertices(ids.iter().copied());
    graph.add_vertices(ids.iter().rev().copied());

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.vertices().collect::<Vec<_>>(), ids);
}

#[test]
fn test_equal_values_are_distinct_nodes() {
    let mut graph = Graph::new();
    let x1 = graph.insert_vertex("X");
    let x2 = graph.insert_vertex("X");
    let y = graph.insert_vertex("Y");

    graph.add_edge(x1, y);

    assert_ne!(x1, x2);
    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.has_edge(y, x1));
    assert!(!graph.has_edge(y, x2));
    assert_eq!(graph.find(&"X"), Some(x1));
    assert_eq!(graph.find(&"Z"), None);
}

#[test]
fn test_value_mut_updates_payload() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex(String::from("A"));

    graph.value_mut(a).unwrap().push('1');

    assert_eq!(graph.value(a).map(String::as_str), Some("A1"));
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_is_symmetric() {
    init_logging();
    let mut graph = Graph::new();
    let a = graph.insert_vertex("A");
    let b = graph.insert_vertex("B");

    graph.add_edge(a, b);

    assert!(graph.has_edge(a, b));
    assert!(graph.has_edge(b, a));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_edge_clears_both_directions() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex("A");
    let b = graph.insert_vertex("B");
    graph.add_edge(a, b);

    graph.remove_edge(b, a);

    assert!(!graph.has_edge(a, b));
    assert!(!graph.has_edge(b, a));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_missing_edge_is_noop() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex("A");
    let b = graph.insert_vertex("B");
    let c = graph.insert_vertex("C");
    graph.add_edge(a, b);

    graph.remove_edge(a, c);

    assert!(graph.has_edge(a, b));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_duplicate_edge_counted_once() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex("A");
    let b = graph.insert_vertex("B");

    graph.add_edge(a, b);
    graph.add_edge(b, a);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node(a).unwrap().degree(), 1);
}

#[test]
fn test_self_loop() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex("A");

    graph.add_edge(a, a);

    assert!(graph.has_edge(a, a));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.depth_first_search(a), vec![&"A"]);
}

#[test]
fn test_edge_between_unregistered_nodes() {
    let mut graph = Graph::new();
    let a = graph.create_node("A");
    let b = graph.create_node("B");

    graph.add_edge(a, b);

    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.has_edge(a, b));
    assert_eq!(graph.breadth_first_search(a), vec![&"A", &"B"]);
}

#[test]
fn test_edge_to_foreign_handle_is_ignored() {
    let mut other = Graph::new();
    other.create_node("P");
    other.create_node("Q");
    let foreign = other.create_node("R");

    let mut graph = Graph::new();
    let a = graph.insert_vertex("A");
    graph.add_edge(a, foreign);

    assert_eq!(graph.node(a).unwrap().degree(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_adjacency_keeps_insertion_order() {
    let mut graph = Graph::new();
    let hub = graph.insert_vertex("hub");
    let c = graph.insert_vertex("C");
    let a = graph.insert_vertex("A");
    let b = graph.insert_vertex("B");

    graph.add_edge(hub, c);
    graph.add_edge(hub, a);
    graph.add_edge(hub, b);

    assert_eq!(neighbors_of(&graph, hub), vec!["C", "A", "B"]);
}

// ==================== Vertex Removal Tests ====================

#[test]
fn test_remove_vertex_severs_all_links() {
    init_logging();
    let mut graph = Graph::new();
    let center = graph.insert_vertex("V");
    let spokes: Vec<NodeId> = ["N1", "N2", "N3"]
        .map(|v| graph.insert_vertex(v))
        .to_vec();
    for &s in &spokes {
        graph.add_edge(center, s);
    }
    graph.add_edge(spokes[0], spokes[1]);

    graph.remove_vertex(center);

    assert!(!graph.contains(center));
    assert_eq!(graph.vertex_count(), 3);
    for &s in &spokes {
        assert!(!graph.has_edge(s, center));
    }
    assert!(graph.has_edge(spokes[0], spokes[1]));
    assert_eq!(graph.node(center).unwrap().degree(), 0);
    assert_eq!(graph.value(center), Some(&"V"));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_vertex_keeps_neighbor_order() {
    let mut graph = Graph::new();
    let x = graph.insert_vertex("X");
    let a = graph.insert_vertex("A");
    let v = graph.insert_vertex("V");
    let b = graph.insert_vertex("B");
    graph.add_edge(x, a);
    graph.add_edge(x, v);
    graph.add_edge(x, b);

    graph.remove_vertex(v);

    assert_eq!(neighbors_of(&graph, x), vec!["A", "B"]);
}

#[test]
fn test_remove_vertex_twice_is_noop() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex("A");
    let b = graph.insert_vertex("B");
    graph.add_edge(a, b);

    graph.remove_vertex(a);
    graph.remove_vertex(a);

    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.contains(b));
}

#[test]
fn test_removed_vertex_can_be_readded() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex("A");
    let b = graph.insert_vertex("B");
    graph.add_edge(a, b);
    graph.remove_vertex(a);

    graph.add_vertex(a);

    assert!(graph.contains(a));
    assert!(!graph.has_edge(a, b));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_registers_and_links() {
    let mut builder = GraphBuilder::new();
    let ids = builder.vertices(["A", "B", "C"]);
    builder.edge(ids[0], ids[1]).edge(ids[1], ids[2]);
    let graph = builder.build();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(ids.iter().all(|&id| graph.contains(id)));
    assert_eq!(graph.depth_first_search(ids[0]), vec![&"A", &"B", &"C"]);
}
