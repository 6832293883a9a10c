//! Build a small graph and run each traversal over it.

use dsa_graphs::*;

fn main() {
    let mut graph = Graph::new();

    let a = graph.create_node("A");
    let b = graph.create_node("B");
    let c = graph.create_node("C");
    let d = graph.create_node("D");
    let e = graph.create_node("E");

    graph.add_vertices([a, b, c, d, e]);
    graph.add_edge(a, b);
    graph.add_edge(a, c);
    graph.add_edge(b, d);
    graph.add_edge(c, d);
    graph.add_edge(d, e);

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    println!("DFS from A: {:?}", graph.depth_first_search(a));
    println!("BFS from A: {:?}", graph.breadth_first_search(a));

    match graph.find_shortest_path(a, e) {
        Some(path) => println!("Shortest path A -> E: {:?}", path),
        None => println!("No path from A to E"),
    }
}
