//! Subgraph extraction and graph union

use ngraph::{DiGraph, Edge, GraphConfig, VertexId};
use std::collections::BTreeSet;

fn graph_of(edges: &[(VertexId, VertexId)]) -> DiGraph {
    DiGraph::from_edges(edges.iter().copied())
}

fn edge_pairs(graph: &DiGraph) -> Vec<(VertexId, VertexId)> {
    graph.edges().map(Into::into).collect()
}

#[test]
fn test_induced_subgraph() {
    let graph = graph_of(&[(1, 2), (2, 3), (1, 3)]);
    let keep: BTreeSet<VertexId> = [1, 2].into_iter().collect();

    let sub = graph.subgraph(keep);
    assert_eq!(sub.vertices().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(edge_pairs(&sub), vec![(1, 2)]);
}

#[test]
fn test_subgraph_includes_unknown_vertices() {
    let graph = graph_of(&[(1, 2), (2, 3)]);
    let sub = graph.subgraph([2, 3, 40, 41]);

    assert_eq!(sub.vertices().collect::<Vec<_>>(), vec![2, 3, 40, 41]);
    assert_eq!(edge_pairs(&sub), vec![(2, 3)]);
    assert_eq!(sub.isolated_vertices().collect::<Vec<_>>(), vec![40, 41]);
}

#[test]
fn test_subgraph_is_independent() {
    let mut graph = graph_of(&[(1, 2), (2, 1)]);
    let mut sub = graph.subgraph(graph.vertices());
    assert_eq!(sub, graph);

    sub.remove_vertex(1);
    graph.insert_edge(2, 3);

    assert!(graph.contains_edge(1, 2));
    assert!(!sub.contains_vertex(3));
    assert_eq!(sub.num_vertices(), 1);
}

#[test]
fn test_subgraph_of_neighborhood() {
    // Ego network of vertex 1: itself plus everything adjacent to it
    let graph = graph_of(&[(1, 2), (3, 1), (2, 3), (3, 4), (4, 5)]);
    let mut ego = graph.neighbors(1);
    ego.insert(1);

    let sub = graph.subgraph(ego);
    assert_eq!(sub.vertices().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(edge_pairs(&sub), vec![(1, 2), (2, 3), (3, 1)]);
}

#[test]
fn test_union_of_disjoint_edge_sets() {
    let a = graph_of(&[(1, 2)]);
    let b = graph_of(&[(2, 3)]);

    let merged = a.union(&b);
    assert_eq!(merged.vertices().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(edge_pairs(&merged), vec![(1, 2), (2, 3)]);

    // Inputs are left as they were
    assert_eq!(edge_pairs(&a), vec![(1, 2)]);
    assert_eq!(a.vertices().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(edge_pairs(&b), vec![(2, 3)]);
    assert_eq!(b.vertices().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_union_with_empty_graph() {
    let a = graph_of(&[(5, 6), (6, 7)]);
    let empty = DiGraph::new();

    assert_eq!(a.union(&empty), a);
    assert_eq!(empty.union(&a), a);
    assert_eq!(&empty + &empty, DiGraph::new());
}

#[test]
fn test_union_operator_sugar() {
    let a = graph_of(&[(1, 2), (2, 3)]);
    let b = graph_of(&[(2, 3), (3, 1)]);

    let sum = &a + &b;
    assert_eq!(sum.num_edges(), 3);

    let mut acc = a.clone();
    acc += &b;
    assert_eq!(acc, sum);
}

#[test]
fn test_union_with_honours_limits_atomically() {
    let mut bounded = DiGraph::with_config(GraphConfig::unlimited().with_max_vertices(3));
    bounded.insert_edge(1, 2);

    let growth = graph_of(&[(2, 3), (3, 4)]);
    bounded.union_with(&growth);

    // Adding 3 and 4 would exceed the limit, so nothing changed
    assert_eq!(bounded.num_vertices(), 2);
    assert_eq!(edge_pairs(&bounded), vec![(1, 2)]);

    let fits = graph_of(&[(2, 3), (3, 1)]);
    bounded.union_with(&fits);
    assert_eq!(bounded.num_vertices(), 3);
    assert!(bounded.edges().any(|e| e == Edge::new(3, 1)));
}

#[test]
fn test_subgraph_then_union_restores_graph() {
    let graph = graph_of(&[(1, 2), (3, 4)]);
    let left = graph.subgraph([1, 2]);
    let right = graph.subgraph([3, 4]);

    assert_eq!(left.union(&right), graph);
}
