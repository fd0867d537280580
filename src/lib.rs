//! ngraph
//!
//! A small in-memory directed graph with simple-graph semantics: no
//! self-loops, no parallel edges, vertices labeled by non-negative integers.
//! Aimed at analysing small to medium graphs such as social or web graphs.
//!
//! # Architecture
//!
//! - `VertexIndex`: ordered map from vertex id to its adjacency record, the
//!   single authority on which vertices exist
//! - `AdjacencyRecord`: a vertex's out- and in-neighbor sets
//! - `DiGraph`: mutation, queries, subgraphs, unions and iteration on top of
//!   the index
//!
//! Every operation is total. Inserting a self-loop, removing something that
//! is not there, or asking about an unknown vertex never fails; the answer is
//! a no-op or an empty set. Vertices enumerate in ascending id order.
//!
//! Undirected graphs are a convention on top: insert both directions with
//! [`DiGraph::insert_undirected_edge`].
//!
//! ## Example Usage
//!
//! ```rust
//! use ngraph::DiGraph;
//!
//! let mut graph = DiGraph::new();
//! graph.insert_edge(1, 2);
//! graph.insert_edge(2, 3);
//! graph.insert_edge(1, 3);
//!
//! assert_eq!(graph.num_vertices(), 3);
//! assert_eq!(graph.out_degree(1), 2);
//!
//! // Induced subgraph over {1, 2}
//! let sub = graph.subgraph([1, 2]);
//! assert_eq!(sub.num_edges(), 1);
//!
//! // Removing a vertex drops its edges too
//! graph.remove_vertex(2);
//! assert_eq!(graph.num_edges(), 1);
//!
//! for v in graph.vertices() {
//!     println!("{} -> {:?}", v, graph.out_neighbors(v));
//! }
//! ```

#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AdjacencyRecord, DiGraph, Edge, Edges, GraphConfig, GraphError, GraphResult,
    GraphStatistics, NeighborSet, VertexId, VertexIndex, Vertices,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, env!("CARGO_PKG_VERSION"));
    }
}
