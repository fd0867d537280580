//! Graph statistics

use super::store::DiGraph;
use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// Summary of a graph's shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// Number of vertices
    pub order: usize,
    /// Number of edges
    pub size: usize,
    /// Vertices with no incident edge
    pub isolated_vertices: usize,
    /// Largest out-degree and a vertex attaining it (smallest id on ties)
    pub max_out_degree: Option<(VertexId, usize)>,
    /// Largest in-degree and a vertex attaining it (smallest id on ties)
    pub max_in_degree: Option<(VertexId, usize)>,
    /// Mean out-degree, `size / order`, 0.0 for an empty graph
    pub avg_out_degree: f64,
    /// Whether every edge has its reverse
    pub undirected: bool,
}

impl DiGraph {
    /// Compute statistics in one pass over the vertex index
    pub fn statistics(&self) -> GraphStatistics {
        let mut isolated_vertices = 0;
        let mut max_out_degree: Option<(VertexId, usize)> = None;
        let mut max_in_degree: Option<(VertexId, usize)> = None;

        for (&v, record) in self.index().iter() {
            if record.is_isolated() {
                isolated_vertices += 1;
            }
            if max_out_degree.map_or(true, |(_, d)| record.out_degree() > d) {
                max_out_degree = Some((v, record.out_degree()));
            }
            if max_in_degree.map_or(true, |(_, d)| record.in_degree() > d) {
                max_in_degree = Some((v, record.in_degree()));
            }
        }

        let order = self.num_vertices();
        let size = self.num_edges();
        let avg_out_degree = if order == 0 {
            0.0
        } else {
            size as f64 / order as f64
        };

        GraphStatistics {
            order,
            size,
            isolated_vertices,
            max_out_degree,
            max_in_degree,
            avg_out_degree,
            undirected: self.is_undirected(),
        }
    }
}
