//! Serde support for `DiGraph`
//!
//! A graph serializes as its vertex list plus its edge list:
//!
//! ```json
//! { "vertices": [1, 2, 3], "edges": [[1, 2], [2, 3]] }
//! ```
//!
//! Deserialization replays the edges through normal insertion, so the result
//! always satisfies the graph invariants: self-loops and duplicates are
//! dropped and edge endpoints missing from `vertices` are created.

use super::store::DiGraph;
use super::types::VertexId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Default, Serialize, Deserialize)]
struct GraphRepr {
    #[serde(default)]
    vertices: Vec<VertexId>,
    #[serde(default)]
    edges: Vec<(VertexId, VertexId)>,
}

impl From<&DiGraph> for GraphRepr {
    fn from(graph: &DiGraph) -> Self {
        GraphRepr {
            vertices: graph.vertices().collect(),
            edges: graph.edges().map(Into::into).collect(),
        }
    }
}

impl From<GraphRepr> for DiGraph {
    fn from(repr: GraphRepr) -> Self {
        let mut graph = DiGraph::new();
        for v in repr.vertices {
            graph.insert_vertex(v);
        }
        graph.extend(repr.edges);
        graph
    }
}

impl Serialize for DiGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphRepr::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DiGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        GraphRepr::deserialize(deserializer).map(DiGraph::from)
    }
}
