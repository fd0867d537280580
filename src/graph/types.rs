//! Core type definitions for the graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex identifier (u64)
///
/// Vertices carry no payload: two equal ids always refer to the same vertex.
pub type VertexId = u64;

/// A directed edge `source -> target`
///
/// An `Edge` value is just an ordered pair; whether it can be stored is up to
/// the graph (self-loops never are).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Edge { source, target }
    }

    /// The same pair with its endpoints swapped
    pub fn reversed(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Canonical orientation for undirected use: smaller endpoint first
    pub fn canonical(&self) -> Self {
        if self.source <= self.target {
            *self
        } else {
            self.reversed()
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Edge { source, target }
    }
}

impl From<Edge> for (VertexId, VertexId) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}
