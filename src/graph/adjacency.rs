//! Per-vertex adjacency bookkeeping
//!
//! Each known vertex owns one `AdjacencyRecord` holding its out- and
//! in-neighbor sets. A record only ever sees one side of an edge; keeping the
//! two sides in agreement is the job of `DiGraph`.

use super::types::VertexId;
use std::collections::BTreeSet;

/// Ordered neighbor set of a single vertex
pub type NeighborSet = BTreeSet<VertexId>;

/// Out- and in-neighbors of one vertex
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyRecord {
    out_neighbors: NeighborSet,
    in_neighbors: NeighborSet,
}

impl AdjacencyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn out_neighbors(&self) -> &NeighborSet {
        &self.out_neighbors
    }

    pub fn in_neighbors(&self) -> &NeighborSet {
        &self.in_neighbors
    }

    pub fn out_degree(&self) -> usize {
        self.out_neighbors.len()
    }

    pub fn in_degree(&self) -> usize {
        self.in_neighbors.len()
    }

    /// `out_degree + in_degree`; a neighbor on both sides counts twice
    pub fn degree(&self) -> usize {
        self.out_degree() + self.in_degree()
    }

    pub fn is_isolated(&self) -> bool {
        self.out_neighbors.is_empty() && self.in_neighbors.is_empty()
    }

    pub fn has_out_neighbor(&self, v: VertexId) -> bool {
        self.out_neighbors.contains(&v)
    }

    pub fn has_in_neighbor(&self, v: VertexId) -> bool {
        self.in_neighbors.contains(&v)
    }

    /// Returns true if `v` was not already an out-neighbor
    pub(crate) fn add_out(&mut self, v: VertexId) -> bool {
        self.out_neighbors.insert(v)
    }

    /// Returns true if `v` was not already an in-neighbor
    pub(crate) fn add_in(&mut self, v: VertexId) -> bool {
        self.in_neighbors.insert(v)
    }

    pub(crate) fn remove_out(&mut self, v: VertexId) -> bool {
        self.out_neighbors.remove(&v)
    }

    pub(crate) fn remove_in(&mut self, v: VertexId) -> bool {
        self.in_neighbors.remove(&v)
    }
}
