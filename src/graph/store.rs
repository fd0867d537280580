//! In-memory directed graph
//!
//! `DiGraph` composes a [`VertexIndex`] and keeps every edge recorded twice:
//! once in the source's out-set and once in the target's in-set. All
//! mutations update both halves or neither.
//!
//! Operations are total. Self-loops are ignored, and removing or querying an
//! unknown vertex is a no-op or an empty answer. The `try_*` variants report
//! rejected insertions as [`GraphError`] instead.

use super::adjacency::{AdjacencyRecord, NeighborSet};
use super::config::GraphConfig;
use super::index::VertexIndex;
use super::iter::{Edges, Vertices};
use super::types::{Edge, VertexId};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, trace, warn};

static EMPTY_NEIGHBORS: NeighborSet = BTreeSet::new();

/// Errors reported by the checked insertion API
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),

    #[error("Vertex limit of {limit} reached")]
    VertexLimitExceeded { limit: usize },

    #[error("Edge limit of {limit} reached")]
    EdgeLimitExceeded { limit: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Simple directed graph over `u64` vertex ids
///
/// - no self-loops, no parallel edges
/// - vertices enumerate in ascending id order
/// - edge count is maintained incrementally
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    /// Vertex id -> adjacency record
    index: VertexIndex,

    /// Number of stored edges (sum of out-degrees)
    edge_count: usize,

    /// Insertion limits
    config: GraphConfig,
}

impl DiGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with insertion limits
    pub fn with_config(config: GraphConfig) -> Self {
        DiGraph {
            index: VertexIndex::new(),
            edge_count: 0,
            config,
        }
    }

    /// Build a graph from a sequence of edges, skipping self-loops
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let edge: Edge = edge.into();
            graph.insert_edge(edge.source, edge.target);
        }
        graph
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn index(&self) -> &VertexIndex {
        &self.index
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Insert the edge `u -> v`.
    ///
    /// Returns true if the edge was added. Self-loops, existing edges and
    /// insertions over a configured limit leave the graph unchanged.
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        match self.try_insert_edge(u, v) {
            Ok(added) => added,
            Err(GraphError::SelfLoop(_)) => false,
            Err(err) => {
                warn!("Edge {} -> {} rejected: {}", u, v, err);
                false
            }
        }
    }

    /// Checked form of [`insert_edge`](Self::insert_edge).
    ///
    /// `Ok(false)` means the edge already existed.
    pub fn try_insert_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.contains_edge(u, v) {
            return Ok(false);
        }

        let missing = self.missing_endpoints(u, v);
        self.config.check_vertices(self.index.len(), missing)?;
        self.config.check_edges(self.edge_count, 1)?;

        Ok(self.link(u, v))
    }

    /// Insert `v` as a vertex. Returns true if it was not present.
    pub fn insert_vertex(&mut self, v: VertexId) -> bool {
        match self.try_insert_vertex(v) {
            Ok(added) => added,
            Err(err) => {
                warn!("Vertex {} rejected: {}", v, err);
                false
            }
        }
    }

    /// Checked form of [`insert_vertex`](Self::insert_vertex)
    pub fn try_insert_vertex(&mut self, v: VertexId) -> GraphResult<bool> {
        if self.index.contains(v) {
            return Ok(false);
        }
        self.config.check_vertices(self.index.len(), 1)?;
        self.ensure_vertex(v);
        Ok(true)
    }

    /// Remove the edge `u -> v` if present. Both endpoints stay in the graph.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let removed = self
            .index
            .lookup_mut(u)
            .map_or(false, |record| record.remove_out(v));

        if removed {
            if let Some(record) = self.index.lookup_mut(v) {
                record.remove_in(u);
            }
            self.edge_count -= 1;
            trace!("Removed edge {} -> {}", u, v);
        }
        removed
    }

    /// Remove `v` and every edge touching it. Returns false if `v` was absent.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        // Collect first: the neighbor sets shrink while edges are unlinked
        let (successors, predecessors): (Vec<VertexId>, Vec<VertexId>) = match self.index.lookup(v)
        {
            Some(record) => (
                record.out_neighbors().iter().copied().collect(),
                record.in_neighbors().iter().copied().collect(),
            ),
            None => return false,
        };

        for &w in &successors {
            self.remove_edge(v, w);
        }
        for &w in &predecessors {
            self.remove_edge(w, v);
        }
        self.index.erase(v);

        debug!(
            "Removed vertex {} with {} incident edges",
            v,
            successors.len() + predecessors.len()
        );
        true
    }

    /// Insert both `u -> v` and `v -> u`.
    ///
    /// Returns true if at least one direction was added.
    pub fn insert_undirected_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        match self.try_insert_undirected_edge(u, v) {
            Ok(added) => added,
            Err(GraphError::SelfLoop(_)) => false,
            Err(err) => {
                warn!("Undirected edge {} -- {} rejected: {}", u, v, err);
                false
            }
        }
    }

    /// Checked form of [`insert_undirected_edge`](Self::insert_undirected_edge).
    ///
    /// Limits are checked for both directions up front, so a rejection never
    /// leaves half an undirected edge behind.
    pub fn try_insert_undirected_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        let missing_edges =
            usize::from(!self.contains_edge(u, v)) + usize::from(!self.contains_edge(v, u));
        if missing_edges == 0 {
            return Ok(false);
        }

        let missing = self.missing_endpoints(u, v);
        self.config.check_vertices(self.index.len(), missing)?;
        self.config.check_edges(self.edge_count, missing_edges)?;

        let forward = self.link(u, v);
        let backward = self.link(v, u);
        Ok(forward || backward)
    }

    /// Remove both `u -> v` and `v -> u`. Returns true if either existed.
    pub fn remove_undirected_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let forward = self.remove_edge(u, v);
        let backward = self.remove_edge(v, u);
        forward || backward
    }

    /// Remove all vertices and edges. The config is kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.edge_count = 0;
    }

    /// Record for `v`, creating the vertex if needed. Ignores limits.
    pub(super) fn ensure_vertex(&mut self, v: VertexId) -> &mut AdjacencyRecord {
        if !self.index.contains(v) {
            debug!("Created vertex {}", v);
        }
        self.index.ensure(v)
    }

    /// Store `u -> v` on both sides. Ignores limits; `u != v` is required.
    pub(super) fn link(&mut self, u: VertexId, v: VertexId) -> bool {
        debug_assert_ne!(u, v, "self-loops are never stored");
        let out_added = self.ensure_vertex(u).add_out(v);
        let in_added = self.ensure_vertex(v).add_in(u);
        debug_assert_eq!(out_added, in_added, "half-edge {} -> {}", u, v);

        if out_added {
            self.edge_count += 1;
            trace!("Inserted edge {} -> {}", u, v);
        }
        out_added
    }

    /// How many of the two distinct endpoints are not yet vertices
    fn missing_endpoints(&self, u: VertexId, v: VertexId) -> usize {
        usize::from(!self.index.contains(u)) + usize::from(!self.index.contains(v))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.index
            .lookup(u)
            .map_or(false, |record| record.has_out_neighbor(v))
    }

    /// True if either `u -> v` or `v -> u` exists
    pub fn contains_undirected_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.contains_edge(u, v) || self.contains_edge(v, u)
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.index.contains(v)
    }

    /// Number of vertices (order)
    pub fn num_vertices(&self) -> usize {
        self.index.len()
    }

    /// Number of edges (size)
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.index.lookup(v).map_or(0, AdjacencyRecord::out_degree)
    }

    pub fn in_degree(&self, v: VertexId) -> usize {
        self.index.lookup(v).map_or(0, AdjacencyRecord::in_degree)
    }

    /// `in_degree(v) + out_degree(v)`
    pub fn degree(&self, v: VertexId) -> usize {
        self.index.lookup(v).map_or(0, AdjacencyRecord::degree)
    }

    /// Targets of edges leaving `v`; empty if `v` is unknown
    pub fn out_neighbors(&self, v: VertexId) -> &NeighborSet {
        self.index
            .lookup(v)
            .map_or(&EMPTY_NEIGHBORS, AdjacencyRecord::out_neighbors)
    }

    /// Sources of edges entering `v`; empty if `v` is unknown
    pub fn in_neighbors(&self, v: VertexId) -> &NeighborSet {
        self.index
            .lookup(v)
            .map_or(&EMPTY_NEIGHBORS, AdjacencyRecord::in_neighbors)
    }

    /// In- and out-neighbors of `v` merged into one set
    pub fn neighbors(&self, v: VertexId) -> NeighborSet {
        self.out_neighbors(v)
            .union(self.in_neighbors(v))
            .copied()
            .collect()
    }

    /// True if every edge has its reverse
    pub fn is_undirected(&self) -> bool {
        self.index
            .iter()
            .all(|(_, record)| record.out_neighbors() == record.in_neighbors())
    }

    // ------------------------------------------------------------------
    // Enumeration
    // ------------------------------------------------------------------

    /// Snapshot of all vertices in ascending order
    pub fn vertices(&self) -> Vertices {
        self.index.vertices()
    }

    /// Snapshot of all edges, ordered by source then target
    pub fn edges(&self) -> Edges {
        let mut snapshot = Vec::with_capacity(self.edge_count);
        for (&u, record) in self.index.iter() {
            snapshot.extend(record.out_neighbors().iter().map(|&v| Edge::new(u, v)));
        }
        Edges::new(snapshot)
    }

    /// Snapshot of vertices with no incident edges
    pub fn isolated_vertices(&self) -> Vertices {
        Vertices::new(
            self.index
                .iter()
                .filter(|(_, record)| record.is_isolated())
                .map(|(&v, _)| v)
                .collect(),
        )
    }
}

impl PartialEq for DiGraph {
    /// Graphs are equal when their vertex and edge sets are; limits are ignored
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.index == other.index
    }
}

impl Eq for DiGraph {}

impl Extend<Edge> for DiGraph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, edges: I) {
        for edge in edges {
            self.insert_edge(edge.source, edge.target);
        }
    }
}

impl Extend<(VertexId, VertexId)> for DiGraph {
    fn extend<I: IntoIterator<Item = (VertexId, VertexId)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.insert_edge(u, v);
        }
    }
}

impl FromIterator<Edge> for DiGraph {
    fn from_iter<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

impl FromIterator<(VertexId, VertexId)> for DiGraph {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId)>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}
