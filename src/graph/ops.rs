//! Derived graphs: induced subgraphs and unions
//!
//! Both operations build a fresh `DiGraph` that shares nothing with its
//! inputs. The result always has the default (unlimited) config, since the
//! inputs already decided what they hold.

use super::store::{DiGraph, GraphResult};
use super::types::VertexId;
use std::collections::BTreeSet;
use std::ops::{Add, AddAssign};
use tracing::{debug, warn};

impl DiGraph {
    /// Subgraph induced by `vertices`.
    ///
    /// The result holds exactly the given vertices and every edge of `self`
    /// whose endpoints are both among them. Requested vertices that are not
    /// in `self` are kept as isolated vertices.
    pub fn subgraph<I>(&self, vertices: I) -> DiGraph
    where
        I: IntoIterator<Item = VertexId>,
    {
        let keep: BTreeSet<VertexId> = vertices.into_iter().collect();
        let mut sub = DiGraph::new();

        for &v in &keep {
            sub.ensure_vertex(v);
            for &w in self.out_neighbors(v) {
                if keep.contains(&w) {
                    sub.link(v, w);
                }
            }
        }

        debug!(
            "Extracted subgraph with {} vertices and {} edges",
            sub.num_vertices(),
            sub.num_edges()
        );
        sub
    }

    /// Union of the vertex sets and edge sets of `self` and `other`
    pub fn union(&self, other: &DiGraph) -> DiGraph {
        let mut merged = DiGraph::new();
        merged.absorb(self);
        merged.absorb(other);

        debug!(
            "Built union with {} vertices and {} edges",
            merged.num_vertices(),
            merged.num_edges()
        );
        merged
    }

    /// Add every vertex and edge of `other` to `self`.
    ///
    /// Over a configured limit nothing is added.
    pub fn union_with(&mut self, other: &DiGraph) {
        if let Err(err) = self.try_union_with(other) {
            warn!("Union rejected: {}", err);
        }
    }

    /// Checked form of [`union_with`](Self::union_with).
    ///
    /// Limits are checked against the final size before anything is added.
    pub fn try_union_with(&mut self, other: &DiGraph) -> GraphResult<()> {
        let new_vertices = other
            .vertices()
            .filter(|&v| !self.contains_vertex(v))
            .count();
        let new_edges = other
            .edges()
            .filter(|e| !self.contains_edge(e.source, e.target))
            .count();

        self.config()
            .check_vertices(self.num_vertices(), new_vertices)?;
        self.config().check_edges(self.num_edges(), new_edges)?;

        self.absorb(other);
        Ok(())
    }

    fn absorb(&mut self, other: &DiGraph) {
        for (&v, record) in other.index().iter() {
            self.ensure_vertex(v);
            for &w in record.out_neighbors() {
                self.link(v, w);
            }
        }
    }
}

impl Add for &DiGraph {
    type Output = DiGraph;

    fn add(self, rhs: Self) -> DiGraph {
        self.union(rhs)
    }
}

impl AddAssign<&DiGraph> for DiGraph {
    fn add_assign(&mut self, rhs: &DiGraph) {
        self.union_with(rhs);
    }
}
