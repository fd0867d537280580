//! Vertex index
//!
//! The single source of truth for which vertices exist. Every vertex the graph
//! knows about has exactly one `AdjacencyRecord`, keyed by its id in an
//! ordered map, so enumeration is always ascending by id.

use super::adjacency::AdjacencyRecord;
use super::iter::Vertices;
use super::types::VertexId;
use std::collections::btree_map::{self, BTreeMap};

/// Ordered mapping `VertexId -> AdjacencyRecord`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexIndex {
    records: BTreeMap<VertexId, AdjacencyRecord>,
}

impl VertexIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `v`, created empty if `v` is not known yet
    pub fn ensure(&mut self, v: VertexId) -> &mut AdjacencyRecord {
        self.records.entry(v).or_default()
    }

    pub fn lookup(&self, v: VertexId) -> Option<&AdjacencyRecord> {
        self.records.get(&v)
    }

    pub(crate) fn lookup_mut(&mut self, v: VertexId) -> Option<&mut AdjacencyRecord> {
        self.records.get_mut(&v)
    }

    /// Drop the record for `v`.
    ///
    /// Does not cascade: every edge incident to `v` must already be gone.
    pub fn erase(&mut self, v: VertexId) -> Option<AdjacencyRecord> {
        let record = self.records.remove(&v);
        debug_assert!(
            record.as_ref().map_or(true, AdjacencyRecord::is_isolated),
            "vertex {} erased with incident edges",
            v
        );
        record
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.records.contains_key(&v)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Snapshot of all vertex ids in ascending order
    pub fn vertices(&self) -> Vertices {
        Vertices::new(self.records.keys().copied().collect())
    }

    /// Borrowing walk over `(id, record)` pairs in ascending id order
    pub fn iter(&self) -> btree_map::Iter<'_, VertexId, AdjacencyRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_is_idempotent() {
        let mut index = VertexIndex::new();
        index.ensure(5).add_out(6);
        index.ensure(5);

        assert_eq!(index.len(), 1);
        assert!(index.contains(5));
        assert!(index.lookup(5).unwrap().has_out_neighbor(6));
    }

    #[test]
    fn test_lookup_missing() {
        let index = VertexIndex::new();
        assert!(index.lookup(1).is_none());
        assert!(!index.contains(1));
        assert!(index.is_empty());
    }

    #[test]
    fn test_erase() {
        let mut index = VertexIndex::new();
        index.ensure(1);
        index.ensure(2);

        assert!(index.erase(1).is_some());
        assert!(index.erase(1).is_none());
        assert!(!index.contains(1));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_vertices_ascending_and_restartable() {
        let mut index = VertexIndex::new();
        for v in [30, 10, 20] {
            index.ensure(v);
        }

        let first: Vec<_> = index.vertices().collect();
        let second: Vec<_> = index.vertices().collect();
        assert_eq!(first, vec![10, 20, 30]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_vertices_snapshot_survives_mutation() {
        let mut index = VertexIndex::new();
        index.ensure(1);
        index.ensure(2);

        let snapshot = index.vertices();
        index.erase(1);
        index.ensure(3);

        assert_eq!(snapshot.collect::<Vec<_>>(), vec![1, 2]);
    }
}
