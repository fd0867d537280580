//! Snapshot iterators over vertices and edges
//!
//! Both iterators copy the identities they yield when they are created, so
//! they never borrow the graph and are unaffected by later mutation. Clone an
//! iterator before consuming it to traverse the same snapshot again.

use super::types::{Edge, VertexId};
use std::iter::FusedIterator;
use std::vec;

/// Vertex identities in ascending order
#[derive(Debug, Clone)]
pub struct Vertices {
    inner: vec::IntoIter<VertexId>,
}

impl Vertices {
    pub(crate) fn new(snapshot: Vec<VertexId>) -> Self {
        Vertices {
            inner: snapshot.into_iter(),
        }
    }

    /// Remaining vertices of the snapshot, without consuming the iterator
    pub fn as_slice(&self) -> &[VertexId] {
        self.inner.as_slice()
    }
}

impl Iterator for Vertices {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Vertices {
    fn next_back(&mut self) -> Option<VertexId> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Vertices {}

impl FusedIterator for Vertices {}

/// Edges ordered by source, then target
#[derive(Debug, Clone)]
pub struct Edges {
    inner: vec::IntoIter<Edge>,
}

impl Edges {
    pub(crate) fn new(snapshot: Vec<Edge>) -> Self {
        Edges {
            inner: snapshot.into_iter(),
        }
    }

    pub fn as_slice(&self) -> &[Edge] {
        self.inner.as_slice()
    }
}

impl Iterator for Edges {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Edges {
    fn next_back(&mut self) -> Option<Edge> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Edges {}

impl FusedIterator for Edges {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_restart_by_clone() {
        let vertices = Vertices::new(vec![1, 4, 6]);
        let again = vertices.clone();

        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices.collect::<Vec<_>>(), vec![1, 4, 6]);
        assert_eq!(again.rev().collect::<Vec<_>>(), vec![6, 4, 1]);
    }

    #[test]
    fn test_edges_as_slice() {
        let mut edges = Edges::new(vec![Edge::new(1, 2), Edge::new(2, 3)]);
        assert_eq!(edges.next(), Some(Edge::new(1, 2)));
        assert_eq!(edges.as_slice(), &[Edge::new(2, 3)]);
        assert_eq!(edges.next(), Some(Edge::new(2, 3)));
        assert_eq!(edges.next(), None);
        assert_eq!(edges.next(), None);
    }
}
