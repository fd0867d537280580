//! Core graph implementation
//!
//! This module implements a simple directed graph:
//! - Vertices are bare `u64` ids, created on first reference
//! - Directed edges, at most one per ordered pair, no self-loops
//! - Ordered in/out adjacency sets per vertex, kept symmetric on every mutation
//! - Induced subgraphs, unions and snapshot iteration

pub mod adjacency;
pub mod config;
pub mod index;
pub mod iter;
pub mod ops;
pub mod serde_repr;
pub mod stats;
pub mod store;
pub mod types;

// Re-export main types
pub use adjacency::{AdjacencyRecord, NeighborSet};
pub use config::GraphConfig;
pub use index::VertexIndex;
pub use iter::{Edges, Vertices};
pub use stats::GraphStatistics;
pub use store::{DiGraph, GraphError, GraphResult};
pub use types::{Edge, VertexId};
