//! Graph configuration

use super::store::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

/// Size limits for a graph
///
/// Limits apply to incremental insertion only. `None` means unlimited, which
/// is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum number of vertices (order)
    pub max_vertices: Option<usize>,
    /// Maximum number of edges (size)
    pub max_edges: Option<usize>,
}

impl GraphConfig {
    /// Create a config with no limits
    pub fn unlimited() -> Self {
        Self {
            max_vertices: None,
            max_edges: None,
        }
    }

    pub fn with_max_vertices(mut self, limit: usize) -> Self {
        self.max_vertices = Some(limit);
        self
    }

    pub fn with_max_edges(mut self, limit: usize) -> Self {
        self.max_edges = Some(limit);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_vertices.is_none() && self.max_edges.is_none()
    }

    /// Fails if `count` more vertices do not fit beside `current` ones
    pub(crate) fn check_vertices(&self, current: usize, count: usize) -> GraphResult<()> {
        match self.max_vertices {
            Some(limit) if current.saturating_add(count) > limit => {
                Err(GraphError::VertexLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }

    /// Fails if `count` more edges do not fit beside `current` ones
    pub(crate) fn check_edges(&self, current: usize, count: usize) -> GraphResult<()> {
        match self.max_edges {
            Some(limit) if current.saturating_add(count) > limit => {
                Err(GraphError::EdgeLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let config = GraphConfig::default();
        assert_eq!(config, GraphConfig::unlimited());
        assert!(config.is_unlimited());
        assert!(config.check_vertices(usize::MAX, 2).is_ok());
        assert!(config.check_edges(usize::MAX, 1).is_ok());
    }

    #[test]
    fn test_limits() {
        let config = GraphConfig::unlimited()
            .with_max_vertices(3)
            .with_max_edges(1);
        assert!(!config.is_unlimited());

        assert!(config.check_vertices(1, 2).is_ok());
        assert_eq!(
            config.check_vertices(2, 2),
            Err(GraphError::VertexLimitExceeded { limit: 3 })
        );
        assert!(config.check_edges(0, 1).is_ok());
        assert_eq!(
            config.check_edges(1, 1),
            Err(GraphError::EdgeLimitExceeded { limit: 1 })
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GraphConfig = serde_json::from_str(r#"{"max_edges": 10}"#).unwrap();
        assert_eq!(config.max_vertices, None);
        assert_eq!(config.max_edges, Some(10));
    }
}
