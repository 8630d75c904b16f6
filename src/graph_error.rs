//! GraphError: Unified error type for hash-digraph public APIs
//!
//! Ordinary graph operations never fail; this type covers the few fallible
//! surfaces (scheduling a cyclic graph, invariant validation).

use thiserror::Error;

/// Unified error type for hash-digraph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The graph contains a cycle; the operation expected a DAG.
    #[error("Cycle detected in graph (expected a DAG)")]
    CycleDetected,
    /// The incremental edge counter disagrees with the stored edge instances.
    #[error("Edge count mismatch: counter says {recorded}, indices hold {actual}")]
    EdgeCountMismatch { recorded: usize, actual: usize },
    /// An edge instance in one adjacency index has no mirror in the other.
    #[error("Adjacency indices out of sync: {0}")]
    MissingMirror(String),
    /// An edge endpoint is absent from the vertex registry.
    #[error("Edge endpoint(s) missing from vertex registry: {0}")]
    UnregisteredEndpoint(String),
}
