//! Error types for colony optimization.

use thiserror::Error;

/// Errors raised while building a graph or configuring a run.
///
/// Every variant is detected before the first iteration starts; the
/// construction/update loop itself has no failure modes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A graph was requested with zero vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,

    /// A vertex index does not exist in the graph.
    #[error("vertex {vertex} out of range for graph with {num_vertices} vertices")]
    VertexOutOfRange {
        /// The offending index.
        vertex: usize,
        /// Number of vertices in the graph.
        num_vertices: usize,
    },

    /// An edge from a vertex to itself.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),

    /// An edge distance that is zero, negative, or not finite.
    #[error("distance between {u} and {v} must be finite and positive, got {distance}")]
    InvalidDistance {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
        /// The rejected distance.
        distance: f64,
    },

    /// A vertex without any incident edge; an ant starting there cannot move.
    #[error("vertex {0} has no incident edges")]
    IsolatedVertex(usize),

    /// A path too short to contain an edge.
    #[error("path with {0} vertices has no edges")]
    DegeneratePath(usize),
}
