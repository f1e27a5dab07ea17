//! Error types for graph construction, coloring and statistics.
//!
//! Vertex keys are rendered with their `Debug` form so that a single,
//! non-generic error type can be shared by every `Graph<K>`.

use thiserror::Error;

/// Errors raised by [`Graph`](crate::Graph) construction and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    /// An adjacency entry names a neighbor that is not itself a vertex.
    #[error("vertex {vertex} lists unknown neighbor {neighbor}")]
    UnknownNeighborReference {
        /// Debug rendering of the vertex whose list holds the bad key.
        vertex: String,
        /// Debug rendering of the missing neighbor key.
        neighbor: String,
    },
    /// The same vertex key was given more than one adjacency entry.
    #[error("vertex {vertex} has more than one adjacency entry")]
    DuplicateVertex {
        /// Debug rendering of the repeated key.
        vertex: String,
    },
    /// The graph has no vertices, so there is nothing to seed from or aggregate.
    #[error("graph has no vertices")]
    EmptyGraph,
    /// A statistic was requested over too few vertices.
    #[error("{statistic} needs at least {required} vertices, found {found}")]
    InsufficientDataForStatistic {
        /// Name of the statistic.
        statistic: &'static str,
        /// Minimum vertex count the statistic is defined for.
        required: usize,
        /// Vertex count of the graph.
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = ColoringError> = core::result::Result<T, E>;
