//! Serializable summary of a coloring run.

use serde::{Deserialize, Serialize};

use crate::graph::SaturationStats;

/// Counts and saturation statistics for a colored graph.
///
/// Produced by [`Graph::report`](crate::Graph::report).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoringReport {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Half the total adjacency length (see [`Graph::edge_count`](crate::Graph::edge_count)).
    pub edge_count: usize,
    /// Number of distinct colors used.
    pub color_count: usize,
    /// Vertices left without a color.
    pub uncolored_count: usize,
    /// Saturation-degree statistics.
    pub saturation: SaturationStats,
}

impl ColoringReport {
    /// Returns `true` if every vertex received a color.
    pub fn is_complete(&self) -> bool {
        self.uncolored_count == 0
    }
}
