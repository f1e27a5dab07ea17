//! Borrowed per-vertex views into a [`Graph`](super::Graph).

/// A read-only view of one vertex.
///
/// The graph stores keys, adjacency and colors in parallel arrays; a `Vertex`
/// stitches one row of them back together.
#[derive(Debug, PartialEq, Eq)]
pub struct Vertex<'g, K> {
    pub(crate) index: usize,
    pub(crate) key: &'g K,
    pub(crate) neighbors: &'g [usize],
    pub(crate) color: Option<usize>,
}

impl<K> Clone for Vertex<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Vertex<'_, K> {}

impl<'g, K> Vertex<'g, K> {
    /// Position of the vertex in insertion order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The vertex key.
    pub fn key(&self) -> &'g K {
        self.key
    }

    /// Arena indices of the vertex's neighbors, in input order.
    pub fn neighbors(&self) -> &'g [usize] {
        self.neighbors
    }

    /// Number of entries in the adjacency list.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// The assigned color, if any.
    pub fn color(&self) -> Option<usize> {
        self.color
    }

    /// Whether a color has been assigned.
    pub fn is_colored(&self) -> bool {
        self.color.is_some()
    }
}
