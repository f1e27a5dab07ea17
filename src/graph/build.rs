//! Graph construction from adjacency entries.

use std::collections::HashMap;
use std::hash::Hash;

use super::Graph;
use crate::error::{ColoringError, Result};
use crate::trace::debug_event;

impl<K> Graph<K>
where
    K: Hash + Eq + Clone,
{
    /// Builds a graph from `(key, neighbor keys)` entries.
    ///
    /// Every key becomes a vertex (in entry order) before any link is wired.
    /// Each listed neighbor then becomes a *directed* link from the entry's
    /// vertex; links are not mirrored, so `{A: [B], B: []}` leaves `B` without
    /// neighbors. Duplicate neighbors and self-links are kept as given.
    ///
    /// # Errors
    /// - [`ColoringError::DuplicateVertex`] if a key has two entries.
    /// - [`ColoringError::UnknownNeighborReference`] if a neighbor key has no entry.
    ///
    /// # Example
    /// ```rust
    /// use satcolor::Graph;
    ///
    /// let graph = Graph::from_adjacency([
    ///     ("A", vec!["B", "C"]),
    ///     ("B", vec!["A"]),
    ///     ("C", vec!["A"]),
    /// ])
    /// .unwrap();
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_adjacency<I, N>(entries: I) -> Result<Self>
    where
        K: core::fmt::Debug,
        I: IntoIterator<Item = (K, N)>,
        N: IntoIterator<Item = K>,
    {
        let entries: Vec<(K, N)> = entries.into_iter().collect();

        let mut keys = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for (key, _) in &entries {
            if index.insert(key.clone(), keys.len()).is_some() {
                return Err(ColoringError::DuplicateVertex {
                    vertex: format!("{key:?}"),
                });
            }
            keys.push(key.clone());
        }

        let mut adjacency = Vec::with_capacity(entries.len());
        for (key, neighbors) in entries {
            let mut list = Vec::new();
            for neighbor in neighbors {
                let Some(&target) = index.get(&neighbor) else {
                    return Err(ColoringError::UnknownNeighborReference {
                        vertex: format!("{key:?}"),
                        neighbor: format!("{neighbor:?}"),
                    });
                };
                list.push(target);
            }
            adjacency.push(list);
        }

        let colors = vec![None; keys.len()];
        let graph = Self {
            keys,
            index,
            adjacency,
            colors,
            order: Vec::new(),
        };
        debug_event!(
            vertices = graph.vertex_count(),
            links = graph.link_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Returns the graph with every one-directional link mirrored.
    ///
    /// For each link `u -> v` whose target does not list `u`, `u` is appended
    /// to `v`'s adjacency list. Vertices are processed in insertion order, so
    /// the result is deterministic. Colors are carried over unchanged.
    #[must_use]
    pub fn symmetrized(mut self) -> Self {
        for u in 0..self.adjacency.len() {
            // `u`'s own list only grows while other vertices are processed.
            for i in 0..self.adjacency[u].len() {
                let v = self.adjacency[u][i];
                if !self.adjacency[v].contains(&u) {
                    self.adjacency[v].push(u);
                }
            }
        }
        debug_event!(links = self.link_count(), "links mirrored");
        self
    }
}
