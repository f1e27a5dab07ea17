//! Arena-backed adjacency graph with in-place vertex colors.
//!
//! Vertices live in parallel arrays indexed by insertion order:
//! - `keys`: the caller's vertex keys
//! - `adjacency`: `Vec<usize>` neighbor indices per vertex, exactly as given
//! - `colors`: `Option<usize>` per vertex, set once by the coloring engine
//!
//! Vertices reference each other only by index, so the graph owns everything
//! and there are no reference cycles.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `from_adjacency` | \(O(n + m)\) | one hash lookup per listed neighbor |
//! | `vertex_count` | \(O(1)\) | |
//! | `edge_count` | \(O(n)\) | sums list lengths |
//! | `color_of` | \(O(1)\) expected | hash lookup |
//! | saturation statistics | \(O(n + m)\) | recounted on every call |

mod build;
mod stats;
mod vertex;


use std::collections::HashMap;
use std::hash::Hash;

pub use stats::SaturationStats;
pub use vertex::Vertex;

use crate::coloring::selection::{max_degree_seed, saturation_degree};
use crate::coloring::{ColoringEngine, TraversalMode};
use crate::error::{ColoringError, Result};
use crate::report::ColoringReport;
use crate::trace::debug_event;

/// An adjacency-list graph whose vertices carry an optional color.
///
/// Built once by [`Graph::from_adjacency`]; afterwards only colors change, and
/// each vertex is colored at most once.
#[derive(Debug, Clone)]
pub struct Graph<K = String> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    adjacency: Vec<Vec<usize>>,
    colors: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl<K> Graph<K>
where
    K: Hash + Eq + Clone,
{
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the total number of adjacency entries across all vertices.
    pub fn link_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns half the total adjacency length.
    ///
    /// This is the edge count of an undirected graph whose input lists every
    /// edge in both directions. For asymmetric input the value is not a true
    /// edge count: `{A: [B], B: []}` reports `0`.
    pub fn edge_count(&self) -> usize {
        self.link_count() / 2
    }

    /// Returns `true` if `key` names a vertex.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the view of the vertex named `key`.
    pub fn vertex(&self, key: &K) -> Option<Vertex<'_, K>> {
        self.index.get(key).map(|&i| self.vertex_at(i))
    }

    /// Iterates all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex<'_, K>> + '_ {
        (0..self.keys.len()).map(move |i| self.vertex_at(i))
    }

    /// Iterates the keys of `key`'s neighbors in adjacency order.
    pub fn neighbors(&self, key: &K) -> Option<impl Iterator<Item = &K> + '_> {
        let i = *self.index.get(key)?;
        Some(self.adjacency[i].iter().map(move |&n| &self.keys[n]))
    }

    /// Returns the degree (adjacency-list length) of `key`.
    pub fn degree(&self, key: &K) -> Option<usize> {
        self.index.get(key).map(|&i| self.adjacency[i].len())
    }

    /// Returns how many of `key`'s neighbors currently hold a color.
    pub fn saturation_degree(&self, key: &K) -> Option<usize> {
        self.index
            .get(key)
            .map(|&i| saturation_degree(&self.adjacency, &self.colors, i))
    }

    /// Returns the color of `key`, or `None` if it is unknown or uncolored.
    pub fn color_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).and_then(|&i| self.colors[i])
    }

    /// Iterates `(key, color)` pairs in insertion order.
    pub fn colors(&self) -> impl Iterator<Item = (&K, Option<usize>)> + '_ {
        self.keys.iter().zip(self.colors.iter().copied())
    }

    /// Keys in the order the coloring traversals assigned their colors.
    pub fn coloring_order(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter().map(move |&i| &self.keys[i])
    }

    /// Number of distinct colors in use (highest color + 1, or 0).
    pub fn color_count(&self) -> usize {
        self.colors.iter().flatten().max().map_or(0, |&c| c + 1)
    }

    /// Number of vertices that have no color.
    pub fn uncolored_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_none()).count()
    }

    /// Returns `true` if no link joins two vertices of the same color.
    ///
    /// Uncolored vertices are ignored. A self-link on a colored vertex always
    /// fails the check.
    pub fn is_proper(&self) -> bool {
        self.adjacency.iter().enumerate().all(|(v, neighbors)| {
            let Some(color) = self.colors[v] else {
                return true;
            };
            neighbors.iter().all(|&n| self.colors[n] != Some(color))
        })
    }

    /// Colors the graph from the vertex of maximum degree.
    ///
    /// Ties for the seed go to the vertex inserted first. Only vertices the
    /// traversal can reach from the seed are colored; other components stay
    /// uncolored (see [`Graph::colorize_all_components`]). If the seed already
    /// holds a color the call changes nothing.
    ///
    /// # Errors
    /// [`ColoringError::EmptyGraph`] if the graph has no vertices.
    pub fn colorize(&mut self) -> Result<()> {
        let seed = max_degree_seed(&self.adjacency, &self.colors, false).ok_or(ColoringError::EmptyGraph)?;
        debug_event!(seed, degree = self.adjacency[seed].len(), "seed selected");
        ColoringEngine::new(&self.adjacency, &mut self.colors, &mut self.order).spread_from(seed);
        Ok(())
    }

    /// Colors every vertex, re-seeding once per unreached component.
    ///
    /// Each round seeds at the uncolored vertex of maximum degree (first
    /// inserted on ties). Returns the number of seeds used.
    ///
    /// # Errors
    /// [`ColoringError::EmptyGraph`] if the graph has no vertices.
    pub fn colorize_all_components(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(ColoringError::EmptyGraph);
        }
        let mut engine = ColoringEngine::new(&self.adjacency, &mut self.colors, &mut self.order);
        let mut seeds = 0;
        while let Some(seed) = engine.next_seed() {
            engine.spread_from(seed);
            seeds += 1;
        }
        debug_event!(seeds, "all components colored");
        Ok(seeds)
    }

    /// Colors the graph with the given traversal mode.
    ///
    /// # Errors
    /// [`ColoringError::EmptyGraph`] if the graph has no vertices.
    pub fn colorize_with(&mut self, mode: TraversalMode) -> Result<()> {
        match mode {
            TraversalMode::SingleSeed => self.colorize(),
            TraversalMode::AllComponents => self.colorize_all_components().map(|_| ()),
        }
    }

    /// Summarizes the current coloring.
    pub fn report(&self) -> ColoringReport {
        ColoringReport {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            color_count: self.color_count(),
            uncolored_count: self.uncolored_count(),
            saturation: self.saturation_stats(),
        }
    }

    fn vertex_at(&self, i: usize) -> Vertex<'_, K> {
        Vertex {
            index: i,
            key: &self.keys[i],
            neighbors: &self.adjacency[i],
            color: self.colors[i],
        }
    }
}
