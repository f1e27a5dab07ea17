//! Saturation-degree greedy coloring engine.
//!
//! The engine approximates DSATUR by *local* neighbor-following instead of a
//! global priority queue:
//! 1. the current vertex takes the smallest color absent from its colored neighbors;
//! 2. the traversal moves to the current vertex's uncolored neighbor with the
//!    highest saturation degree (raw degree breaks ties, then adjacency order);
//! 3. when a vertex has no uncolored neighbor left, control returns to the vertex
//!    it was reached from, which selects again against the updated state.
//!
//! The return path is an explicit stack private to one traversal, so long
//! chains never deepen the call stack.
//!
//! ### Complexity
//! | Step | Cost | Notes |
//! |------|------|-------|
//! | color choice | \(O(\deg v)\) | bitset bounded by `deg v + 1` |
//! | neighbor selection | \(O(\sum_{u \in N(v)} \deg u)\) | saturation is recounted per candidate |

mod palette;
pub(crate) mod selection;


use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::Graph;
use crate::trace::{debug_event, trace_event};

use self::palette::Palette;
use self::selection::{best_uncolored_neighbor, max_degree_seed};

/// How many seeds a coloring run may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TraversalMode {
    /// One traversal from the global maximum-degree vertex. Vertices it cannot
    /// reach stay uncolored.
    #[default]
    SingleSeed,
    /// Re-seed at the highest-degree uncolored vertex until every vertex is colored.
    AllComponents,
}

/// Options for building and coloring a graph in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoringOptions {
    /// Traversal mode used by [`Graph::colorize_with`].
    pub mode: TraversalMode,
    /// Mirror one-directional links before coloring.
    pub symmetrize: bool,
}

impl ColoringOptions {
    /// Builds a graph from adjacency entries, applies the options and colors it.
    ///
    /// # Errors
    /// Propagates construction errors from [`Graph::from_adjacency`] and
    /// [`ColoringError::EmptyGraph`](crate::ColoringError::EmptyGraph) from coloring.
    pub fn run<K, I, N>(&self, entries: I) -> Result<Graph<K>>
    where
        K: core::hash::Hash + Eq + Clone + core::fmt::Debug,
        I: IntoIterator<Item = (K, N)>,
        N: IntoIterator<Item = K>,
    {
        let mut graph = Graph::from_adjacency(entries)?;
        if self.symmetrize {
            graph = graph.symmetrized();
        }
        graph.colorize_with(self.mode)?;
        Ok(graph)
    }
}

/// One coloring pass over a graph's adjacency and color arrays.
///
/// Every vertex colored by the engine is appended to `order`.
pub(crate) struct ColoringEngine<'g> {
    adjacency: &'g [Vec<usize>],
    colors: &'g mut [Option<usize>],
    order: &'g mut Vec<usize>,
    palette: Palette,
    stack: Vec<usize>,
}

impl<'g> ColoringEngine<'g> {
    pub(crate) fn new(
        adjacency: &'g [Vec<usize>],
        colors: &'g mut [Option<usize>],
        order: &'g mut Vec<usize>,
    ) -> Self {
        debug_assert_eq!(adjacency.len(), colors.len());
        Self {
            adjacency,
            colors,
            order,
            palette: Palette::new(),
            stack: Vec::new(),
        }
    }

    /// Smallest non-negative color not held by any colored neighbor of `vertex`.
    pub(crate) fn smallest_free_color(&mut self, vertex: usize) -> usize {
        let neighbors = &self.adjacency[vertex];
        self.palette.reset(neighbors.len());
        for &n in neighbors {
            if let Some(color) = self.colors[n] {
                self.palette.insert(color);
            }
        }
        self.palette.first_free()
    }

    /// The uncolored vertex of maximum degree, first in arena order on ties.
    pub(crate) fn next_seed(&self) -> Option<usize> {
        max_degree_seed(self.adjacency, &*self.colors, true)
    }

    fn assign(&mut self, vertex: usize) {
        let color = self.smallest_free_color(vertex);
        debug_assert!(!self.palette.contains(color));
        debug_assert!(self.colors[vertex].is_none(), "vertex {vertex} colored twice");
        self.colors[vertex] = Some(color);
        self.order.push(vertex);
        trace_event!(vertex, color, "assigned color");
    }

    /// Colors everything the neighbor-following traversal reaches from `seed`.
    ///
    /// Returns the number of vertices colored. An already colored seed is left
    /// untouched and yields `0`.
    pub(crate) fn spread_from(&mut self, seed: usize) -> usize {
        if self.colors[seed].is_some() {
            return 0;
        }
        let before = self.order.len();

        self.assign(seed);
        self.stack.clear();
        self.stack.push(seed);

        while let Some(&current) = self.stack.last() {
            match best_uncolored_neighbor(self.adjacency, &*self.colors, current) {
                Some(next) => {
                    self.assign(next);
                    self.stack.push(next);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        let colored = self.order.len() - before;
        debug_event!(seed, colored, "traversal finished");
        colored
    }
}
