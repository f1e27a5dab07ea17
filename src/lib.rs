//! # `satcolor` - Greedy Saturation-Degree Vertex Coloring
//!
//! Assigns non-negative integer colors to the vertices of a graph so that no two
//! adjacent vertices share a color. The heuristic is a local approximation of
//! DSATUR: it does not search for a minimum coloring and never backtracks.
//!
//! ## Architecture
//!
//! 1. **Graph** ([`Graph`]):
//!    - Built once from `(key, neighbor keys)` entries
//!    - Vertices stored in parallel arrays; adjacency is index lists, never references
//!    - Links are kept exactly as given (no implicit mirroring)
//!
//! 2. **Coloring engine** ([`coloring`]):
//!    - Seeds at the maximum-degree vertex
//!    - Each vertex takes the smallest color unused by its colored neighbors
//!    - Moves to the uncolored neighbor with the highest saturation degree, raw
//!      degree breaking ties
//!    - Returns along an explicit stack when a branch dead-ends
//!
//! 3. **Wrappers** ([`adjacency_file`], the `satcolor` binary behind the `cli` feature):
//!    - Read the comma-separated adjacency format and print colors
//!
//! ## Guarantees
//!
//! - **Proper**: two linked colored vertices never share a color.
//! - **Locally minimal**: each color is the smallest one free at assignment time.
//! - **Deterministic**: the same entries in the same order give the same colors.
//! - **Single seed**: [`Graph::colorize`] colors only what it reaches from the seed;
//!   [`Graph::colorize_all_components`] keeps re-seeding until nothing is left.
//!
//! ## Example
//!
//! ```rust
//! use satcolor::Graph;
//!
//! let mut graph = Graph::from_adjacency([
//!     ("X", vec!["A", "B", "C", "D"]),
//!     ("A", vec!["X"]),
//!     ("B", vec!["X"]),
//!     ("C", vec!["X"]),
//!     ("D", vec!["X"]),
//! ])
//! .unwrap();
//!
//! graph.colorize().unwrap();
//!
//! assert_eq!(graph.color_of(&"X"), Some(0));
//! assert_eq!(graph.color_of(&"A"), Some(1));
//! assert_eq!(graph.color_count(), 2);
//! assert!(graph.is_proper());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod adjacency_file;
pub mod coloring;
pub mod error;
pub mod graph;
pub mod report;

pub use adjacency_file::{parse_adjacency, parse_adjacency_str, ParseError};
pub use coloring::{ColoringOptions, TraversalMode};
pub use error::{ColoringError, Result};
pub use graph::{Graph, SaturationStats, Vertex};
pub use report::ColoringReport;
