//! Candidate ranking for the next vertex to color.

use core::cmp::Ordering;

/// Returns the number of `vertex`'s neighbors that already hold a color.
#[inline]
pub(crate) fn saturation_degree(adjacency: &[Vec<usize>], colors: &[Option<usize>], vertex: usize) -> usize {
    adjacency[vertex]
        .iter()
        .filter(|&&n| colors[n].is_some())
        .count()
}

/// Priority of an uncolored candidate: saturation degree first, raw degree second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Priority {
    pub(crate) saturation: usize,
    pub(crate) degree: usize,
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.saturation
            .cmp(&other.saturation)
            .then(self.degree.cmp(&other.degree))
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Picks the best uncolored neighbor of `vertex`.
///
/// Only a strictly better candidate replaces the current best, so ties go to
/// the neighbor listed first.
pub(crate) fn best_uncolored_neighbor(
    adjacency: &[Vec<usize>],
    colors: &[Option<usize>],
    vertex: usize,
) -> Option<usize> {
    let mut best: Option<(usize, Priority)> = None;
    for &candidate in &adjacency[vertex] {
        if colors[candidate].is_some() {
            continue;
        }
        let priority = Priority {
            saturation: saturation_degree(adjacency, colors, candidate),
            degree: adjacency[candidate].len(),
        };
        match best {
            Some((_, current)) if priority <= current => {}
            _ => best = Some((candidate, priority)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Picks the vertex of maximum degree, first in arena order on ties.
///
/// With `uncolored_only`, vertices that already hold a color are skipped.
pub(crate) fn max_degree_seed(
    adjacency: &[Vec<usize>],
    colors: &[Option<usize>],
    uncolored_only: bool,
) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (vertex, neighbors) in adjacency.iter().enumerate() {
        if uncolored_only && colors[vertex].is_some() {
            continue;
        }
        match best {
            Some((_, degree)) if neighbors.len() <= degree => {}
            _ => best = Some((vertex, neighbors.len())),
        }
    }
    best.map(|(vertex, _)| vertex)
}
