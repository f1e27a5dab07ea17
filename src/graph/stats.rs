//! Saturation-degree statistics.
//!
//! All statistics are recomputed from the current colors on every call, so
//! they describe the graph as it stands (normally after coloring).

#![allow(clippy::cast_precision_loss)]

use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::Graph;
use crate::coloring::selection::saturation_degree;
use crate::error::{ColoringError, Result};

/// Aggregate saturation-degree statistics.
///
/// Fields are `None` when the graph is too small for them to be defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SaturationStats {
    /// Smallest saturation degree.
    pub min: Option<usize>,
    /// Largest saturation degree.
    pub max: Option<usize>,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample (n - 1) standard deviation.
    pub std_dev: Option<f64>,
}

impl<K> Graph<K>
where
    K: Hash + Eq + Clone,
{
    /// Saturation degree of every vertex, in insertion order.
    pub fn saturation_degrees(&self) -> Vec<usize> {
        let (adjacency, colors) = (&self.adjacency, &self.colors);

        #[cfg(feature = "parallel")]
        {
            (0..adjacency.len())
                .into_par_iter()
                .map(|v| saturation_degree(adjacency, colors, v))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..adjacency.len())
                .map(|v| saturation_degree(adjacency, colors, v))
                .collect()
        }
    }

    /// Smallest saturation degree over all vertices.
    ///
    /// # Errors
    /// [`ColoringError::EmptyGraph`] if the graph has no vertices.
    pub fn min_saturation_degree(&self) -> Result<usize> {
        self.saturation_degrees()
            .into_iter()
            .min()
            .ok_or(ColoringError::EmptyGraph)
    }

    /// Largest saturation degree over all vertices.
    ///
    /// # Errors
    /// [`ColoringError::EmptyGraph`] if the graph has no vertices.
    pub fn max_saturation_degree(&self) -> Result<usize> {
        self.saturation_degrees()
            .into_iter()
            .max()
            .ok_or(ColoringError::EmptyGraph)
    }

    /// Mean saturation degree.
    ///
    /// # Errors
    /// [`ColoringError::EmptyGraph`] if the graph has no vertices.
    pub fn mean_saturation_degree(&self) -> Result<f64> {
        mean(&self.saturation_degrees()).ok_or(ColoringError::EmptyGraph)
    }

    /// Sample standard deviation of the saturation degree.
    ///
    /// # Errors
    /// [`ColoringError::InsufficientDataForStatistic`] with fewer than two vertices.
    pub fn std_dev_saturation_degree(&self) -> Result<f64> {
        let degrees = self.saturation_degrees();
        sample_std_dev(&degrees).ok_or(ColoringError::InsufficientDataForStatistic {
            statistic: "standard deviation",
            required: 2,
            found: degrees.len(),
        })
    }

    /// All saturation statistics from a single pass over the graph.
    pub fn saturation_stats(&self) -> SaturationStats {
        let degrees = self.saturation_degrees();
        SaturationStats {
            min: degrees.iter().copied().min(),
            max: degrees.iter().copied().max(),
            mean: mean(&degrees),
            std_dev: sample_std_dev(&degrees),
        }
    }
}

fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: usize = values.iter().sum();
    Some(sum as f64 / values.len() as f64)
}

fn sample_std_dev(values: &[usize]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squares: f64 = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}
