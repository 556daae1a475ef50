//! Default parent selection and elitism.
//!
//! Both assume **maximization** (higher fitness = better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::operators::{Elitism, Selection};
use rand::{Rng, RngCore};
use std::cmp::Ordering;

/// Tournament selection.
///
/// For each parent, draws `size` individuals uniformly with replacement and
/// keeps the fittest. Larger tournaments give stronger selection pressure.
///
/// # Complexity
/// O(size) per selected parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentSelection {
    /// Number of contestants per tournament.
    pub size: usize,
}

impl TournamentSelection {
    /// Creates a tournament selection with `size` contestants.
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(2)
    }
}

impl<I> Selection<I> for TournamentSelection {
    fn select(
        &self,
        population: &[I],
        fitnesses: &[f64],
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<usize> {
        let n = population.len().min(fitnesses.len());
        if n == 0 {
            return Vec::new();
        }
        let size = self.size.max(1);

        (0..count)
            .map(|_| {
                let mut best = rng.random_range(0..n);
                for _ in 1..size {
                    let idx = rng.random_range(0..n);
                    if fitnesses[idx] > fitnesses[best] {
                        best = idx;
                    }
                }
                best
            })
            .collect()
    }
}

/// Keeps the `count` fittest individuals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestElitism;

impl<I> Elitism<I> for BestElitism {
    fn elites(&self, population: &[I], fitnesses: &[f64], count: usize) -> Vec<usize> {
        let n = population.len().min(fitnesses.len());
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            fitnesses[b]
                .partial_cmp(&fitnesses[a])
                .unwrap_or(Ordering::Equal)
        });
        indices.truncate(count);
        indices
    }
}
