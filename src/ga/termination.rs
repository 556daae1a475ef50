//! Default termination.

use super::operators::Termination;
use super::types::GenerationState;

/// Stops after `max_generations` generations or once the best fitness
/// reaches `fitness_limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationLimit {
    /// Total generation budget.
    pub max_generations: usize,
    /// Optional target fitness.
    pub fitness_limit: Option<f64>,
}

impl GenerationLimit {
    /// Creates a limit of `max_generations` with no fitness target.
    pub fn new(max_generations: usize) -> Self {
        Self {
            max_generations,
            fitness_limit: None,
        }
    }

    /// Also stops once the best fitness is at least `limit`.
    pub fn with_fitness_limit(mut self, limit: f64) -> Self {
        self.fitness_limit = Some(limit);
        self
    }
}

impl<I> Termination<I> for GenerationLimit {
    fn should_terminate(&self, state: &GenerationState<'_, I>) -> bool {
        state.generation >= self.max_generations
            || self
                .fitness_limit
                .is_some_and(|limit| state.best_fitness >= limit)
    }
}
