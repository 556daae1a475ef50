//! Function types and state records for local search.

use rand::RngCore;
use std::sync::Arc;

/// Hook invoked after every accepted move with `(solution, fitness, iteration)`.
pub type ClimbHook<T> = Arc<dyn Fn(&T, f64, usize) + Send + Sync>;

/// Secondary criterion consulted only when two objective values tie exactly.
pub type CostFn<T> = Arc<dyn Fn(&T) -> f64 + Send + Sync>;

/// Neighborhood whose shape may depend on the current iteration index.
pub type DynamicNeighborhoodFn<T> = Arc<dyn Fn(&T, usize) -> Vec<T> + Send + Sync>;

/// Static neighborhood generator.
pub type NeighborhoodFn<T> = Arc<dyn Fn(&T) -> Vec<T> + Send + Sync>;

/// Objective function shared between engines.
pub type ObjectiveFn<T> = Arc<dyn Fn(&T) -> f64 + Send + Sync>;

/// Factory for restart starting points.
pub type InitializerFn<T> = Arc<dyn Fn(&mut dyn RngCore) -> T + Send + Sync>;

/// Working state of a single hill-climbing restart.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    /// Current solution.
    pub solution: T,
    /// Objective value of `solution`.
    pub fitness: f64,
    /// Iterations consumed so far.
    ///
    /// With a static neighborhood this counts accepted moves; with a dynamic
    /// neighborhood it counts every neighborhood expansion.
    pub iterations: usize,
}

/// Outcome of a local search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchResult<T> {
    /// Best solution found across all restarts.
    pub solution: T,
    /// Objective value of `solution`.
    pub fitness: f64,
    /// Iterations used by the restart that produced `solution`.
    pub iterations: usize,
    /// Index of the restart that produced `solution` (0 = the initial solution).
    pub restart: usize,
}

impl<T> From<SearchState<T>> for LocalSearchResult<T> {
    fn from(state: SearchState<T>) -> Self {
        LocalSearchResult {
            solution: state.solution,
            fitness: state.fitness,
            iterations: state.iterations,
            restart: 0,
        }
    }
}

/// Returns `true` if `candidate` is strictly better than `current`.
#[inline]
pub(crate) fn improves(candidate: f64, current: f64, maximize: bool) -> bool {
    if maximize {
        candidate > current
    } else {
        candidate < current
    }
}
