//! Hill-climbing execution.
//!
//! # Algorithm (per restart)
//!
//! 1. Evaluate the starting solution
//! 2. Expand the neighborhood of the current solution
//! 3. Scan neighbors in order and accept the **first** one that strictly
//!    improves the objective, or ties it exactly while improving the cost
//!    function
//! 4. With a static neighborhood, stop when nothing is accepted (local
//!    optimum). With a dynamic neighborhood, count the iteration and keep
//!    going, since the next expansion may look different
//! 5. Stop at `max_iterations` or once `fitness_limit` is reached
//!
//! The best result across restarts is returned; later restarts replace it
//! only on strict improvement.

use super::config::LocalSearchConfig;
use super::types::{improves, ClimbHook, LocalSearchResult, SearchState};
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::RngCore;
use std::panic::{self, AssertUnwindSafe};

/// Executes first-improvement hill climbing with restarts.
///
/// # Usage
///
/// ```
/// use u_climb::local_search::{LocalSearch, LocalSearchConfig};
///
/// let onemax = |bits: &Vec<u8>| bits.iter().map(|&b| b as f64).sum::<f64>();
/// let flips = |bits: &Vec<u8>| {
///     (0..bits.len())
///         .map(|i| {
///             let mut n = bits.clone();
///             n[i] ^= 1;
///             n
///         })
///         .collect::<Vec<_>>()
/// };
///
/// let result = LocalSearch::search(
///     vec![0u8; 6],
///     &onemax,
///     Some(&flips),
///     &LocalSearchConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(result.fitness, 6.0);
/// ```
pub struct LocalSearch;

impl LocalSearch {
    /// Runs local search from `initial`.
    ///
    /// A dynamic neighborhood in `config` takes precedence over
    /// `neighborhood`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingNeighborhood`] if neither `neighborhood`
    /// nor a dynamic neighborhood is supplied, or
    /// [`ConfigError::InvalidParameter`] for an invalid config. Both are
    /// detected before the objective is first called.
    #[tracing::instrument(
        level = "debug",
        name = "local_search",
        skip_all,
        fields(restarts = config.random_restarts, max_iterations = config.max_iterations)
    )]
    pub fn search<T, F, N>(
        initial: T,
        objective: &F,
        neighborhood: Option<&N>,
        config: &LocalSearchConfig<T>,
    ) -> Result<LocalSearchResult<T>, ConfigError>
    where
        T: Clone,
        F: Fn(&T) -> f64 + ?Sized,
        N: Fn(&T) -> Vec<T> + ?Sized,
    {
        check_neighborhood(neighborhood.is_some(), config)?;
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);
        Ok(search_unchecked(
            initial,
            objective,
            neighborhood,
            config,
            &mut rng,
        ))
    }

    /// Runs local search driven only by the config's dynamic neighborhood.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingNeighborhood`] when `config` has no
    /// dynamic neighborhood.
    pub fn search_dynamic<T, F>(
        initial: T,
        objective: &F,
        config: &LocalSearchConfig<T>,
    ) -> Result<LocalSearchResult<T>, ConfigError>
    where
        T: Clone,
        F: Fn(&T) -> f64 + ?Sized,
    {
        Self::search(initial, objective, None::<&fn(&T) -> Vec<T>>, config)
    }
}

pub(crate) fn check_neighborhood<T>(
    has_static: bool,
    config: &LocalSearchConfig<T>,
) -> Result<(), ConfigError> {
    if has_static || config.has_dynamic_neighborhood() {
        Ok(())
    } else {
        Err(ConfigError::MissingNeighborhood)
    }
}

/// Runs a search whose neighborhood source and config were already checked.
pub(crate) fn search_unchecked<T, F, N>(
    initial: T,
    objective: &F,
    neighborhood: Option<&N>,
    config: &LocalSearchConfig<T>,
    rng: &mut dyn RngCore,
) -> LocalSearchResult<T>
where
    T: Clone,
    F: Fn(&T) -> f64 + ?Sized,
    N: Fn(&T) -> Vec<T> + ?Sized,
{
    let expand = |solution: &T, iteration: usize| -> Vec<T> {
        match (&config.dynamic_neighborhood, neighborhood) {
            (Some(dynamic), _) => dynamic(solution, iteration),
            (None, Some(neighborhood)) => neighborhood(solution),
            (None, None) => Vec::new(),
        }
    };

    run_restarts(
        initial,
        &|s: &T| objective(s),
        &expand,
        config.has_dynamic_neighborhood(),
        config,
        rng,
    )
}

/// Runs every restart and keeps the best result.
///
/// Callers must have validated `config`.
fn run_restarts<T: Clone>(
    initial: T,
    objective: &dyn Fn(&T) -> f64,
    expand: &dyn Fn(&T, usize) -> Vec<T>,
    dynamic: bool,
    config: &LocalSearchConfig<T>,
    rng: &mut dyn RngCore,
) -> LocalSearchResult<T> {
    let mut best = LocalSearchResult::from(climb(
        initial.clone(),
        objective,
        expand,
        dynamic,
        config,
    ));
    tracing::debug!(
        restart = 0,
        fitness = best.fitness,
        iterations = best.iterations,
        "restart finished"
    );

    for restart in 1..config.random_restarts {
        let start = match &config.random_initializer {
            Some(init) => init(&mut *rng),
            None => initial.clone(),
        };
        let state = climb(start, objective, expand, dynamic, config);
        tracing::debug!(
            restart,
            fitness = state.fitness,
            iterations = state.iterations,
            "restart finished"
        );

        if improves(state.fitness, best.fitness, config.maximize) {
            best = LocalSearchResult {
                restart,
                ..LocalSearchResult::from(state)
            };
        }
    }

    best
}

/// A single hill-climbing run from `start`.
fn climb<T>(
    start: T,
    objective: &dyn Fn(&T) -> f64,
    expand: &dyn Fn(&T, usize) -> Vec<T>,
    dynamic: bool,
    config: &LocalSearchConfig<T>,
) -> SearchState<T> {
    let fitness = objective(&start);
    let mut state = SearchState {
        solution: start,
        fitness,
        iterations: 0,
    };

    while state.iterations < config.max_iterations && !config.limit_reached(state.fitness) {
        let neighbors = expand(&state.solution, state.iterations);

        match first_acceptable(&state, neighbors, objective, config) {
            Some((neighbor, fitness)) => {
                state.solution = neighbor;
                state.fitness = fitness;
                state.iterations += 1;
                tracing::trace!(fitness, iteration = state.iterations, "climbed");
                if let Some(hook) = &config.on_climb {
                    notify(hook, &state);
                }
            }
            None if dynamic => state.iterations += 1,
            None => break,
        }
    }

    state
}

/// Scans `neighbors` in order and returns the first acceptable move.
fn first_acceptable<T>(
    state: &SearchState<T>,
    neighbors: Vec<T>,
    objective: &dyn Fn(&T) -> f64,
    config: &LocalSearchConfig<T>,
) -> Option<(T, f64)> {
    for neighbor in neighbors {
        let fitness = objective(&neighbor);
        if improves(fitness, state.fitness, config.maximize) {
            return Some((neighbor, fitness));
        }
        if fitness == state.fitness {
            if let Some(cost) = &config.cost_function {
                let current_cost = cost(&state.solution);
                let neighbor_cost = cost(&neighbor);
                if improves(neighbor_cost, current_cost, config.maximize_cost) {
                    return Some((neighbor, fitness));
                }
            }
        }
    }
    None
}

/// Fires the climb hook without letting it disturb the search.
fn notify<T>(hook: &ClimbHook<T>, state: &SearchState<T>) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        hook(&state.solution, state.fitness, state.iterations)
    }));
    if outcome.is_err() {
        tracing::warn!(
            iteration = state.iterations,
            "on_climb hook panicked; ignoring"
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
