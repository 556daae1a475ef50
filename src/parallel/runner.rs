//! Batch execution of independent local searches.

use crate::error::ConfigError;
use crate::local_search::{check_neighborhood, search_unchecked, LocalSearchConfig, LocalSearchResult};
use crate::random::rng_from_seed;
use rayon::prelude::*;

/// Runs a batch of local searches concurrently.
///
/// # Usage
///
/// ```
/// use u_climb::local_search::LocalSearchConfig;
/// use u_climb::parallel::ParallelLocalSearch;
///
/// let objective = |x: &i32| -((x - 10) * (x - 10)) as f64;
/// let neighborhood = |x: &i32| vec![x - 1, x + 1];
///
/// let results = ParallelLocalSearch::search(
///     vec![0, 25, -7],
///     &objective,
///     Some(&neighborhood),
///     &LocalSearchConfig::default(),
/// )
/// .unwrap();
/// assert!(results.iter().all(|r| r.solution == 10));
/// ```
pub struct ParallelLocalSearch;

impl ParallelLocalSearch {
    /// Searches from every solution in `initial_solutions` concurrently.
    ///
    /// `results[i]` is the outcome of the search started at
    /// `initial_solutions[i]`. When `config.seed` is set, search `i` uses
    /// seed `seed + i`, so restarts stay reproducible without the searches
    /// sharing a generator.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LocalSearch::search`](crate::local_search::LocalSearch::search),
    /// checked once before any search starts.
    #[tracing::instrument(
        level = "debug",
        name = "parallel_local_search",
        skip_all,
        fields(batch = initial_solutions.len())
    )]
    pub fn search<T, F, N>(
        initial_solutions: Vec<T>,
        objective: &F,
        neighborhood: Option<&N>,
        config: &LocalSearchConfig<T>,
    ) -> Result<Vec<LocalSearchResult<T>>, ConfigError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> f64 + Sync + ?Sized,
        N: Fn(&T) -> Vec<T> + Sync + ?Sized,
    {
        check_neighborhood(neighborhood.is_some(), config)?;
        config.validate()?;

        let results: Vec<LocalSearchResult<T>> = initial_solutions
            .into_par_iter()
            .enumerate()
            .map(|(index, initial)| {
                let seed = config.seed.map(|s| s.wrapping_add(index as u64));
                let mut rng = rng_from_seed(seed);
                search_unchecked(initial, objective, neighborhood, config, &mut rng)
            })
            .collect();

        tracing::debug!(completed = results.len(), "batch finished");
        Ok(results)
    }

    /// Batch variant of
    /// [`LocalSearch::search_dynamic`](crate::local_search::LocalSearch::search_dynamic).
    pub fn search_dynamic<T, F>(
        initial_solutions: Vec<T>,
        objective: &F,
        config: &LocalSearchConfig<T>,
    ) -> Result<Vec<LocalSearchResult<T>>, ConfigError>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> f64 + Sync + ?Sized,
    {
        Self::search(
            initial_solutions,
            objective,
            None::<&fn(&T) -> Vec<T>>,
            config,
        )
    }
}
