//! Local search configuration.
//!
//! [`LocalSearchConfig`] holds every option that controls a hill-climbing
//! run. Plain parameters are public fields; callbacks are attached through
//! the `with_*` builder methods.

use super::types::{ClimbHook, CostFn, DynamicNeighborhoodFn, InitializerFn};
use crate::error::ConfigError;
use rand::RngCore;
use std::fmt;
use std::sync::Arc;

/// Configuration for [`LocalSearch`](super::LocalSearch).
///
/// # Defaults
///
/// ```
/// use u_climb::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::<Vec<u8>>::default();
/// assert_eq!(config.max_iterations, 1000);
/// assert!(config.maximize);
/// assert_eq!(config.random_restarts, 1);
/// assert!(!config.maximize_cost);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_climb::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_random_restarts(20)
///     .with_random_initializer(|rng: &mut dyn RngCore| {
///         (0..5).map(|_| rng.random_range(0..2u8)).collect::<Vec<u8>>()
///     })
///     .with_seed(42);
/// assert_eq!(config.random_restarts, 20);
/// ```
pub struct LocalSearchConfig<T> {
    /// Hard cap on neighborhood expansions per restart.
    pub max_iterations: usize,

    /// Search direction for the objective.
    pub maximize: bool,

    /// Number of independent climbs. Restart 0 always starts at the
    /// caller's initial solution.
    pub random_restarts: usize,

    /// Direction for the tie-breaking cost function.
    pub maximize_cost: bool,

    /// Stop a restart once its fitness reaches this value.
    pub fitness_limit: Option<f64>,

    /// Random seed for restart initialization. `None` draws from entropy.
    pub seed: Option<u64>,

    pub(crate) random_initializer: Option<InitializerFn<T>>,
    pub(crate) on_climb: Option<ClimbHook<T>>,
    pub(crate) cost_function: Option<CostFn<T>>,
    pub(crate) dynamic_neighborhood: Option<DynamicNeighborhoodFn<T>>,
}

impl<T> Default for LocalSearchConfig<T> {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            maximize: true,
            random_restarts: 1,
            maximize_cost: false,
            fitness_limit: None,
            seed: None,
            random_initializer: None,
            on_climb: None,
            cost_function: None,
            dynamic_neighborhood: None,
        }
    }
}

impl<T> Clone for LocalSearchConfig<T> {
    fn clone(&self) -> Self {
        Self {
            max_iterations: self.max_iterations,
            maximize: self.maximize,
            random_restarts: self.random_restarts,
            maximize_cost: self.maximize_cost,
            fitness_limit: self.fitness_limit,
            seed: self.seed,
            random_initializer: self.random_initializer.clone(),
            on_climb: self.on_climb.clone(),
            cost_function: self.cost_function.clone(),
            dynamic_neighborhood: self.dynamic_neighborhood.clone(),
        }
    }
}

impl<T> fmt::Debug for LocalSearchConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSearchConfig")
            .field("max_iterations", &self.max_iterations)
            .field("maximize", &self.maximize)
            .field("random_restarts", &self.random_restarts)
            .field("maximize_cost", &self.maximize_cost)
            .field("fitness_limit", &self.fitness_limit)
            .field("seed", &self.seed)
            .field("random_initializer", &self.random_initializer.is_some())
            .field("on_climb", &self.on_climb.is_some())
            .field("cost_function", &self.cost_function.is_some())
            .field("dynamic_neighborhood", &self.dynamic_neighborhood.is_some())
            .finish()
    }
}

impl<T> LocalSearchConfig<T> {
    /// Sets the per-restart iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the search direction.
    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    /// Sets the number of restarts.
    pub fn with_random_restarts(mut self, n: usize) -> Self {
        self.random_restarts = n;
        self
    }

    /// Sets the factory used for restarts after the first.
    ///
    /// Without one, every restart begins at the initial solution again.
    pub fn with_random_initializer<F>(mut self, init: F) -> Self
    where
        F: Fn(&mut dyn RngCore) -> T + Send + Sync + 'static,
    {
        self.random_initializer = Some(Arc::new(init));
        self
    }

    /// Sets a hook called on every accepted move.
    ///
    /// The hook's outcome never affects the search. A panic inside it is
    /// caught and logged.
    pub fn with_on_climb<F>(mut self, hook: F) -> Self
    where
        F: Fn(&T, f64, usize) + Send + Sync + 'static,
    {
        self.on_climb = Some(Arc::new(hook));
        self
    }

    /// Sets the tie-breaking cost function.
    pub fn with_cost_function<F>(mut self, cost: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        self.cost_function = Some(Arc::new(cost));
        self
    }

    /// Sets the direction of the tie-breaking cost function.
    pub fn with_maximize_cost(mut self, maximize_cost: bool) -> Self {
        self.maximize_cost = maximize_cost;
        self
    }

    /// Sets a dynamic neighborhood. It overrides any static neighborhood and
    /// keeps the search running until `max_iterations` even without
    /// improvement.
    pub fn with_dynamic_neighborhood<F>(mut self, neighborhood: F) -> Self
    where
        F: Fn(&T, usize) -> Vec<T> + Send + Sync + 'static,
    {
        self.dynamic_neighborhood = Some(Arc::new(neighborhood));
        self
    }

    /// Sets the early-stop fitness threshold.
    pub fn with_fitness_limit(mut self, limit: f64) -> Self {
        self.fitness_limit = Some(limit);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns `true` when a dynamic neighborhood is configured.
    pub fn has_dynamic_neighborhood(&self) -> bool {
        self.dynamic_neighborhood.is_some()
    }

    /// Returns `true` once `fitness` has reached the configured limit.
    pub(crate) fn limit_reached(&self, fitness: f64) -> bool {
        match self.fitness_limit {
            Some(limit) if self.maximize => fitness >= limit,
            Some(limit) => fitness <= limit,
            None => false,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.random_restarts == 0 {
            return Err(ConfigError::invalid(
                "random_restarts",
                "must be at least 1",
            ));
        }
        if self.fitness_limit.is_some_and(f64::is_nan) {
            return Err(ConfigError::invalid("fitness_limit", "must not be NaN"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let config = LocalSearchConfig::<i32>::default()
            .with_max_iterations(50)
            .with_maximize(false)
            .with_random_restarts(4)
            .with_maximize_cost(true)
            .with_fitness_limit(0.0)
            .with_seed(7);

        assert_eq!(config.max_iterations, 50);
        assert!(!config.maximize);
        assert_eq!(config.random_restarts, 4);
        assert!(config.maximize_cost);
        assert_eq!(config.fitness_limit, Some(0.0));
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_callbacks_survive_clone() {
        let config = LocalSearchConfig::<i32>::default()
            .with_cost_function(|x| *x as f64)
            .with_dynamic_neighborhood(|x, _| vec![x + 1]);
        let copy = config.clone();
        assert!(copy.cost_function.is_some());
        assert!(copy.has_dynamic_neighborhood());
    }

    #[test]
    fn test_validate_zero_restarts() {
        let config = LocalSearchConfig::<i32>::default().with_random_restarts(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter {
                name: "random_restarts",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_nan_limit() {
        let config = LocalSearchConfig::<i32>::default().with_fitness_limit(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_limit_reached_direction() {
        let max = LocalSearchConfig::<i32>::default().with_fitness_limit(5.0);
        assert!(max.limit_reached(5.0));
        assert!(!max.limit_reached(4.0));

        let min = max.with_maximize(false);
        assert!(min.limit_reached(5.0));
        assert!(min.limit_reached(-1.0));
        assert!(!min.limit_reached(6.0));
    }

    #[test]
    fn test_debug_hides_callbacks() {
        let config = LocalSearchConfig::<i32>::default().with_on_climb(|_, _, _| {});
        let text = format!("{config:?}");
        assert!(text.contains("on_climb: true"));
        assert!(text.contains("cost_function: false"));
    }
}
