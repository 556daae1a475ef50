//! GA configuration.
//!
//! [`GaConfig`] holds the numeric parameters of the evolutionary loop.
//! Operators are attached on the [`GeneticAlgorithmBuilder`](super::GeneticAlgorithmBuilder).

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_climb::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.elite_count, 0);
/// assert_eq!(config.tournament_size, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_climb::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_elite_count(2)
///     .with_fitness_limit(20.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Total generation budget, used by the default termination operator.
    pub max_generations: usize,

    /// Individuals copied unchanged into the next generation.
    ///
    /// Elites overwrite the worst members of the new population, so the best
    /// fitness never regresses when this is at least 1.
    pub elite_count: usize,

    /// Stop as soon as the best fitness reaches this value.
    pub fitness_limit: Option<f64>,

    /// Contestants per tournament for the default selection.
    pub tournament_size: usize,

    /// Expected flipped genes per genome for the default mutation.
    pub mutation_rate: f64,

    /// Whether to evaluate the population in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            elite_count: 0,
            fitness_limit: None,
            tournament_size: 2,
            mutation_rate: 1.0,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the total generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the target fitness.
    pub fn with_fitness_limit(mut self, limit: f64) -> Self {
        self.fitness_limit = Some(limit);
        self
    }

    /// Sets the tournament size of the default selection.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the rate of the default mutation.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::invalid(
                "population_size",
                "must be at least 1",
            ));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::invalid(
                "max_generations",
                "must be at least 1",
            ));
        }
        if self.elite_count >= self.population_size {
            return Err(ConfigError::invalid(
                "elite_count",
                "elites fill the entire population",
            ));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::invalid(
                "tournament_size",
                "must be at least 1",
            ));
        }
        if !self.mutation_rate.is_finite() || self.mutation_rate < 0.0 {
            return Err(ConfigError::invalid(
                "mutation_rate",
                "must be finite and non-negative",
            ));
        }
        if self.fitness_limit.is_some_and(f64::is_nan) {
            return Err(ConfigError::invalid("fitness_limit", "must not be NaN"));
        }
        Ok(())
    }
}
