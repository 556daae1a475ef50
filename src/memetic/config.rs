//! Memetic algorithm configuration.

use crate::error::ConfigError;

/// Configuration for the [`MemeticAlgorithm`](super::MemeticAlgorithm).
///
/// The three rates are per-offspring probabilities in `[0, 1]`.
///
/// # Defaults
///
/// ```
/// use u_climb::memetic::MemeticConfig;
///
/// let config = MemeticConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.local_search_rate, 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemeticConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Generations run by each call to `evolve`.
    pub generations: usize,

    /// Probability of building a child by crossover instead of cloning the
    /// first parent.
    pub crossover_rate: f64,

    /// Probability of mutating a child.
    pub mutation_rate: f64,

    /// Probability of refining a child by local search.
    pub local_search_rate: f64,

    /// Whether to evaluate offspring in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for MemeticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            local_search_rate: 0.1,
            parallel: true,
            seed: None,
        }
    }
}

impl MemeticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generations per `evolve` call.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the local search probability.
    pub fn with_local_search_rate(mut self, rate: f64) -> Self {
        self.local_search_rate = rate;
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
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("local_search_rate", self.local_search_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::invalid(name, format!("{rate} is outside [0, 1]")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MemeticConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 100);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.local_search_rate - 0.1).abs() < 1e-10);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MemeticConfig::default()
            .with_population_size(8)
            .with_generations(3)
            .with_crossover_rate(0.5)
            .with_mutation_rate(0.25)
            .with_local_search_rate(1.0)
            .with_parallel(false)
            .with_seed(11);
        assert_eq!(config.population_size, 8);
        assert_eq!(config.generations, 3);
        assert!((config.crossover_rate - 0.5).abs() < 1e-10);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert!((config.local_search_rate - 1.0).abs() < 1e-10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_validate_rates() {
        let bad = MemeticConfig::default().with_crossover_rate(1.5);
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::InvalidParameter {
                name: "crossover_rate",
                ..
            })
        ));
        assert!(MemeticConfig::default()
            .with_local_search_rate(-0.1)
            .validate()
            .is_err());
        assert!(MemeticConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = MemeticConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }
}
