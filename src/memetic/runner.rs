//! Memetic evolutionary loop.
//!
//! # Algorithm (per generation)
//!
//! While the offspring list is short of `population_size`:
//!
//! 1. Select two parents
//! 2. With `crossover_rate`, take the first child of their crossover;
//!    otherwise clone the first parent
//! 3. With `mutation_rate`, mutate the child
//! 4. With `local_search_rate`, replace the child by the result of a local
//!    search started from it
//!
//! Offspring are then evaluated and either handed to the replacement
//! operator or swapped in as the new population.

use super::config::MemeticConfig;
use crate::error::ConfigError;
use crate::ga::{
    evaluate_all, Crossover, Evaluation, GenerationState, GenomeDefaults, Individual,
    Initialization, Mutation, Replacement, Selection, Termination, TournamentSelection,
};
use crate::local_search::{
    check_neighborhood, search_unchecked, LocalSearchConfig, NeighborhoodFn, ObjectiveFn,
};
use crate::random::{create_rng, rng_from_seed, EngineRng};
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Local search settings used to refine offspring.
struct Refiner<T> {
    objective: ObjectiveFn<T>,
    neighborhood: Option<NeighborhoodFn<T>>,
    config: LocalSearchConfig<T>,
}

/// Collects the operators of a [`MemeticAlgorithm`] before it is built.
///
/// Defaults:
///
/// | Option              | Default                                       |
/// |---------------------|-----------------------------------------------|
/// | selection           | [`TournamentSelection`] of size 2             |
/// | crossover           | [`GenomeDefaults::default_crossover`]         |
/// | mutation            | [`GenomeDefaults::default_mutation`] at 1.0   |
/// | replacement         | offspring replace the population              |
/// | termination         | none; `evolve` runs `config.generations`      |
/// | objective           | the evaluation operator                       |
/// | neighborhood        | none; required when `local_search_rate > 0`   |
/// | local_search_config | [`LocalSearchConfig::default`]                |
pub struct MemeticAlgorithmBuilder<T> {
    config: MemeticConfig,
    initialization: Box<dyn Initialization<T>>,
    evaluation: Arc<dyn Evaluation<T>>,
    selection: Option<Box<dyn Selection<Individual<T>>>>,
    crossover: Option<Box<dyn Crossover<T>>>,
    mutation: Option<Box<dyn Mutation<T>>>,
    replacement: Option<Box<dyn Replacement<Individual<T>>>>,
    termination: Option<Box<dyn Termination<Individual<T>>>>,
    objective: Option<ObjectiveFn<T>>,
    neighborhood: Option<NeighborhoodFn<T>>,
    local_search_config: LocalSearchConfig<T>,
}

impl<T: Clone + Send + Sync + 'static> MemeticAlgorithmBuilder<T> {
    /// Sets the parent selection operator.
    pub fn with_selection(mut self, selection: impl Selection<Individual<T>> + 'static) -> Self {
        self.selection = Some(Box::new(selection));
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: impl Crossover<T> + 'static) -> Self {
        self.crossover = Some(Box::new(crossover));
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: impl Mutation<T> + 'static) -> Self {
        self.mutation = Some(Box::new(mutation));
        self
    }

    /// Sets the replacement operator.
    pub fn with_replacement(
        mut self,
        replacement: impl Replacement<Individual<T>> + 'static,
    ) -> Self {
        self.replacement = Some(Box::new(replacement));
        self
    }

    /// Sets a termination operator, checked after every generation.
    pub fn with_termination(
        mut self,
        termination: impl Termination<Individual<T>> + 'static,
    ) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    /// Sets the objective that local search climbs.
    pub fn with_objective<F>(mut self, objective: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        self.objective = Some(Arc::new(objective));
        self
    }

    /// Sets the static neighborhood for local search.
    pub fn with_neighborhood<F>(mut self, neighborhood: F) -> Self
    where
        F: Fn(&T) -> Vec<T> + Send + Sync + 'static,
    {
        self.neighborhood = Some(Arc::new(neighborhood));
        self
    }

    /// Sets the local search options. A dynamic neighborhood set here takes
    /// precedence over [`with_neighborhood`](Self::with_neighborhood).
    ///
    /// `config.seed` is not used: each refinement is seeded from the
    /// engine's own generator.
    pub fn with_local_search_config(mut self, config: LocalSearchConfig<T>) -> Self {
        self.local_search_config = config;
        self
    }

    /// Resolves defaults, creates and evaluates the initial population.
    ///
    /// Crossover and mutation defaults are only resolved when their rate is
    /// non-zero, and the local search setup is only checked when
    /// `local_search_rate` is non-zero.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParameter`] for an invalid config or local
    ///   search config
    /// - [`ConfigError::MissingOperator`] if a needed operator has no default
    /// - [`ConfigError::MissingNeighborhood`] if local search is enabled
    ///   without a neighborhood
    /// - [`ConfigError::EmptyPopulation`] if initialization returns nothing
    pub fn build(self) -> Result<MemeticAlgorithm<T>, ConfigError>
    where
        T: GenomeDefaults,
    {
        let config = self.config;
        config.validate()?;

        let crossover = match self.crossover {
            Some(crossover) => Some(crossover),
            None if config.crossover_rate > 0.0 => Some(T::default_crossover()?),
            None => None,
        };
        let mutation = match self.mutation {
            Some(mutation) => Some(mutation),
            None if config.mutation_rate > 0.0 => Some(T::default_mutation(1.0)?),
            None => None,
        };
        let selection = self
            .selection
            .unwrap_or_else(|| Box::new(TournamentSelection::default()));

        let refiner = if config.local_search_rate > 0.0 {
            check_neighborhood(self.neighborhood.is_some(), &self.local_search_config)?;
            self.local_search_config.validate()?;
            let objective: ObjectiveFn<T> = match self.objective {
                Some(objective) => objective,
                None => {
                    let evaluation = Arc::clone(&self.evaluation);
                    Arc::new(move |genome: &T| evaluation.evaluate(genome))
                }
            };
            Some(Refiner {
                objective,
                neighborhood: self.neighborhood,
                config: self.local_search_config,
            })
        } else {
            None
        };

        let mut rng = rng_from_seed(config.seed);
        let genomes = self
            .initialization
            .initialize(config.population_size, &mut rng);
        if genomes.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }

        let fitnesses = evaluate_all(&*self.evaluation, &genomes, config.parallel);
        let population: Vec<Individual<T>> = genomes
            .into_iter()
            .zip(fitnesses)
            .map(|(genome, fitness)| Individual::new(genome, fitness))
            .collect();
        let best = fittest(&population)
            .cloned()
            .ok_or(ConfigError::EmptyPopulation)?;

        tracing::debug!(
            population = population.len(),
            best_fitness = best.fitness,
            local_search = refiner.is_some(),
            "memetic population initialized"
        );

        Ok(MemeticAlgorithm {
            fitness_history: vec![best.fitness],
            config,
            evaluation: self.evaluation,
            selection,
            crossover,
            mutation,
            replacement: self.replacement,
            termination: self.termination,
            refiner,
            population,
            best,
            generation: 0,
            refinements: 0,
            rng,
        })
    }
}

/// A Genetic Algorithm whose offspring may be refined by local search
/// (Lamarckian learning: refined genomes replace the originals).
///
/// Fitness is **maximized**.
///
/// # Usage
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_climb::memetic::{MemeticAlgorithm, MemeticConfig};
///
/// let config = MemeticConfig::default()
///     .with_population_size(10)
///     .with_generations(5)
///     .with_local_search_rate(0.5)
///     .with_seed(3);
///
/// let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(
///     config,
///     |rng: &mut dyn RngCore| (0..12).map(|_| rng.random_bool(0.5)).collect::<Vec<bool>>(),
///     |g: &Vec<bool>| g.iter().filter(|&&b| b).count() as f64,
/// )
/// .with_neighborhood(|g: &Vec<bool>| {
///     (0..g.len())
///         .map(|i| {
///             let mut n = g.clone();
///             n[i] = !n[i];
///             n
///         })
///         .collect()
/// })
/// .build()
/// .unwrap();
///
/// let best = ma.evolve();
/// assert_eq!(best.fitness, 12.0);
/// ```
pub struct MemeticAlgorithm<T> {
    config: MemeticConfig,
    evaluation: Arc<dyn Evaluation<T>>,
    selection: Box<dyn Selection<Individual<T>>>,
    crossover: Option<Box<dyn Crossover<T>>>,
    mutation: Option<Box<dyn Mutation<T>>>,
    replacement: Option<Box<dyn Replacement<Individual<T>>>>,
    termination: Option<Box<dyn Termination<Individual<T>>>>,
    refiner: Option<Refiner<T>>,
    population: Vec<Individual<T>>,
    best: Individual<T>,
    generation: usize,
    refinements: usize,
    fitness_history: Vec<f64>,
    rng: EngineRng,
}

impl<T: Clone + Send + Sync + 'static> MemeticAlgorithm<T> {
    /// Starts building an engine from its two required operators.
    pub fn builder(
        config: MemeticConfig,
        initialization: impl Initialization<T> + 'static,
        evaluation: impl Evaluation<T> + 'static,
    ) -> MemeticAlgorithmBuilder<T> {
        MemeticAlgorithmBuilder {
            config,
            initialization: Box::new(initialization),
            evaluation: Arc::new(evaluation),
            selection: None,
            crossover: None,
            mutation: None,
            replacement: None,
            termination: None,
            objective: None,
            neighborhood: None,
            local_search_config: LocalSearchConfig::default(),
        }
    }

    /// Runs `config.generations` generations, stopping early if the
    /// termination operator fires, and returns the best individual found.
    #[tracing::instrument(
        level = "debug",
        name = "memetic_evolve",
        skip_all,
        fields(start = self.generation)
    )]
    pub fn evolve(&mut self) -> Individual<T> {
        for _ in 0..self.config.generations {
            self.step();

            if let Some(termination) = &self.termination {
                // Index of the generation just finished, starting at 0.
                let state = GenerationState {
                    generation: self.generation - 1,
                    best_fitness: self.best.fitness,
                    population: &self.population,
                };
                if termination.should_terminate(&state) {
                    tracing::debug!(generation = self.generation, "termination operator fired");
                    break;
                }
            }
        }
        self.best.clone()
    }

    fn step(&mut self) {
        let target = self.config.population_size;
        let fitnesses: Vec<f64> = self.population.iter().map(|ind| ind.fitness).collect();
        let mut genomes = Vec::with_capacity(target);
        let mut refined = 0usize;

        while genomes.len() < target {
            let parents = self
                .selection
                .select(&self.population, &fitnesses, 2, &mut self.rng);
            let first = parents.first().copied().unwrap_or(0);
            let second = parents.get(1).copied().unwrap_or(first);
            let parent1 = &self.population[first].genome;
            let parent2 = &self.population[second].genome;

            let mut child = match &self.crossover {
                Some(crossover) if self.rng.random_bool(self.config.crossover_rate) => {
                    crossover.crossover(parent1, parent2, &mut self.rng).0
                }
                _ => parent1.clone(),
            };

            if let Some(mutation) = &self.mutation {
                if self.rng.random_bool(self.config.mutation_rate) {
                    mutation.mutate(&mut child, &mut self.rng);
                }
            }

            if let Some(refiner) = &self.refiner {
                if self.rng.random_bool(self.config.local_search_rate) {
                    let mut ls_rng = create_rng(self.rng.next_u64());
                    child = search_unchecked(
                        child,
                        &*refiner.objective,
                        refiner.neighborhood.as_deref(),
                        &refiner.config,
                        &mut ls_rng,
                    )
                    .solution;
                    refined += 1;
                }
            }

            genomes.push(child);
        }

        let offspring_fitnesses = evaluate_all(&*self.evaluation, &genomes, self.config.parallel);
        let offspring: Vec<Individual<T>> = genomes
            .into_iter()
            .zip(offspring_fitnesses.iter().copied())
            .map(|(genome, fitness)| Individual::new(genome, fitness))
            .collect();

        let old = std::mem::take(&mut self.population);
        self.population = match &self.replacement {
            Some(replacement) => replacement.replace(old, offspring, &offspring_fitnesses),
            None => offspring,
        };

        if let Some(candidate) = fittest(&self.population) {
            if candidate.fitness > self.best.fitness {
                self.best = candidate.clone();
            }
        }

        self.generation += 1;
        self.refinements += refined;
        self.fitness_history.push(self.best.fitness);

        tracing::trace!(
            generation = self.generation,
            best_fitness = self.best.fitness,
            refined,
            "generation complete"
        );
    }

    /// The best individual found so far.
    pub fn best(&self) -> &Individual<T> {
        &self.best
    }

    /// Fitness of [`best`](Self::best).
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness
    }

    /// The current population.
    pub fn population(&self) -> &[Individual<T>] {
        &self.population
    }

    /// Total generations completed across all `evolve` calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Number of offspring refined by local search so far.
    pub fn refinements(&self) -> usize {
        self.refinements
    }

    /// Best fitness after initialization and after each generation.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &MemeticConfig {
        &self.config
    }
}

/// First individual with the highest fitness.
fn fittest<T>(population: &[Individual<T>]) -> Option<&Individual<T>> {
    population.iter().fold(None, |best, ind| match best {
        Some(b) if ind.fitness > b.fitness => Some(ind),
        Some(b) => Some(b),
        None => Some(ind),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::sync::Mutex;

    const WEIGHTS: [u32; 5] = [2, 3, 4, 5, 9];
    const VALUES: [u32; 5] = [3, 4, 5, 8, 10];
    const CAPACITY: u32 = 15;

    fn weight(items: &[bool]) -> u32 {
        items.iter().zip(WEIGHTS).filter(|&(&x, _)| x).map(|(_, w)| w).sum()
    }

    fn knapsack(items: &Vec<bool>) -> f64 {
        let w = weight(items);
        if w > CAPACITY {
            -(w as f64)
        } else {
            items
                .iter()
                .zip(VALUES)
                .filter(|&(&x, _)| x)
                .map(|(_, v)| v as f64)
                .sum()
        }
    }

    fn flips(items: &Vec<bool>) -> Vec<Vec<bool>> {
        (0..items.len())
            .map(|i| {
                let mut n = items.clone();
                n[i] = !n[i];
                n
            })
            .collect()
    }

    fn random_bits(n: usize) -> impl Fn(&mut dyn RngCore) -> Vec<bool> + Send + Sync {
        move |rng: &mut dyn RngCore| (0..n).map(|_| rng.random_bool(0.5)).collect()
    }

    fn onemax(genome: &Vec<bool>) -> f64 {
        genome.iter().filter(|&&b| b).count() as f64
    }

    #[test]
    fn test_knapsack() {
        let config = MemeticConfig::default()
            .with_population_size(20)
            .with_generations(30)
            .with_local_search_rate(0.3)
            .with_seed(42);

        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(5), knapsack)
            .with_neighborhood(flips)
            .build()
            .unwrap();
        let best = ma.evolve();

        assert!(best.fitness >= 18.0, "best {}", best.fitness);
        assert!(weight(&best.genome) <= CAPACITY);
        assert_eq!(knapsack(&best.genome), best.fitness);
    }

    #[test]
    fn test_full_refinement_solves_onemax() {
        let config = MemeticConfig::default()
            .with_population_size(6)
            .with_generations(1)
            .with_local_search_rate(1.0)
            .with_seed(1);

        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(16), onemax)
            .with_neighborhood(flips)
            .build()
            .unwrap();
        let best = ma.evolve();

        assert_eq!(best.fitness, 16.0);
        assert_eq!(ma.refinements(), 6);
        assert!(ma.population().iter().all(|ind| ind.fitness == 16.0));
    }

    #[test]
    fn test_separate_objective_drives_refinement() {
        // Local search climbs towards all-false while evaluation rewards ones.
        let config = MemeticConfig::default()
            .with_population_size(4)
            .with_generations(1)
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0)
            .with_local_search_rate(1.0)
            .with_seed(2);

        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(8), onemax)
            .with_objective(|g: &Vec<bool>| -onemax(g))
            .with_neighborhood(flips)
            .build()
            .unwrap();
        ma.evolve();

        assert!(ma.population().iter().all(|ind| ind.fitness == 0.0));
    }

    #[test]
    fn test_local_search_config_is_used() {
        let config = MemeticConfig::default()
            .with_population_size(4)
            .with_generations(1)
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0)
            .with_local_search_rate(1.0)
            .with_seed(5);

        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(
            config,
            |_: &mut dyn RngCore| vec![false; 10],
            onemax,
        )
        .with_neighborhood(flips)
        .with_local_search_config(LocalSearchConfig::default().with_max_iterations(3))
        .build()
        .unwrap();
        ma.evolve();

        assert!(ma.population().iter().all(|ind| ind.fitness == 3.0));
    }

    #[test]
    fn test_evolve_runs_configured_generations() {
        let config = MemeticConfig::default()
            .with_population_size(8)
            .with_generations(4)
            .with_local_search_rate(0.0)
            .with_seed(9);

        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(10), onemax)
            .build()
            .unwrap();
        ma.evolve();
        assert_eq!(ma.generation(), 4);
        ma.evolve();
        assert_eq!(ma.generation(), 8);
        assert_eq!(ma.fitness_history().len(), 9);
        assert!(ma.fitness_history().windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(ma.population().len(), 8);
    }

    #[test]
    fn test_zero_rate_skips_local_search() {
        let config = MemeticConfig::default()
            .with_population_size(8)
            .with_generations(5)
            .with_local_search_rate(0.0)
            .with_seed(4);

        // No neighborhood needed when local search is off.
        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(10), onemax)
            .build()
            .unwrap();
        ma.evolve();
        assert_eq!(ma.refinements(), 0);
    }

    #[test]
    fn test_termination_operator() {
        let config = MemeticConfig::default()
            .with_population_size(6)
            .with_generations(50)
            .with_local_search_rate(0.0)
            .with_seed(7);

        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(40), onemax)
            .with_termination(|s: &GenerationState<'_, Individual<Vec<bool>>>| s.generation >= 3)
            .build()
            .unwrap();
        ma.evolve();
        // Indices 0..=3 ran before the check fired.
        assert_eq!(ma.generation(), 4);
    }

    #[test]
    fn test_termination_sees_zero_based_index() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let config = MemeticConfig::default()
            .with_population_size(4)
            .with_generations(3)
            .with_local_search_rate(0.0)
            .with_seed(7);

        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(8), onemax)
            .with_termination(move |s: &GenerationState<'_, Individual<Vec<bool>>>| {
                log.lock().unwrap().push(s.generation);
                false
            })
            .build()
            .unwrap();
        ma.evolve();
        ma.evolve();
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_replacement_receives_offspring_fitnesses() {
        /// Records the fitness slice and checks it against the offspring.
        struct Recording(Arc<Mutex<Vec<bool>>>);
        impl<T: Clone> Replacement<Individual<T>> for Recording {
            fn replace(
                &self,
                _: Vec<Individual<T>>,
                offspring: Vec<Individual<T>>,
                fitnesses: &[f64],
            ) -> Vec<Individual<T>> {
                let expected: Vec<f64> = offspring.iter().map(|i| i.fitness).collect();
                self.0.lock().unwrap().push(expected == fitnesses);
                offspring
            }
        }

        let matches = Arc::new(Mutex::new(Vec::new()));
        let config = MemeticConfig::default()
            .with_population_size(8)
            .with_generations(5)
            .with_mutation_rate(1.0)
            .with_local_search_rate(0.5)
            .with_seed(21);
        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(12), onemax)
            .with_neighborhood(flips)
            .with_replacement(Recording(Arc::clone(&matches)))
            .build()
            .unwrap();
        ma.evolve();

        let matches = matches.lock().unwrap();
        assert_eq!(matches.len(), 5);
        assert!(matches.iter().all(|&m| m));
    }

    #[test]
    fn test_fittest_prefers_first_of_ties() {
        let population = vec![
            Individual::new(vec![false], 1.0),
            Individual::new(vec![true], 3.0),
            Individual::new(vec![false, true], 3.0),
            Individual::new(vec![true, true], 2.0),
        ];
        assert_eq!(fittest(&population).map(|i| &i.genome), Some(&vec![true]));
        assert!(fittest::<Vec<bool>>(&[]).is_none());
    }

    #[test]
    fn test_custom_replacement() {
        /// Keeps the fittest of parents and offspring together.
        struct KeepBest;
        impl<T: Clone> Replacement<Individual<T>> for KeepBest {
            fn replace(
                &self,
                old: Vec<Individual<T>>,
                offspring: Vec<Individual<T>>,
                _: &[f64],
            ) -> Vec<Individual<T>> {
                let size = old.len();
                let mut all: Vec<Individual<T>> = old.into_iter().chain(offspring).collect();
                all.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
                all.truncate(size);
                all
            }
        }

        let config = MemeticConfig::default()
            .with_population_size(10)
            .with_generations(1)
            .with_local_search_rate(0.0)
            .with_seed(12);
        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(20), onemax)
            .with_replacement(KeepBest)
            .build()
            .unwrap();

        let worst_of = |p: &[Individual<Vec<bool>>]| {
            p.iter().map(|i| i.fitness).fold(f64::INFINITY, f64::min)
        };
        let mut previous = worst_of(ma.population());
        for _ in 0..10 {
            ma.evolve();
            let current = worst_of(ma.population());
            assert!(current >= previous);
            assert_eq!(ma.population().len(), 10);
            previous = current;
        }
    }

    #[test]
    fn test_missing_neighborhood() {
        let config = MemeticConfig::default().with_local_search_rate(0.1);
        let result =
            MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(5), knapsack).build();
        assert_eq!(result.err(), Some(ConfigError::MissingNeighborhood));
    }

    #[test]
    fn test_dynamic_neighborhood_satisfies_local_search() {
        let config = MemeticConfig::default()
            .with_population_size(4)
            .with_generations(1)
            .with_local_search_rate(1.0)
            .with_seed(3);
        let ls = LocalSearchConfig::default().with_dynamic_neighborhood(|g: &Vec<bool>, _| flips(g));

        let mut ma = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(6), onemax)
            .with_local_search_config(ls)
            .build()
            .unwrap();
        assert_eq!(ma.evolve().fitness, 6.0);
    }

    #[test]
    fn test_invalid_local_search_config() {
        let config = MemeticConfig::default().with_local_search_rate(0.5);
        let result = MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(5), knapsack)
            .with_neighborhood(flips)
            .with_local_search_config(LocalSearchConfig::default().with_random_restarts(0))
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidParameter { .. })));
    }

    #[test]
    fn test_invalid_rates() {
        let config = MemeticConfig::default().with_crossover_rate(2.0);
        let result =
            MemeticAlgorithm::<Vec<bool>>::builder(config, random_bits(5), knapsack).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "crossover_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_population() {
        struct Nothing;
        impl Initialization<Vec<bool>> for Nothing {
            fn initialize(&self, _: usize, _: &mut dyn RngCore) -> Vec<Vec<bool>> {
                Vec::new()
            }
        }

        let result = MemeticAlgorithm::<Vec<bool>>::builder(
            MemeticConfig::default().with_local_search_rate(0.0),
            Nothing,
            onemax,
        )
        .build();
        assert_eq!(result.err(), Some(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_opaque_genome_operators() {
        #[derive(Clone)]
        struct Tour(Vec<usize>);
        impl GenomeDefaults for Tour {}

        let init = |_: &mut dyn RngCore| Tour(vec![2, 0, 1]);
        let eval = |t: &Tour| -(t.0[0] as f64);

        let missing = MemeticAlgorithm::<Tour>::builder(
            MemeticConfig::default().with_local_search_rate(0.0),
            init,
            eval,
        )
        .build();
        assert_eq!(
            missing.err(),
            Some(ConfigError::MissingOperator {
                operator: "crossover"
            })
        );

        // Mutation-only evolution needs no crossover.
        let mut ma = MemeticAlgorithm::<Tour>::builder(
            MemeticConfig::default()
                .with_population_size(6)
                .with_generations(20)
                .with_crossover_rate(0.0)
                .with_mutation_rate(1.0)
                .with_local_search_rate(0.0)
                .with_seed(8),
            init,
            eval,
        )
        .with_mutation(|t: &mut Tour, rng: &mut dyn RngCore| {
            let i = rng.random_range(0..t.0.len());
            let j = rng.random_range(0..t.0.len());
            t.0.swap(i, j);
        })
        .build()
        .unwrap();
        assert_eq!(ma.evolve().fitness, 0.0);
    }
}
