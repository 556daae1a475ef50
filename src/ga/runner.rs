//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] owns a population and its operators and advances it
//! one generation at a time:
//! select → crossover → mutate → elitism → replace → evaluate → repeat.

use super::config::GaConfig;
use super::operators::{
    Crossover, Elitism, Evaluation, Initialization, Mutation, Replacement, Selection, Termination,
};
use super::replacement::GenerationalReplacement;
use super::selection::{BestElitism, TournamentSelection};
use super::termination::GenerationLimit;
use super::types::{GenerationState, GenomeDefaults, Individual};
use crate::error::ConfigError;
use crate::random::{rng_from_seed, EngineRng};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Collects the operators of a [`GeneticAlgorithm`] before it is built.
///
/// Initialization and evaluation are required and passed to
/// [`GeneticAlgorithm::builder`]. Every other operator has a default:
///
/// | Operator    | Default                                                   |
/// |-------------|-----------------------------------------------------------|
/// | selection   | [`TournamentSelection`] of `config.tournament_size`       |
/// | crossover   | [`GenomeDefaults::default_crossover`]                     |
/// | mutation    | [`GenomeDefaults::default_mutation`] at `config.mutation_rate` |
/// | replacement | [`GenerationalReplacement`]                               |
/// | elitism     | [`BestElitism`]                                           |
/// | termination | [`GenerationLimit`] from `config`                         |
pub struct GeneticAlgorithmBuilder<T> {
    config: GaConfig,
    initialization: Box<dyn Initialization<T>>,
    evaluation: Box<dyn Evaluation<T>>,
    selection: Option<Box<dyn Selection<T>>>,
    crossover: Option<Box<dyn Crossover<T>>>,
    mutation: Option<Box<dyn Mutation<T>>>,
    replacement: Option<Box<dyn Replacement<T>>>,
    elitism: Option<Box<dyn Elitism<T>>>,
    termination: Option<Box<dyn Termination<T>>>,
}

impl<T: Clone + Send + Sync + 'static> GeneticAlgorithmBuilder<T> {
    /// Sets the selection operator.
    pub fn with_selection(mut self, selection: impl Selection<T> + 'static) -> Self {
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
    pub fn with_replacement(mut self, replacement: impl Replacement<T> + 'static) -> Self {
        self.replacement = Some(Box::new(replacement));
        self
    }

    /// Sets the elitism operator. Only consulted when `elite_count > 0`.
    pub fn with_elitism(mut self, elitism: impl Elitism<T> + 'static) -> Self {
        self.elitism = Some(Box::new(elitism));
        self
    }

    /// Sets the termination operator.
    ///
    /// `config.fitness_limit` still stops the run when a custom operator is
    /// used.
    pub fn with_termination(mut self, termination: impl Termination<T> + 'static) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    /// Resolves default operators, creates and evaluates the initial
    /// population.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParameter`] if `config` is invalid
    /// - [`ConfigError::MissingOperator`] if crossover or mutation has no
    ///   default for `T` and none was supplied
    /// - [`ConfigError::EmptyPopulation`] if initialization returns nothing
    pub fn build(self) -> Result<GeneticAlgorithm<T>, ConfigError>
    where
        T: GenomeDefaults,
    {
        let config = self.config;
        config.validate()?;

        let crossover = match self.crossover {
            Some(crossover) => crossover,
            None => T::default_crossover()?,
        };
        let mutation = match self.mutation {
            Some(mutation) => mutation,
            None => T::default_mutation(config.mutation_rate)?,
        };
        let selection = self
            .selection
            .unwrap_or_else(|| Box::new(TournamentSelection::new(config.tournament_size)));
        let replacement = self
            .replacement
            .unwrap_or_else(|| Box::new(GenerationalReplacement));
        let elitism = self.elitism.unwrap_or_else(|| Box::new(BestElitism));
        let termination = self.termination.unwrap_or_else(|| {
            Box::new(GenerationLimit {
                max_generations: config.max_generations,
                fitness_limit: config.fitness_limit,
            })
        });

        let mut rng = rng_from_seed(config.seed);
        let population = self
            .initialization
            .initialize(config.population_size, &mut rng);
        if population.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }
        if population.len() != config.population_size {
            tracing::warn!(
                expected = config.population_size,
                actual = population.len(),
                "initialization returned a different population size"
            );
        }

        let fitnesses = evaluate_all(self.evaluation.as_ref(), &population, config.parallel);
        let best_idx = best_index(&fitnesses).unwrap_or(0);
        let best = Individual::new(population[best_idx].clone(), fitnesses[best_idx]);
        tracing::debug!(
            population = population.len(),
            best_fitness = best.fitness,
            "initial population evaluated"
        );

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness);

        Ok(GeneticAlgorithm {
            config,
            evaluation: self.evaluation,
            selection,
            crossover,
            mutation,
            replacement,
            elitism,
            termination,
            population,
            fitnesses,
            best,
            generation: 0,
            fitness_history,
            rng,
        })
    }
}

/// A generational Genetic Algorithm.
///
/// Fitness is **maximized**; negate the objective to minimize.
///
/// # Usage
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_climb::ga::{GaConfig, GeneticAlgorithm};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_max_generations(60)
///     .with_elite_count(1)
///     .with_seed(42);
///
/// let mut ga = GeneticAlgorithm::<Vec<bool>>::builder(
///     config,
///     |rng: &mut dyn RngCore| (0..16).map(|_| rng.random_bool(0.5)).collect::<Vec<bool>>(),
///     |genome: &Vec<bool>| genome.iter().filter(|&&b| b).count() as f64,
/// )
/// .build()
/// .unwrap();
///
/// ga.evolve(None);
/// assert!(ga.best_fitness() >= 14.0);
/// ```
pub struct GeneticAlgorithm<T> {
    config: GaConfig,
    evaluation: Box<dyn Evaluation<T>>,
    selection: Box<dyn Selection<T>>,
    crossover: Box<dyn Crossover<T>>,
    mutation: Box<dyn Mutation<T>>,
    replacement: Box<dyn Replacement<T>>,
    elitism: Box<dyn Elitism<T>>,
    termination: Box<dyn Termination<T>>,
    population: Vec<T>,
    fitnesses: Vec<f64>,
    best: Individual<T>,
    generation: usize,
    fitness_history: Vec<f64>,
    rng: EngineRng,
}

impl<T: Clone + Send + Sync + 'static> GeneticAlgorithm<T> {
    /// Starts building an engine from its two required operators.
    pub fn builder(
        config: GaConfig,
        initialization: impl Initialization<T> + 'static,
        evaluation: impl Evaluation<T> + 'static,
    ) -> GeneticAlgorithmBuilder<T> {
        GeneticAlgorithmBuilder {
            config,
            initialization: Box::new(initialization),
            evaluation: Box::new(evaluation),
            selection: None,
            crossover: None,
            mutation: None,
            replacement: None,
            elitism: None,
            termination: None,
        }
    }

    /// Runs up to `generations` more generations and returns the best
    /// genome found so far.
    ///
    /// `None` runs until the generation budget of the config is used up.
    /// Either way the run stops early when the termination operator fires
    /// or the best fitness reaches `config.fitness_limit`.
    #[tracing::instrument(
        level = "debug",
        name = "ga_evolve",
        skip_all,
        fields(start = self.generation)
    )]
    pub fn evolve(&mut self, generations: Option<usize>) -> &T {
        let budget = generations.unwrap_or_else(|| {
            self.config
                .max_generations
                .saturating_sub(self.generation)
        });

        for _ in 0..budget {
            let state = GenerationState {
                generation: self.generation,
                best_fitness: self.best.fitness,
                population: &self.population,
            };
            if self.termination.should_terminate(&state) {
                tracing::debug!(generation = self.generation, "termination operator fired");
                break;
            }

            self.step();

            if self.limit_reached() {
                tracing::debug!(
                    generation = self.generation,
                    best_fitness = self.best.fitness,
                    "fitness limit reached"
                );
                break;
            }
        }

        &self.best.genome
    }

    /// Advances the population by one generation.
    fn step(&mut self) {
        let size = self.population.len();
        let parents = self
            .selection
            .select(&self.population, &self.fitnesses, size, &mut self.rng);

        let mut offspring = Vec::with_capacity(parents.len() + 1);
        for pair in parents.chunks(2) {
            let first = pair[0];
            let second = pair.get(1).copied().unwrap_or(parents[0]);
            let (mut child1, mut child2) = self.crossover.crossover(
                &self.population[first],
                &self.population[second],
                &mut self.rng,
            );
            self.mutation.mutate(&mut child1, &mut self.rng);
            self.mutation.mutate(&mut child2, &mut self.rng);
            offspring.push(child1);
            offspring.push(child2);
        }

        let elites: Vec<(T, f64)> = if self.config.elite_count > 0 {
            self.elitism
                .elites(&self.population, &self.fitnesses, self.config.elite_count)
                .into_iter()
                .map(|i| (self.population[i].clone(), self.fitnesses[i]))
                .collect()
        } else {
            Vec::new()
        };

        let old = std::mem::take(&mut self.population);
        let old_fitnesses = std::mem::take(&mut self.fitnesses);
        let mut next = self.replacement.replace(old, offspring, &old_fitnesses);
        let mut fitnesses = evaluate_all(self.evaluation.as_ref(), &next, self.config.parallel);

        if !elites.is_empty() {
            // Elites take the worst slots and keep their known fitness.
            let mut worst_first: Vec<usize> = (0..next.len()).collect();
            worst_first.sort_by(|&a, &b| {
                fitnesses[a]
                    .partial_cmp(&fitnesses[b])
                    .unwrap_or(Ordering::Equal)
            });
            for (slot, (genome, fitness)) in worst_first.into_iter().zip(elites) {
                next[slot] = genome;
                fitnesses[slot] = fitness;
            }
        }

        if let Some(i) = best_index(&fitnesses) {
            if fitnesses[i] > self.best.fitness {
                self.best = Individual::new(next[i].clone(), fitnesses[i]);
            }
        }

        self.population = next;
        self.fitnesses = fitnesses;
        self.generation += 1;
        self.fitness_history.push(self.best.fitness);

        tracing::trace!(
            generation = self.generation,
            best_fitness = self.best.fitness,
            "generation complete"
        );
    }

    fn limit_reached(&self) -> bool {
        self.config
            .fitness_limit
            .is_some_and(|limit| self.best.fitness >= limit)
    }

    /// The best genome found so far.
    pub fn best_solution(&self) -> &T {
        &self.best.genome
    }

    /// Fitness of [`best_solution`](Self::best_solution).
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness
    }

    /// The best genome together with its fitness.
    pub fn best_individual(&self) -> &Individual<T> {
        &self.best
    }

    /// The current population.
    pub fn population(&self) -> &[T] {
        &self.population
    }

    /// Fitness of each member of [`population`](Self::population).
    pub fn fitnesses(&self) -> &[f64] {
        &self.fitnesses
    }

    /// Number of generations completed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best fitness after initialization and after each generation.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

/// Evaluates every genome, in parallel when requested.
pub(crate) fn evaluate_all<T: Sync>(
    evaluation: &dyn Evaluation<T>,
    genomes: &[T],
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        genomes.par_iter().map(|g| evaluation.evaluate(g)).collect()
    } else {
        genomes.iter().map(|g| evaluation.evaluate(g)).collect()
    }
}

/// Index of the highest fitness. Ties go to the earliest index.
fn best_index(fitnesses: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &f) in fitnesses.iter().enumerate() {
        match best {
            Some(b) if f <= fitnesses[b] || f.is_nan() => {}
            _ => best = Some(i),
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
