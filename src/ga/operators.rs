//! Operator capabilities for the GA pipeline.
//!
//! Each stage of a generation is a trait of its own, so every stage can be
//! replaced independently. Operators receive the engine's random generator
//! as `&mut dyn RngCore`; all of [`rand::Rng`] is available on it.
//!
//! Closures implement the stateless capabilities directly:
//!
//! | Capability           | Closure shape                                  |
//! |----------------------|------------------------------------------------|
//! | [`Initialization`]   | `Fn(&mut dyn RngCore) -> T` (one individual)   |
//! | [`Evaluation`]       | `Fn(&T) -> f64`                                |
//! | [`Crossover`]        | `Fn(&T, &T, &mut dyn RngCore) -> (T, T)`       |
//! | [`Mutation`]         | `Fn(&mut T, &mut dyn RngCore)`                 |
//! | [`Termination`]      | `Fn(&GenerationState<'_, I>) -> bool`          |
//!
//! # Default Operators
//!
//! - [`SinglePointCrossover`]: any `Vec` genome
//! - [`BitFlipMutation`]: `Vec` genomes of binary genes
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*, ch. 3
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, ch. 4

use super::types::{BinaryGene, GenerationState};
use rand::{Rng, RngCore};

/// Creates the initial population.
pub trait Initialization<T>: Send + Sync {
    /// Returns `population_size` genomes. Returning fewer is allowed but an
    /// empty population is rejected when the engine is built.
    fn initialize(&self, population_size: usize, rng: &mut dyn RngCore) -> Vec<T>;
}

/// Scores a genome. Higher is better.
pub trait Evaluation<T>: Send + Sync {
    /// Returns the fitness of `genome`.
    fn evaluate(&self, genome: &T) -> f64;
}

/// Chooses parents.
pub trait Selection<I>: Send + Sync {
    /// Returns `count` indices into `population`. Indices may repeat.
    ///
    /// `fitnesses[i]` is the fitness of `population[i]`.
    fn select(
        &self,
        population: &[I],
        fitnesses: &[f64],
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<usize>;
}

/// Recombines two parents into two children.
pub trait Crossover<T>: Send + Sync {
    /// Returns two children built from `parent1` and `parent2`.
    fn crossover(&self, parent1: &T, parent2: &T, rng: &mut dyn RngCore) -> (T, T);
}

/// Perturbs a genome in place.
pub trait Mutation<T>: Send + Sync {
    /// Mutates `genome`.
    fn mutate(&self, genome: &mut T, rng: &mut dyn RngCore);
}

/// Builds the next population from the current one and its offspring.
pub trait Replacement<I>: Send + Sync {
    /// Returns the next population.
    ///
    /// The GA passes the fitnesses of `old`, since its offspring are not
    /// evaluated yet. The memetic engine passes the fitnesses of
    /// `offspring`, which it evaluates before replacement.
    fn replace(&self, old: Vec<I>, offspring: Vec<I>, fitnesses: &[f64]) -> Vec<I>;
}

/// Picks individuals that survive unchanged into the next generation.
pub trait Elitism<I>: Send + Sync {
    /// Returns the indices of up to `count` elites in `population`.
    fn elites(&self, population: &[I], fitnesses: &[f64], count: usize) -> Vec<usize>;
}

/// Decides when evolution stops.
pub trait Termination<I>: Send + Sync {
    /// Returns `true` to stop before the next generation runs.
    fn should_terminate(&self, state: &GenerationState<'_, I>) -> bool;
}

impl<T, F> Initialization<T> for F
where
    F: Fn(&mut dyn RngCore) -> T + Send + Sync,
{
    fn initialize(&self, population_size: usize, rng: &mut dyn RngCore) -> Vec<T> {
        (0..population_size).map(|_| self(&mut *rng)).collect()
    }
}

impl<T, F> Evaluation<T> for F
where
    F: Fn(&T) -> f64 + Send + Sync,
{
    fn evaluate(&self, genome: &T) -> f64 {
        self(genome)
    }
}

impl<T, F> Crossover<T> for F
where
    F: Fn(&T, &T, &mut dyn RngCore) -> (T, T) + Send + Sync,
{
    fn crossover(&self, parent1: &T, parent2: &T, rng: &mut dyn RngCore) -> (T, T) {
        self(parent1, parent2, rng)
    }
}

impl<T, F> Mutation<T> for F
where
    F: Fn(&mut T, &mut dyn RngCore) + Send + Sync,
{
    fn mutate(&self, genome: &mut T, rng: &mut dyn RngCore) {
        self(genome, rng)
    }
}

impl<I, F> Termination<I> for F
where
    F: Fn(&GenerationState<'_, I>) -> bool + Send + Sync,
{
    fn should_terminate(&self, state: &GenerationState<'_, I>) -> bool {
        self(state)
    }
}

// ============================================================================
// Default crossover / mutation
// ============================================================================

/// Single-point crossover for `Vec` genomes.
///
/// Draws a cut `c` uniformly from `[0, len)` and swaps the tails:
/// `child1 = p1[..c] ++ p2[c..]`, `child2 = p2[..c] ++ p1[c..]`. With parents
/// of unequal length the cut is drawn over the shorter one.
///
/// # Complexity
/// O(n)
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePointCrossover;

impl<G: Clone + Send + Sync> Crossover<Vec<G>> for SinglePointCrossover {
    fn crossover(
        &self,
        parent1: &Vec<G>,
        parent2: &Vec<G>,
        rng: &mut dyn RngCore,
    ) -> (Vec<G>, Vec<G>) {
        let len = parent1.len().min(parent2.len());
        if len == 0 {
            return (parent1.clone(), parent2.clone());
        }
        let cut = rng.random_range(0..len);

        let mut child1 = Vec::with_capacity(parent2.len());
        child1.extend_from_slice(&parent1[..cut]);
        child1.extend_from_slice(&parent2[cut..]);

        let mut child2 = Vec::with_capacity(parent1.len());
        child2.extend_from_slice(&parent2[..cut]);
        child2.extend_from_slice(&parent1[cut..]);

        (child1, child2)
    }
}

/// Bit-flip mutation for binary genes.
///
/// Each gene flips independently with probability `rate / len`, so `rate`
/// is the expected number of flips per genome.
///
/// ```
/// use u_climb::ga::{BitFlipMutation, Mutation};
/// use u_climb::random::create_rng;
///
/// let mut rng = create_rng(1);
/// let mut genome = vec![false; 8];
/// BitFlipMutation::new(8.0).mutate(&mut genome, &mut rng);
/// assert!(genome.iter().all(|&b| b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFlipMutation {
    /// Expected number of flipped genes per genome.
    pub rate: f64,
}

impl BitFlipMutation {
    /// Creates a bit-flip mutation with the given expected flip count.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl<G: BinaryGene> Mutation<Vec<G>> for BitFlipMutation {
    fn mutate(&self, genome: &mut Vec<G>, rng: &mut dyn RngCore) {
        if genome.is_empty() {
            return;
        }
        let p = (self.rate / genome.len() as f64).clamp(0.0, 1.0);
        for gene in genome.iter_mut() {
            if rng.random_bool(p) {
                *gene = gene.flipped();
            }
        }
    }
}
