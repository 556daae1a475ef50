//! Core data types and default-operator resolution for the GA framework.
//!
//! Genomes are opaque to the engine. Defaults for crossover and mutation
//! exist only where they are well defined, and are resolved once when an
//! engine is built through [`GenomeDefaults`].

use super::operators::{BitFlipMutation, Crossover, Mutation, SinglePointCrossover};
use crate::error::ConfigError;

/// A genome paired with its fitness.
///
/// Higher fitness is better. For minimization problems, negate the
/// objective.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<T> {
    /// The solution representation.
    pub genome: T,
    /// Fitness of `genome`, fixed once the individual is built.
    pub fitness: f64,
}

impl<T> Individual<T> {
    /// Creates an individual from an evaluated genome.
    pub fn new(genome: T, fitness: f64) -> Self {
        Self { genome, fitness }
    }
}

/// Snapshot handed to [`Termination`](super::Termination) operators.
#[derive(Debug)]
pub struct GenerationState<'a, I> {
    /// Generation index, starting at 0.
    ///
    /// The GA checks before each generation, so this is the index of the
    /// generation about to run. The memetic engine checks after each
    /// generation, so this is the index of the one just finished.
    pub generation: usize,
    /// Best fitness seen so far.
    pub best_fitness: f64,
    /// Current population.
    pub population: &'a [I],
}

/// Gene types usable inside `Vec` genomes with default operators.
///
/// Every gene type gets single-point crossover. Only genes that declare a
/// default mutation get one; for the rest, a mutation operator must be
/// supplied.
pub trait Gene: Clone + Send + Sync + 'static {
    /// The default mutation for `Vec<Self>` genomes, if any.
    fn default_mutation(_rate: f64) -> Option<Box<dyn Mutation<Vec<Self>>>> {
        None
    }
}

/// Genes with exactly two states, flipped by [`BitFlipMutation`].
pub trait BinaryGene: Gene {
    /// Returns the opposite state.
    fn flipped(&self) -> Self;
}

impl Gene for bool {
    fn default_mutation(rate: f64) -> Option<Box<dyn Mutation<Vec<Self>>>> {
        Some(Box::new(BitFlipMutation::new(rate)))
    }
}

impl BinaryGene for bool {
    fn flipped(&self) -> Self {
        !*self
    }
}

macro_rules! binary_integer_gene {
    ($($t:ty),*) => {$(
        impl Gene for $t {
            fn default_mutation(rate: f64) -> Option<Box<dyn Mutation<Vec<Self>>>> {
                Some(Box::new(BitFlipMutation::new(rate)))
            }
        }

        /// `0` flips to `1`; any other value flips to `0`.
        impl BinaryGene for $t {
            fn flipped(&self) -> Self {
                if *self == 0 { 1 } else { 0 }
            }
        }
    )*};
}

binary_integer_gene!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Gene for f32 {}
impl Gene for f64 {}

/// Resolves default crossover and mutation operators for a genome type.
///
/// Array genomes (`Vec<G>` with `G: Gene`) get single-point crossover and,
/// for binary genes, bit-flip mutation. Opaque genome types implement this
/// trait with no body; building an engine without explicit operators then
/// fails with [`ConfigError::MissingOperator`].
///
/// ```
/// use u_climb::ga::GenomeDefaults;
///
/// #[derive(Clone)]
/// struct Schedule(Vec<(usize, usize)>);
///
/// impl GenomeDefaults for Schedule {}
///
/// assert!(Schedule::default_crossover().is_err());
/// assert!(Vec::<bool>::default_crossover().is_ok());
/// assert!(Vec::<f64>::default_mutation(1.0).is_err());
/// ```
pub trait GenomeDefaults: Sized + 'static {
    /// The crossover used when none is supplied.
    fn default_crossover() -> Result<Box<dyn Crossover<Self>>, ConfigError> {
        Err(ConfigError::MissingOperator {
            operator: "crossover",
        })
    }

    /// The mutation used when none is supplied. `rate` is the expected
    /// number of changed genes per genome.
    fn default_mutation(_rate: f64) -> Result<Box<dyn Mutation<Self>>, ConfigError> {
        Err(ConfigError::MissingOperator {
            operator: "mutation",
        })
    }
}

impl<G: Gene> GenomeDefaults for Vec<G> {
    fn default_crossover() -> Result<Box<dyn Crossover<Self>>, ConfigError> {
        Ok(Box::new(SinglePointCrossover))
    }

    fn default_mutation(rate: f64) -> Result<Box<dyn Mutation<Self>>, ConfigError> {
        G::default_mutation(rate).ok_or(ConfigError::MissingOperator {
            operator: "mutation",
        })
    }
}
