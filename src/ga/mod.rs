//! Genetic Algorithm framework.
//!
//! A generic, domain-agnostic GA built as a pipeline of replaceable
//! operators. The genome type is opaque to the engine: callers supply how to
//! create and score genomes, and either supply the variation operators or
//! rely on the defaults for `Vec` genomes.
//!
//! # Operator Traits
//!
//! - [`Initialization`], [`Evaluation`]: required
//! - [`Selection`], [`Crossover`], [`Mutation`], [`Replacement`],
//!   [`Elitism`], [`Termination`]: optional, with defaults
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation budget, elitism, rates
//! - [`GeneticAlgorithm`]: owns the population and runs generations
//! - [`GenomeDefaults`]: resolves default crossover and mutation per genome type
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod operators;
mod replacement;
mod runner;
mod selection;
mod termination;
mod types;

pub use config::GaConfig;
pub use operators::{
    BitFlipMutation, Crossover, Elitism, Evaluation, Initialization, Mutation, Replacement,
    Selection, SinglePointCrossover, Termination,
};
pub use replacement::GenerationalReplacement;
pub(crate) use runner::evaluate_all;
pub use runner::{GeneticAlgorithm, GeneticAlgorithmBuilder};
pub use selection::{BestElitism, TournamentSelection};
pub use termination::GenerationLimit;
pub use types::{BinaryGene, Gene, GenerationState, GenomeDefaults, Individual};
