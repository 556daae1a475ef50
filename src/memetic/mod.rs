//! Memetic Algorithm.
//!
//! A Genetic Algorithm in which each offspring may be refined by an
//! embedded [`LocalSearch`](crate::local_search::LocalSearch) before it is
//! evaluated. The refined genome replaces the original (Lamarckian
//! learning). The variation order is fixed: crossover, then mutation, then
//! local search.
//!
//! Operators are shared with the [`ga`](crate::ga) module; selection,
//! replacement and termination act on [`Individual`](crate::ga::Individual)s.
//!
//! # Key Types
//!
//! - [`MemeticConfig`]: population size, generations, per-offspring rates
//! - [`MemeticAlgorithm`]: runs generations and tracks the best individual
//!
//! # References
//!
//! - Moscato (1989), "On Evolution, Search, Optimization, Genetic Algorithms
//!   and Martial Arts: Towards Memetic Algorithms"
//! - Neri, Cotta & Moscato (2012), *Handbook of Memetic Algorithms*

mod config;
mod runner;

pub use config::MemeticConfig;
pub use runner::{MemeticAlgorithm, MemeticAlgorithmBuilder};
