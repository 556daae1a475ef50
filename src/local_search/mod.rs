//! Local Search (hill climbing).
//!
//! A single-solution method that repeatedly moves to a better neighbor until
//! none is acceptable. Acceptance is **first-improvement**: neighbors are
//! scanned in the order the neighborhood function returns them and the first
//! acceptable one is taken, so neighbor order affects the outcome.
//!
//! # Features
//!
//! - Random restarts with an optional restart initializer
//! - Secondary cost function to break exact objective ties
//! - Dynamic neighborhoods that may change shape with the iteration index;
//!   they disable local-optimum termination
//! - Early stop on a fitness limit
//! - Fire-and-forget climb hook
//!
//! # Key Types
//!
//! - [`LocalSearchConfig`]: options and callbacks
//! - [`LocalSearch`]: runs the search
//! - [`LocalSearchResult`]: best solution, fitness and iteration count
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, §4.1
//! - Hoos & Stützle (2004), *Stochastic Local Search: Foundations and Applications*

mod config;
mod runner;
mod types;

pub use config::LocalSearchConfig;
pub use runner::LocalSearch;
pub(crate) use runner::{check_neighborhood, search_unchecked};
pub use types::{
    ClimbHook, CostFn, DynamicNeighborhoodFn, InitializerFn, LocalSearchResult,
    NeighborhoodFn, ObjectiveFn, SearchState,
};
