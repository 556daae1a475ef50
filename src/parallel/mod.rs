//! Parallel Local Search.
//!
//! Runs one independent [`LocalSearch`](crate::local_search::LocalSearch)
//! per initial solution on rayon's thread pool. The searches share the
//! read-only objective, neighborhood and config, own all of their mutable
//! state, and never communicate. `results[i]` always belongs to
//! `initial_solutions[i]`, whatever order the searches finish in.

mod runner;

pub use runner::ParallelLocalSearch;
