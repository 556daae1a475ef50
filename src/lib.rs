//! Domain-agnostic metaheuristic optimization engines.
//!
//! Provides generic implementations of four search strategies over a
//! caller-defined solution type:
//!
//! - **Local Search**: first-improvement hill climbing with random
//!   restarts, cost-function tie-breaking, dynamic neighborhoods and an
//!   early stop on a fitness limit.
//! - **Genetic Algorithm (GA)**: population-based evolution built from
//!   replaceable operators (initialization, evaluation, selection,
//!   crossover, mutation, replacement, elitism, termination).
//! - **Memetic Algorithm**: a GA whose offspring may be refined by local
//!   search.
//! - **Parallel Local Search**: independent local searches over a batch of
//!   starting solutions, with results in input order.
//!
//! # Architecture
//!
//! Solutions and genomes are opaque: engines only clone them and hand them
//! to caller-supplied functions. Configuration errors are reported as
//! [`ConfigError`] before any search step runs. Progress is reported through
//! [`tracing`] spans and events; the crate installs no subscriber.

pub mod error;
pub mod ga;
pub mod local_search;
pub mod memetic;
pub mod parallel;
pub mod random;

pub use error::ConfigError;
