//! Configuration errors shared by all engines.
//!
//! Every variant is raised before the first search iteration runs. Failures
//! inside caller-supplied functions are not represented here: they unwind to
//! the caller untouched.

/// A fatal problem with how an engine was configured.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The initialization operator produced no individuals.
    #[error("initialization produced an empty population")]
    EmptyPopulation,

    /// No operator was supplied and the genome type has no default for it.
    #[error("no default {operator} operator exists for this genome type; supply one explicitly")]
    MissingOperator {
        /// Name of the missing capability (`"crossover"`, `"mutation"`).
        operator: &'static str,
    },

    /// Local search was asked to run without any neighborhood source.
    #[error("local search needs a neighborhood function or a dynamic neighborhood function")]
    MissingNeighborhood,

    /// A numeric parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the config struct.
        name: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
