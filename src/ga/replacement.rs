//! Default replacement.

use super::operators::Replacement;

/// Generational replacement: offspring become the next population.
///
/// Surplus offspring are dropped; a short offspring list is padded with
/// individuals from the old population, in order, so the size stays
/// constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationalReplacement;

impl<I> Replacement<I> for GenerationalReplacement {
    fn replace(&self, old: Vec<I>, mut offspring: Vec<I>, _fitnesses: &[f64]) -> Vec<I> {
        let target = old.len();
        offspring.truncate(target);
        if offspring.len() < target {
            let missing = target - offspring.len();
            offspring.extend(old.into_iter().take(missing));
        }
        offspring
    }
}
