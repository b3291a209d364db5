//! Heuristics for choosing which unassigned variable to branch on next.

use crate::solver::{
    domain::Domains,
    problem::Csp,
    value::{ValueEquality, VariableKey},
};

/// A strategy for choosing the next variable to branch on.
///
/// Implementations must return `None` exactly when `unassigned` is empty;
/// the engine checks for completion before calling.
pub trait VariableSelectionHeuristic<K: VariableKey, V: ValueEquality> {
    fn select_variable(&self, csp: &Csp<K, V>, unassigned: &Domains<K, V>) -> Option<K>;
}

/// Selects the first unassigned variable in declaration order.
pub struct SelectFirstHeuristic;

impl<K: VariableKey, V: ValueEquality> VariableSelectionHeuristic<K, V> for SelectFirstHeuristic {
    fn select_variable(&self, csp: &Csp<K, V>, unassigned: &Domains<K, V>) -> Option<K> {
        csp.variables()
            .iter()
            .find(|key| unassigned.contains_key(*key))
            .cloned()
    }
}

/// Selects the unassigned variable with the fewest remaining values (MRV).
///
/// A "fail-first" strategy: branching on the most constrained variable
/// surfaces dead ends early. Ties go to the variable declared first, so the
/// choice is deterministic for a fixed problem.
pub struct MinimumRemainingValuesHeuristic;

impl<K: VariableKey, V: ValueEquality> VariableSelectionHeuristic<K, V>
    for MinimumRemainingValuesHeuristic
{
    fn select_variable(&self, csp: &Csp<K, V>, unassigned: &Domains<K, V>) -> Option<K> {
        let mut best: Option<(&K, usize)> = None;
        for key in csp.variables() {
            let Some(domain) = unassigned.get(key) else {
                continue;
            };
            match best {
                Some((_, smallest)) if domain.len() >= smallest => {}
                _ => best = Some((key, domain.len())),
            }
        }
        best.map(|(key, _)| key.clone())
    }
}

/// Selects an unassigned variable uniformly at random. Useful for
/// experiments where deterministic ordering would bias measurements.
pub struct RandomVariableHeuristic;

impl<K: VariableKey, V: ValueEquality> VariableSelectionHeuristic<K, V>
    for RandomVariableHeuristic
{
    fn select_variable(&self, csp: &Csp<K, V>, unassigned: &Domains<K, V>) -> Option<K> {
        use rand::seq::IteratorRandom;

        csp.variables()
            .iter()
            .filter(|key| unassigned.contains_key(*key))
            .choose(&mut rand::thread_rng())
            .cloned()
    }
}
