//! Heuristics for ordering the candidate values of the branch variable.

use crate::solver::{
    domain::{value_count, Domain, Domains},
    problem::Csp,
    propagation::enforce_arc_consistency,
    stats::SearchStats,
    value::{ValueEquality, VariableKey},
};

/// A strategy for ordering the values to try for the branch variable.
///
/// The result must be a permutation of the variable's current domain:
/// ordering never adds or drops candidates.
pub trait ValueOrderingHeuristic<K: VariableKey, V: ValueEquality> {
    fn order_values(
        &self,
        branch_var: &K,
        assigned: &Domains<K, V>,
        unassigned: &Domains<K, V>,
        csp: &Csp<K, V>,
        stats: &mut SearchStats,
    ) -> Vec<V>;
}

/// Returns values in their domain order.
pub struct IdentityValueHeuristic;

impl<K: VariableKey, V: ValueEquality> ValueOrderingHeuristic<K, V> for IdentityValueHeuristic {
    fn order_values(
        &self,
        branch_var: &K,
        _assigned: &Domains<K, V>,
        unassigned: &Domains<K, V>,
        _csp: &Csp<K, V>,
        _stats: &mut SearchStats,
    ) -> Vec<V> {
        unassigned
            .get(branch_var)
            .map(|domain| domain.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Least-constraining-value ordering via trial propagation.
///
/// Each candidate is tentatively bound, the whole problem is propagated to
/// its fixpoint, and the candidates are sorted by how many values survive
/// everywhere, most first. One full propagation pass per candidate is the
/// accepted price for a better-shaped search tree; the lookahead leaves no
/// assignment behind. The sort is stable, so equally-constraining values
/// keep their domain order.
pub struct LeastConstrainingValueHeuristic;

impl<K: VariableKey, V: ValueEquality> ValueOrderingHeuristic<K, V>
    for LeastConstrainingValueHeuristic
{
    fn order_values(
        &self,
        branch_var: &K,
        assigned: &Domains<K, V>,
        unassigned: &Domains<K, V>,
        csp: &Csp<K, V>,
        stats: &mut SearchStats,
    ) -> Vec<V> {
        let Some(domain) = unassigned.get(branch_var) else {
            return Vec::new();
        };

        let mut scored: Vec<(V, usize)> = Vec::with_capacity(domain.len());
        for value in domain.iter() {
            let trial = assigned
                .update(branch_var.clone(), Domain::singleton(value.clone()))
                .union(unassigned.clone());
            let consistent = enforce_arc_consistency(csp.constraints(), &trial, stats);
            scored.push((value.clone(), value_count(&consistent)));
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(value, _)| value).collect()
    }
}
