use tracing::debug;

use crate::{
    error::Result,
    solver::{
        domain::{any_empty, Domain, Domains},
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        },
        problem::Csp,
        propagation::enforce_arc_consistency,
        stats::SearchStats,
        value::{ValueEquality, VariableKey},
    },
};

/// A complete solution: every variable mapped to its single chosen value.
pub type Assignment<K, V> = im::HashMap<K, V>;

/// Backtracking search over a constraint satisfaction problem.
///
/// The engine walks a tree of `(assigned, unassigned)` states: it picks an
/// unassigned variable, tries its values in heuristic order, propagates arc
/// consistency after each tentative assignment, and recurses on the pruned
/// problem. A branch whose propagation empties any domain is abandoned and
/// the next value tried (chronological backtracking); when a node runs out
/// of values it reports failure to its parent.
///
/// Every branch works on its own copy of the domain maps, so sibling
/// attempts never observe each other's pruning. Domains only ever shrink
/// within a branch.
pub struct SolverEngine<K: VariableKey, V: ValueEquality> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<K, V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<K, V>>,
}

impl<K: VariableKey, V: ValueEquality> SolverEngine<K, V> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<K, V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<K, V>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Attempts to solve the problem.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(assignment), stats))` — a complete assignment satisfying
    ///   every constraint arc. The first one found wins; no ranking among
    ///   solutions is attempted.
    /// * `Ok((None, stats))` — the search tree is exhausted; the problem is
    ///   unsatisfiable. This is a normal outcome, not an error.
    /// * `Err(error)` — the problem definition violates the caller contract
    ///   (see [`Csp::validate`]).
    pub fn solve(&self, csp: &Csp<K, V>) -> Result<(Option<Assignment<K, V>>, SearchStats)> {
        csp.validate()?;

        let mut stats = SearchStats::default();
        let assigned = Domains::new();
        let unassigned = csp.domains().clone();
        let solved = self.backtrack(csp, assigned, unassigned, &mut stats);

        // Collapse the singleton domains of a terminal state into bare values.
        let assignment = solved.map(|domains| {
            domains
                .iter()
                .filter_map(|(key, domain)| {
                    domain.singleton_value().map(|value| (key.clone(), value))
                })
                .collect()
        });

        Ok((assignment, stats))
    }

    fn backtrack(
        &self,
        csp: &Csp<K, V>,
        assigned: Domains<K, V>,
        unassigned: Domains<K, V>,
        stats: &mut SearchStats,
    ) -> Option<Domains<K, V>> {
        if unassigned.is_empty() {
            return Some(assigned);
        }

        let Some(branch_var) = self.variable_heuristic.select_variable(csp, &unassigned) else {
            // The heuristic contract says this only happens with nothing left
            // to assign, which was handled above. Treat it as a dead end
            // rather than inventing a partial solution.
            return None;
        };

        let values =
            self.value_heuristic
                .order_values(&branch_var, &assigned, &unassigned, csp, stats);
        debug!(variable = ?branch_var, candidates = values.len(), "branching");

        let rest = unassigned.without(&branch_var);

        for value in values {
            stats.steps += 1;

            let guess = assigned.update(branch_var.clone(), Domain::singleton(value));
            let working = guess.clone().union(rest.clone());
            let consistent = enforce_arc_consistency(csp.constraints(), &working, stats);

            // Split the propagated result back into the two working sets.
            let mut new_assigned = Domains::new();
            let mut new_unassigned = Domains::new();
            for (key, domain) in consistent {
                if guess.contains_key(&key) {
                    new_assigned.insert(key, domain);
                } else {
                    new_unassigned.insert(key, domain);
                }
            }

            csp.record_step(stats.steps, &new_assigned, &new_unassigned);

            if any_empty(&new_assigned) || any_empty(&new_unassigned) {
                stats.backtracks += 1;
                continue;
            }

            if let Some(found) = self.backtrack(csp, new_assigned, new_unassigned, stats) {
                return Some(found);
            }
            stats.backtracks += 1;
        }

        None
    }
}

/// Minimum-remaining-values selection with least-constraining-value ordering.
impl<K: VariableKey, V: ValueEquality> Default for SolverEngine<K, V> {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{
        constraints::not_equal::NotEqual,
        heuristics::{value::IdentityValueHeuristic, variable::RandomVariableHeuristic},
        trace::StepSink,
    };

    fn triangle(colours: std::ops::RangeInclusive<i64>) -> Csp<&'static str, i64> {
        Csp::builder()
            .variable("a", colours.clone())
            .variable("b", colours.clone())
            .variable("c", colours)
            .symmetric("a", "b", NotEqual)
            .symmetric("b", "c", NotEqual)
            .symmetric("a", "c", NotEqual)
            .build()
    }

    #[test]
    fn unconstrained_variable_takes_its_first_domain_value() {
        let _ = tracing_subscriber::fmt::try_init();

        let csp: Csp<&str, i64> = Csp::builder().variable("x", [1, 2, 3]).build();
        let (solution, stats) = SolverEngine::default().solve(&csp).unwrap();

        let solution = solution.unwrap();
        assert_eq!(solution["x"], 1);
        assert_eq!(stats.steps, 1);
    }

    #[test]
    fn three_colours_suffice_for_a_triangle() {
        let csp = triangle(1..=3);
        let (solution, _) = SolverEngine::default().solve(&csp).unwrap();

        let solution = solution.unwrap();
        assert_ne!(solution["a"], solution["b"]);
        assert_ne!(solution["b"], solution["c"]);
        assert_ne!(solution["a"], solution["c"]);
    }

    #[test]
    fn two_colours_cannot_colour_a_triangle() {
        let csp = triangle(1..=2);
        let (solution, stats) = SolverEngine::default().solve(&csp).unwrap();

        assert!(solution.is_none());
        // Exhaustion, not a lucky early exit: every branch was tried.
        assert!(stats.backtracks >= 2);
    }

    #[test]
    fn solving_an_empty_problem_yields_an_empty_assignment() {
        let csp: Csp<&str, i64> = Csp::builder().build();
        let (solution, stats) = SolverEngine::default().solve(&csp).unwrap();

        assert_eq!(solution.unwrap().len(), 0);
        assert_eq!(stats.steps, 0);
    }

    #[test]
    fn a_variable_with_an_empty_domain_is_unsatisfiable() {
        let csp: Csp<&str, i64> = Csp::builder().variable("x", []).build();
        let (solution, _) = SolverEngine::default().solve(&csp).unwrap();
        assert!(solution.is_none());
    }

    #[test]
    fn malformed_problems_are_rejected_before_searching() {
        let csp: Csp<&str, i64> = Csp::builder()
            .variable("a", [1, 2])
            .symmetric("a", "ghost", NotEqual)
            .build();
        assert!(SolverEngine::default().solve(&csp).is_err());

        let csp: Csp<&str, i64> = Csp::builder().variable("a", [1, 1]).build();
        assert!(SolverEngine::default().solve(&csp).is_err());
    }

    #[test]
    fn every_candidate_attempt_is_traced_in_order() {
        let (sink, steps) = StepSink::channel();
        let csp = triangle(1..=2).with_time_step(10).with_trace(sink);

        let (solution, stats) = SolverEngine::default().solve(&csp).unwrap();
        assert!(solution.is_none());
        drop(csp);

        let snapshots: Vec<_> = steps.iter().collect();
        assert_eq!(snapshots.len() as u64, stats.steps);
        for (i, snapshot) in snapshots.iter().enumerate() {
            assert_eq!(snapshot.step, i as u64 + 1);
            assert_eq!(snapshot.at, snapshot.step * 10);
        }
    }

    #[test]
    fn random_selection_still_finds_a_sound_colouring() {
        for _ in 0..10 {
            let csp = triangle(1..=3);
            let engine: SolverEngine<&str, i64> = SolverEngine::new(
                Box::new(RandomVariableHeuristic),
                Box::new(IdentityValueHeuristic),
            );
            let (solution, _) = engine.solve(&csp).unwrap();
            let solution = solution.unwrap();
            assert_ne!(solution["a"], solution["b"]);
            assert_ne!(solution["b"], solution["c"]);
            assert_ne!(solution["a"], solution["c"]);
        }
    }
}
