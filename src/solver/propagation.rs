use std::collections::HashMap;
use std::time::Instant;

use tracing::debug;

use crate::solver::{
    constraint::ConstraintArc,
    domain::Domains,
    stats::SearchStats,
    value::{ValueEquality, VariableKey},
    work_list::WorkList,
};

/// Prunes the given domains to arc consistency (AC-3) and returns the result.
///
/// Every arc starts on the work list. Revising an arc `(head, tail)` keeps in
/// the tail's domain only values supported by at least one head value; when a
/// tail shrinks, every arc whose head is that tail goes back on the list.
/// The loop runs to a fixpoint even if a domain empties along the way — an
/// empty domain fails the caller's checks, and finishing the pass keeps the
/// value-ordering lookahead counts stable.
///
/// The input map is never mutated. The result's domains are subsets of the
/// input's, and re-running on the result changes nothing.
pub fn enforce_arc_consistency<K: VariableKey, V: ValueEquality>(
    arcs: &[ConstraintArc<K, V>],
    domains: &Domains<K, V>,
    stats: &mut SearchStats,
) -> Domains<K, V> {
    let mut domains = domains.clone();

    // Arcs indexed by head key: the ones to recheck when that key's domain
    // shrinks.
    let mut outgoing: HashMap<&K, Vec<usize>> = HashMap::new();
    for (arc_id, arc) in arcs.iter().enumerate() {
        outgoing.entry(arc.head()).or_default().push(arc_id);
    }

    let mut worklist = WorkList::new();
    for arc_id in 0..arcs.len() {
        worklist.push_back(arc_id);
    }

    while let Some(arc_id) = worklist.pop_front() {
        let arc = &arcs[arc_id];
        let started = Instant::now();

        let revised = {
            let Some(head_domain) = domains.get(arc.head()) else {
                continue;
            };
            let Some(tail_domain) = domains.get(arc.tail()) else {
                continue;
            };
            let revised =
                tail_domain.retain(|tv| head_domain.iter().any(|hv| arc.consistent(hv, tv)));
            (revised.len() < tail_domain.len()).then_some(revised)
        };

        stats.revisions += 1;
        let arc_stats = stats.arc_stats.entry(arc_id).or_default();
        arc_stats.revisions += 1;
        arc_stats.time_spent_micros += started.elapsed().as_micros() as u64;

        if let Some(revised) = revised {
            stats.prunings += 1;
            stats.arc_stats.entry(arc_id).or_default().prunings += 1;

            let tail = arc.tail().clone();
            domains.insert(tail.clone(), revised);
            if let Some(dependents) = outgoing.get(&tail) {
                for &dependent in dependents {
                    worklist.push_back(dependent);
                }
            }
        }
    }

    debug!("arc consistency fixpoint reached");
    domains
}
