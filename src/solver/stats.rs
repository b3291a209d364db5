use std::collections::HashMap;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::{
    constraint::{ArcId, ConstraintArc},
    value::{ValueEquality, VariableKey},
};

/// Counters accumulated over one `solve` call.
///
/// The step counter is part of the engine contract: it increments once per
/// candidate-value attempt across the whole search and paces the optional
/// step trace. The remaining counters are diagnostics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Candidate-value attempts, across all recursion levels.
    pub steps: u64,
    /// Attempts abandoned because a domain emptied or the subtree failed.
    pub backtracks: u64,
    /// Arc revisions performed, including value-ordering lookahead.
    pub revisions: u64,
    /// Revisions that removed at least one value.
    pub prunings: u64,
    pub arc_stats: HashMap<ArcId, PerArcStats>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PerArcStats {
    pub revisions: u64,
    pub prunings: u64,
    pub time_spent_micros: u64,
}

/// Renders a per-arc summary table, slowest arcs last.
pub fn render_stats_table<K: VariableKey, V: ValueEquality>(
    stats: &SearchStats,
    arcs: &[ConstraintArc<K, V>],
) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Predicate"),
        Cell::new("Arc"),
        Cell::new("Head"),
        Cell::new("Tail"),
        Cell::new("Revise Calls"),
        Cell::new("Prunings"),
        Cell::new("Time / Call (us)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ArcId, &PerArcStats)> = stats.arc_stats.iter().collect();
    sorted_stats.sort_by_key(|(arc_id, arc_stats)| (arc_stats.time_spent_micros, **arc_id));

    for (arc_id, arc_stats) in sorted_stats {
        let arc = &arcs[*arc_id];
        let avg_time = if arc_stats.revisions > 0 {
            arc_stats.time_spent_micros as f64 / arc_stats.revisions as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&arc.descriptor().name),
            Cell::new(&arc_id.to_string()),
            Cell::new(&format!("{:?}", arc.head())),
            Cell::new(&format!("{:?}", arc.tail())),
            Cell::new(&arc_stats.revisions.to_string()),
            Cell::new(&arc_stats.prunings.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                arc_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{constraints::not_equal::NotEqual, engine::SolverEngine, problem::Csp};

    #[test]
    fn renders_a_row_per_revised_arc() {
        let csp = Csp::builder()
            .variable("a", [1, 2])
            .variable("b", [1, 2])
            .symmetric("a", "b", NotEqual)
            .build();

        let (_, stats) = SolverEngine::default().solve(&csp).unwrap();
        let table = render_stats_table(&stats, csp.constraints());

        assert!(table.contains("not_equal"));
        assert!(table.contains("Revise Calls"));
        assert!(stats.revisions > 0);
    }
}
