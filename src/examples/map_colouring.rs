//! Map colouring encoded as a binary CSP: one variable per region, a shared
//! colour domain, and a symmetric inequality arc per adjacent pair.

use serde::Serialize;

use crate::solver::{constraints::not_equal::NotEqual, problem::Csp};

pub type Region = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Builds a colouring problem from a region list and its adjacency pairs.
pub fn colouring(
    regions: &[Region],
    adjacencies: &[(Region, Region)],
    colours: &[Colour],
) -> Csp<Region, Colour> {
    let mut builder = Csp::builder();
    for &region in regions {
        builder = builder.variable(region, colours.iter().copied());
    }
    for &(a, b) in adjacencies {
        builder = builder.symmetric(a, b, NotEqual);
    }
    builder.build()
}

/// The mainland-Australia textbook instance (Tasmania included, adjacent to
/// nothing).
pub fn australia(colours: &[Colour]) -> Csp<Region, Colour> {
    colouring(
        &["wa", "nt", "sa", "q", "nsw", "v", "t"],
        &[
            ("wa", "nt"),
            ("wa", "sa"),
            ("nt", "sa"),
            ("nt", "q"),
            ("sa", "q"),
            ("sa", "nsw"),
            ("sa", "v"),
            ("q", "nsw"),
            ("nsw", "v"),
        ],
        colours,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::engine::{Assignment, SolverEngine};

    const TRIANGLE_REGIONS: [Region; 3] = ["x", "y", "z"];
    const TRIANGLE_EDGES: [(Region, Region); 3] = [("x", "y"), ("y", "z"), ("x", "z")];

    fn assert_proper(solution: &Assignment<Region, Colour>, adjacencies: &[(Region, Region)]) {
        for (a, b) in adjacencies {
            assert_ne!(solution[a], solution[b], "{a} and {b} share a colour");
        }
    }

    #[test]
    fn two_colours_cannot_colour_a_triangle() {
        let _ = tracing_subscriber::fmt::try_init();

        let csp = colouring(
            &TRIANGLE_REGIONS,
            &TRIANGLE_EDGES,
            &[Colour::Red, Colour::Green],
        );
        let (solution, _) = SolverEngine::default().solve(&csp).unwrap();
        assert!(solution.is_none());
    }

    #[test]
    fn three_colours_colour_a_triangle_with_all_distinct() {
        let csp = colouring(
            &TRIANGLE_REGIONS,
            &TRIANGLE_EDGES,
            &[Colour::Red, Colour::Green, Colour::Blue],
        );
        let (solution, _) = SolverEngine::default().solve(&csp).unwrap();
        let solution = solution.unwrap();
        assert_proper(&solution, &TRIANGLE_EDGES);
    }

    #[test]
    fn australia_is_three_colourable() {
        let csp = australia(&[Colour::Red, Colour::Green, Colour::Blue]);
        let (solution, stats) = SolverEngine::default().solve(&csp).unwrap();

        let solution = solution.unwrap();
        assert_eq!(solution.len(), 7);
        assert_proper(
            &solution,
            &[
                ("wa", "nt"),
                ("wa", "sa"),
                ("nt", "sa"),
                ("nt", "q"),
                ("sa", "q"),
                ("sa", "nsw"),
                ("sa", "v"),
                ("q", "nsw"),
                ("nsw", "v"),
            ],
        );
        assert!(stats.steps >= 7);
    }

    #[cfg(test)]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        // Region names live for the whole test binary; a small fixed pool
        // keeps keys 'static without leaking per-case allocations.
        const POOL: [Region; 12] = [
            "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11",
        ];

        fn random_map() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize)> {
            (2..POOL.len()).prop_flat_map(|num_regions| {
                let edges = proptest::collection::vec(
                    (0..num_regions, 0..num_regions)
                        .prop_filter("edges must join distinct regions", |(a, b)| a != b)
                        .prop_map(|(a, b)| if a < b { (a, b) } else { (b, a) }),
                    0..=(num_regions * (num_regions - 1) / 2).min(20),
                )
                .prop_map(|edges| {
                    let unique: HashSet<(usize, usize)> = edges.into_iter().collect();
                    unique.into_iter().collect::<Vec<_>>()
                });

                (Just(num_regions), edges, 2..5usize)
            })
        }

        proptest! {
            #[test]
            fn any_returned_colouring_is_proper((num_regions, edges, num_colours) in random_map()) {
                let regions = &POOL[..num_regions];
                let palette = [Colour::Red, Colour::Green, Colour::Blue, Colour::Yellow];
                let adjacencies: Vec<(Region, Region)> =
                    edges.iter().map(|&(a, b)| (POOL[a], POOL[b])).collect();

                let csp = colouring(regions, &adjacencies, &palette[..num_colours]);
                let (solution, _) = SolverEngine::default().solve(&csp).unwrap();

                if let Some(solution) = solution {
                    prop_assert_eq!(solution.len(), num_regions);
                    for (a, b) in &adjacencies {
                        prop_assert_ne!(solution[a], solution[b]);
                    }
                }
                // No solution is fine for a tight palette; unsatisfiability
                // is a legitimate outcome, not a failure of the engine.
            }

            #[test]
            fn four_colours_suffice_when_degrees_stay_low(
                (num_regions, edges, _) in random_map()
            ) {
                let regions = &POOL[..num_regions];
                let adjacencies: Vec<(Region, Region)> =
                    edges.iter().map(|&(a, b)| (POOL[a], POOL[b])).collect();
                let palette = [Colour::Red, Colour::Green, Colour::Blue, Colour::Yellow];

                // Cap the edge count so a 4-colouring is guaranteed to exist:
                // greedy colouring needs max degree < 4.
                let mut degrees = std::collections::HashMap::new();
                for (a, b) in &adjacencies {
                    *degrees.entry(*a).or_insert(0usize) += 1;
                    *degrees.entry(*b).or_insert(0usize) += 1;
                }
                prop_assume!(degrees.values().all(|&d| d < 4));

                let csp = colouring(regions, &adjacencies, &palette);
                let (solution, _) = SolverEngine::default().solve(&csp).unwrap();
                prop_assert!(solution.is_some());
            }
        }
    }
}
