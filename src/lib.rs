//! Vinculum is a generic, reusable constraint satisfaction problem (CSP)
//! solver for binary constraints.
//!
//! A problem is a set of variables, each with an ordered domain of candidate
//! values, linked by directed constraint arcs carrying pairwise predicates.
//! The engine interleaves arc-consistency propagation (AC-3) with recursive
//! backtracking search, picking variables by minimum remaining values and
//! ordering their candidates by least constraining value.
//!
//! # Core Concepts
//!
//! - **[`Csp`]**: the problem instance — variables, domains, and constraint
//!   arcs, assembled with a builder. Keys and values are your own types.
//! - **[`ConstraintArc`]**: a directed rule between two variables. The crate
//!   ships common predicates like [`NotEqual`], and any closure works via
//!   [`ConstraintArc::from_fn`].
//! - **[`SolverEngine`]**: the search engine. Unsatisfiability is a normal
//!   result (`Ok((None, stats))`), not an error.
//!
//! [`Csp`]: solver::problem::Csp
//! [`ConstraintArc`]: solver::constraint::ConstraintArc
//! [`ConstraintArc::from_fn`]: solver::constraint::ConstraintArc::from_fn
//! [`NotEqual`]: solver::constraints::not_equal::NotEqual
//! [`SolverEngine`]: solver::engine::SolverEngine
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `?a != ?b` where `?a` can be `1` or `2` and `?b` can only be `1`:
//! the solver must deduce that `?a` is `2`.
//!
//! ```
//! use vinculum::solver::constraints::not_equal::NotEqual;
//! use vinculum::solver::engine::SolverEngine;
//! use vinculum::solver::problem::Csp;
//!
//! let csp = Csp::builder()
//!     .variable("a", [1, 2])
//!     .variable("b", [1])
//!     .symmetric("a", "b", NotEqual)
//!     .build();
//!
//! let (solution, _stats) = SolverEngine::default().solve(&csp).unwrap();
//! let solution = solution.expect("a != b is satisfiable");
//!
//! assert_eq!(solution["a"], 2);
//! assert_eq!(solution["b"], 1);
//! ```
//!
//! To watch the search work, attach a [`StepSink`] to the problem and drain
//! the paired receiver; one snapshot arrives per candidate-value attempt, in
//! the order the attempts were made.
//!
//! [`StepSink`]: solver::trace::StepSink

pub mod error;
pub mod examples;
pub mod solver;
