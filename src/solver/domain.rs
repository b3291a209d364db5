use im::Vector;
use serde::Serialize;

use crate::solver::value::{ValueEquality, VariableKey};

/// A map from each variable's key to its current domain.
pub type Domains<K, V> = im::HashMap<K, Domain<V>>;

/// An ordered sequence of candidate values for one variable.
///
/// Order is meaningful: it is the order values are tried when nothing else
/// distinguishes them, and the tie-break order for value heuristics. A domain
/// of length 1 denotes an assigned variable; length 0 a dead branch.
///
/// Backed by a persistent vector, so the per-branch copies the search makes
/// share structure and are cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Domain<V: ValueEquality>(Vector<V>);

impl<V: ValueEquality> Domain<V> {
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn singleton(value: V) -> Self {
        Self(Vector::unit(value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// If the domain is a singleton, returns the single value.
    pub fn singleton_value(&self) -> Option<V> {
        if self.0.len() == 1 {
            self.0.front().cloned()
        } else {
            None
        }
    }

    pub fn first(&self) -> Option<&V> {
        self.0.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.0.iter()
    }

    pub fn contains(&self, value: &V) -> bool {
        self.0.contains(value)
    }

    /// Creates a new domain containing only the values that satisfy the
    /// predicate, preserving order. The receiver is untouched.
    pub fn retain(&self, f: impl Fn(&V) -> bool) -> Self {
        Self(self.0.iter().filter(|v| f(v)).cloned().collect())
    }

    /// Returns the first value that appears more than once, if any.
    /// Duplicates are a caller contract violation surfaced by validation.
    pub fn first_duplicate(&self) -> Option<&V> {
        let mut seen = std::collections::HashSet::new();
        self.0.iter().find(|value| !seen.insert(*value))
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().all(|value| other.contains(value))
    }
}

impl<V: ValueEquality> FromIterator<V> for Domain<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Checks whether any domain in the map has been emptied, which proves the
/// current branch unsatisfiable.
pub fn any_empty<K: VariableKey, V: ValueEquality>(domains: &Domains<K, V>) -> bool {
    domains.values().any(|domain| domain.is_empty())
}

/// Total number of values remaining across all domains. Used by the
/// least-constraining-value lookahead as its freedom measure.
pub fn value_count<K: VariableKey, V: ValueEquality>(domains: &Domains<K, V>) -> usize {
    domains.values().map(Domain::len).sum()
}
