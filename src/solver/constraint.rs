use std::sync::Arc;

use crate::solver::value::{ValueEquality, VariableKey};

/// Identifies a constraint arc by its position in the problem's arc list.
pub type ArcId = usize;

#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A pairwise compatibility test between a head value and a tail value.
///
/// Predicates are stateless rules; the engine calls them many times during
/// propagation and never in any particular order.
pub trait BinaryPredicate<V>: std::fmt::Debug {
    fn descriptor(&self) -> ConstraintDescriptor;

    /// Returns `true` if the pair `(head_value, tail_value)` is permitted.
    fn consistent(&self, head_value: &V, tail_value: &V) -> bool;
}

/// A directed binary constraint between two variables.
///
/// During propagation an arc is always revised in one direction: values are
/// removed from the *tail's* domain when no value in the *head's* domain
/// supports them. A symmetric relationship therefore needs two arcs, one per
/// direction; [`ConstraintArc::symmetric`] builds both from one predicate.
#[derive(Debug, Clone)]
pub struct ConstraintArc<K, V> {
    head: K,
    tail: K,
    predicate: Arc<dyn BinaryPredicate<V>>,
}

impl<K: VariableKey, V: ValueEquality> ConstraintArc<K, V> {
    pub fn new(head: K, tail: K, predicate: impl BinaryPredicate<V> + 'static) -> Self {
        Self::shared(head, tail, Arc::new(predicate))
    }

    pub fn shared(head: K, tail: K, predicate: Arc<dyn BinaryPredicate<V>>) -> Self {
        Self {
            head,
            tail,
            predicate,
        }
    }

    /// Builds both directions of a symmetric relation, sharing one predicate.
    ///
    /// Only meaningful for predicates where `p(a, b) == p(b, a)`, such as
    /// inequality. Directional predicates need two explicitly-flipped arcs.
    pub fn symmetric(a: K, b: K, predicate: impl BinaryPredicate<V> + 'static) -> [Self; 2] {
        let predicate: Arc<dyn BinaryPredicate<V>> = Arc::new(predicate);
        [
            Self::shared(a.clone(), b.clone(), predicate.clone()),
            Self::shared(b, a, predicate),
        ]
    }

    /// Wraps a plain closure as the arc's predicate.
    pub fn from_fn<F>(head: K, tail: K, name: &str, f: F) -> Self
    where
        F: Fn(&V, &V) -> bool + 'static,
    {
        Self::new(
            head,
            tail,
            FnPredicate {
                name: name.to_owned(),
                f,
            },
        )
    }

    pub fn head(&self) -> &K {
        &self.head
    }

    pub fn tail(&self) -> &K {
        &self.tail
    }

    pub fn consistent(&self, head_value: &V, tail_value: &V) -> bool {
        self.predicate.consistent(head_value, tail_value)
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        self.predicate.descriptor()
    }
}

/// Adapter turning a closure into a [`BinaryPredicate`].
pub struct FnPredicate<F> {
    name: String,
    f: F,
}

impl<F> std::fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FnPredicate").field(&self.name).finish()
    }
}

impl<V, F> BinaryPredicate<V> for FnPredicate<F>
where
    F: Fn(&V, &V) -> bool,
{
    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: self.name.clone(),
            description: "caller-supplied predicate".to_owned(),
        }
    }

    fn consistent(&self, head_value: &V, tail_value: &V) -> bool {
        (self.f)(head_value, tail_value)
    }
}
