use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::{BinaryPredicate, ConstraintArc},
        domain::{Domain, Domains},
        trace::{StepSink, StepSnapshot},
        value::{ValueEquality, VariableKey},
    },
};

/// One constraint satisfaction problem instance.
///
/// A `Csp` is passive data: the variable/domain map, the arc list, and the
/// optional instrumentation settings. The engine reads it and never mutates
/// it; all working state lives in per-branch domain maps.
///
/// Variables keep their declaration order, which is the deterministic
/// tie-break order for variable selection.
#[derive(Debug, Clone)]
pub struct Csp<K: VariableKey, V: ValueEquality> {
    order: Vec<K>,
    domains: Domains<K, V>,
    constraints: Vec<ConstraintArc<K, V>>,
    time_step: u64,
    trace: Option<StepSink<K, V>>,
}

impl<K: VariableKey, V: ValueEquality> Csp<K, V> {
    pub fn builder() -> CspBuilder<K, V> {
        CspBuilder::new()
    }

    /// Variable keys in declaration order.
    pub fn variables(&self) -> &[K] {
        &self.order
    }

    pub fn domains(&self) -> &Domains<K, V> {
        &self.domains
    }

    pub fn constraints(&self) -> &[ConstraintArc<K, V>] {
        &self.constraints
    }

    pub fn time_step(&self) -> u64 {
        self.time_step
    }

    /// Replaces the pacing multiplier applied to trace snapshots.
    pub fn with_time_step(mut self, time_step: u64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Attaches an instrumentation sink to an already-built problem.
    pub fn with_trace(mut self, sink: StepSink<K, V>) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Rejects problems that violate the caller contract: arcs must only
    /// reference declared variables, and no domain may repeat a value.
    pub fn validate(&self) -> Result<()> {
        for arc in &self.constraints {
            for key in [arc.head(), arc.tail()] {
                if !self.domains.contains_key(key) {
                    return Err(SolverError::UndeclaredVariable(format!("{key:?}")).into());
                }
            }
        }
        for key in &self.order {
            if let Some(duplicate) = self.domains.get(key).and_then(|d| d.first_duplicate()) {
                return Err(SolverError::DuplicateDomainValue(
                    format!("{key:?}"),
                    format!("{duplicate:?}"),
                )
                .into());
            }
        }
        Ok(())
    }

    pub(crate) fn record_step(
        &self,
        step: u64,
        assigned: &Domains<K, V>,
        unassigned: &Domains<K, V>,
    ) {
        if let Some(sink) = &self.trace {
            sink.record(StepSnapshot {
                step,
                at: step * self.time_step,
                assigned: assigned.clone(),
                unassigned: unassigned.clone(),
            });
        }
    }
}

/// Assembles a [`Csp`] from variables and constraint arcs.
pub struct CspBuilder<K: VariableKey, V: ValueEquality> {
    order: Vec<K>,
    domains: Domains<K, V>,
    constraints: Vec<ConstraintArc<K, V>>,
    time_step: u64,
    trace: Option<StepSink<K, V>>,
}

impl<K: VariableKey, V: ValueEquality> CspBuilder<K, V> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            domains: Domains::new(),
            constraints: Vec::new(),
            time_step: 1,
            trace: None,
        }
    }

    /// Declares a variable with its initial domain. A singleton domain is a
    /// pre-filled cell. Re-declaring a key replaces its domain but keeps its
    /// original position in the declaration order.
    pub fn variable(mut self, key: K, values: impl IntoIterator<Item = V>) -> Self {
        if !self.domains.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.domains.insert(key, Domain::new(values));
        self
    }

    pub fn constraint(mut self, arc: ConstraintArc<K, V>) -> Self {
        self.constraints.push(arc);
        self
    }

    pub fn constraints(mut self, arcs: impl IntoIterator<Item = ConstraintArc<K, V>>) -> Self {
        self.constraints.extend(arcs);
        self
    }

    /// Adds both directions of a symmetric relation between `a` and `b`.
    pub fn symmetric(mut self, a: K, b: K, predicate: impl BinaryPredicate<V> + 'static) -> Self {
        let [forward, reverse] = ConstraintArc::symmetric(a, b, predicate);
        self.constraints.push(forward);
        self.constraints.push(reverse);
        self
    }

    pub fn time_step(mut self, time_step: u64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn trace(mut self, sink: StepSink<K, V>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn build(self) -> Csp<K, V> {
        Csp {
            order: self.order,
            domains: self.domains,
            constraints: self.constraints,
            time_step: self.time_step,
            trace: self.trace,
        }
    }
}

impl<K: VariableKey, V: ValueEquality> Default for CspBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
