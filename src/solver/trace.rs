use std::sync::mpsc::{self, Receiver, Sender};

use serde::Serialize;

use crate::solver::{
    domain::Domains,
    value::{ValueEquality, VariableKey},
};

/// The search state after one candidate-value attempt.
///
/// `step` numbers attempts from 1 in generation order; `at` is
/// `step * time_step`, a pacing offset an animator can replay against. The
/// domain maps are the assigned/unassigned partitions the search recursed on.
#[derive(Debug, Clone, Serialize)]
pub struct StepSnapshot<K: VariableKey, V: ValueEquality> {
    pub step: u64,
    pub at: u64,
    pub assigned: Domains<K, V>,
    pub unassigned: Domains<K, V>,
}

/// The sending half of the instrumentation channel.
///
/// Recording is fire-and-forget: the sender is unbounded, so the search never
/// blocks on a slow consumer, and a dropped receiver simply discards
/// snapshots. The channel is FIFO, so delivery order always matches
/// generation order.
#[derive(Debug, Clone)]
pub struct StepSink<K: VariableKey, V: ValueEquality> {
    sender: Sender<StepSnapshot<K, V>>,
}

impl<K: VariableKey, V: ValueEquality> StepSink<K, V> {
    /// Creates a sink and the receiver an external consumer drains.
    pub fn channel() -> (Self, Receiver<StepSnapshot<K, V>>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }

    pub fn record(&self, snapshot: StepSnapshot<K, V>) {
        // Nobody listening is fine; the search result does not depend on it.
        let _ = self.sender.send(snapshot);
    }
}
