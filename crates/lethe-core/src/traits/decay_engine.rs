use chrono::{DateTime, Utc};

use crate::models::{DecayJobResult, LifecycleDetermination};
use crate::node::{NeuralState, NodeDecayInput};

/// Decay computation surface exposed to schedulers and renderers.
pub trait IDecayEngine: Send + Sync {
    /// Recall probability of `state` at `now`.
    fn retrievability(&self, state: &NeuralState, now: DateTime<Utc>) -> f64;

    /// On-demand lifecycle query for a single node.
    fn determine_lifecycle(&self, state: &NeuralState, now: DateTime<Utc>)
        -> LifecycleDetermination;

    /// Batch sweep over a node population.
    fn run_decay_cycle(&self, nodes: &[NodeDecayInput], now: DateTime<Utc>) -> DecayJobResult;
}
