//! Batch decay cycle.
//!
//! Sweeps a population of node snapshots, recomputes each node's lifecycle,
//! screens newly archived nodes for deletion, and reports transitions. A bad
//! record is logged into the result and the sweep moves on.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use lethe_core::config::{LetheConfig, SectionRegistry};
use lethe_core::errors::{LetheError, LetheResult};
use lethe_core::models::{DecayJobResult, NodeDecayUpdate, StateTransition, TrashRecord};
use lethe_core::node::{ForgettingLifecycleState, NodeDecayInput};
use lethe_core::traits::INodeStore;
use lethe_core::validation::check_neural_state;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::deletion::{days_archived, evaluate_deletion_candidate};
use crate::lifecycle::determine_lifecycle;
use crate::trash::{purge_expired, PurgeReport};

/// One decay sweep bound to a configuration and section lookup.
#[derive(Debug, Clone, Copy)]
pub struct DecayJob<'a> {
    config: &'a LetheConfig,
    sections: &'a SectionRegistry,
}

impl<'a> DecayJob<'a> {
    pub fn new(config: &'a LetheConfig, sections: &'a SectionRegistry) -> Self {
        Self { config, sections }
    }

    /// Evaluate a single snapshot.
    pub fn evaluate_node(
        &self,
        input: &NodeDecayInput,
        now: DateTime<Utc>,
    ) -> LetheResult<NodeDecayUpdate> {
        if input.node_id.trim().is_empty() {
            return Err(LetheError::InvalidNodeState {
                node_id: input.node_id.clone(),
                reason: "node id is empty".into(),
            });
        }
        check_neural_state(&input.state, &self.config.difficulty).map_err(|reason| {
            LetheError::InvalidNodeState {
                node_id: input.node_id.clone(),
                reason,
            }
        })?;

        let thresholds = match input.section.as_deref() {
            Some(name) => self.sections.resolve(name)?.lifecycle(&self.config.lifecycle),
            None => self.config.lifecycle,
        };

        let determination = determine_lifecycle(&input.state, now, &thresholds);
        let mut new_state = determination.state;
        let mut deletion = None;

        if !determination.previous_state.is_explicit_action_state()
            && new_state == ForgettingLifecycleState::Archived
        {
            let candidate = evaluate_deletion_candidate(
                input,
                days_archived(determination.days_in_dormant, &thresholds),
                now,
                &self.config.deletion,
            );
            if candidate.is_candidate {
                new_state = ForgettingLifecycleState::DeletionCandidate;
            }
            deletion = Some(candidate);
        }

        Ok(NodeDecayUpdate {
            node_id: input.node_id.clone(),
            previous_state: determination.previous_state,
            new_state,
            retrievability: determination.retrievability,
            days_in_dormant: determination.days_in_dormant,
            compression_eligible: determination.compression_eligible,
            archive_eligible: determination.archive_eligible,
            deletion,
        })
    }

    /// Sequential sweep.
    pub fn run(&self, nodes: &[NodeDecayInput], now: DateTime<Utc>) -> DecayJobResult {
        let _span = crate::decay_cycle_span!(nodes.len()).entered();
        let started = Instant::now();

        let mut tally = CycleTally::default();
        for input in nodes {
            tally.record(&input.node_id, self.evaluate_node(input, now));
        }
        tally.finish(now, started)
    }

    /// Parallel sweep across nodes. Produces the same result as [`run`](Self::run);
    /// updates stay in input order.
    pub fn run_parallel(&self, nodes: &[NodeDecayInput], now: DateTime<Utc>) -> DecayJobResult {
        let _span = crate::decay_cycle_span!(nodes.len()).entered();
        let started = Instant::now();

        let tally = nodes
            .par_iter()
            .fold(CycleTally::default, |mut tally, input| {
                tally.record(&input.node_id, self.evaluate_node(input, now));
                tally
            })
            .reduce(CycleTally::default, CycleTally::merge);
        tally.finish(now, started)
    }

    /// Sequential sweep followed by a purge of expired trash records.
    pub fn run_with_store(
        &self,
        nodes: &[NodeDecayInput],
        trash: &[TrashRecord],
        store: &dyn INodeStore,
        now: DateTime<Utc>,
    ) -> (DecayJobResult, PurgeReport) {
        let started = Instant::now();
        let mut result = self.run(nodes, now);
        let purge = purge_expired(trash, store, now);

        result.auto_deleted = purge.deleted.len();
        result.errors.extend(purge.errors.iter().cloned());
        result.duration_ms = elapsed_ms(started);
        (result, purge)
    }
}

/// Mergeable per-run accumulator.
#[derive(Debug, Default)]
struct CycleTally {
    evaluated: usize,
    transitions: BTreeMap<(ForgettingLifecycleState, ForgettingLifecycleState), usize>,
    compressed: usize,
    archived: usize,
    deletion_flagged: usize,
    errors: Vec<String>,
    updates: Vec<NodeDecayUpdate>,
}

impl CycleTally {
    fn record(&mut self, node_id: &str, outcome: LetheResult<NodeDecayUpdate>) {
        let update = match outcome {
            Ok(update) => update,
            Err(e) => {
                let id = if node_id.trim().is_empty() { "<unknown>" } else { node_id };
                warn!(node_id = %id, error = %e, "decay evaluation failed");
                self.errors.push(format!("{id}: {e}"));
                return;
            }
        };

        self.evaluated += 1;
        if update.changed() {
            debug!(
                node_id = %update.node_id,
                from = %update.previous_state,
                to = %update.new_state,
                retrievability = update.retrievability,
                "lifecycle transition"
            );
            *self
                .transitions
                .entry((update.previous_state, update.new_state))
                .or_insert(0) += 1;
        }
        if update.compression_eligible {
            self.compressed += 1;
        }
        if update.archive_eligible {
            self.archived += 1;
        }
        if update.deletion.as_ref().is_some_and(|c| c.is_candidate) {
            self.deletion_flagged += 1;
        }
        self.updates.push(update);
    }

    fn merge(mut self, other: Self) -> Self {
        self.evaluated += other.evaluated;
        for (pair, count) in other.transitions {
            *self.transitions.entry(pair).or_insert(0) += count;
        }
        self.compressed += other.compressed;
        self.archived += other.archived;
        self.deletion_flagged += other.deletion_flagged;
        self.errors.extend(other.errors);
        self.updates.extend(other.updates);
        self
    }

    fn finish(self, executed_at: DateTime<Utc>, started: Instant) -> DecayJobResult {
        let result = DecayJobResult {
            evaluated: self.evaluated,
            transitions: self
                .transitions
                .into_iter()
                .map(|((from, to), count)| StateTransition { from, to, count })
                .collect(),
            compressed: self.compressed,
            archived: self.archived,
            deletion_flagged: self.deletion_flagged,
            auto_deleted: 0,
            errors: self.errors,
            updates: self.updates,
            executed_at,
            duration_ms: elapsed_ms(started),
        };
        info!(
            evaluated = result.evaluated,
            compressed = result.compressed,
            archived = result.archived,
            deletion_flagged = result.deletion_flagged,
            errors = result.errors.len(),
            duration_ms = result.duration_ms,
            "decay cycle complete"
        );
        result
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
