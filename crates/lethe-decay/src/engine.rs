use chrono::{DateTime, Utc};
use lethe_core::config::{LetheConfig, SectionRegistry, StabilityConfig};
use lethe_core::errors::LetheResult;
use lethe_core::models::{
    DecayJobResult, DeletionCandidate, DifficultyFactors, LifecycleDetermination, StabilityUpdate,
    StrengtheningEvent, TrashInitiator, TrashRecord,
};
use lethe_core::node::{ContentCategory, NeuralState, NodeDecayInput};
use lethe_core::traits::{IDecayEngine, INodeStore};

use crate::deletion;
use crate::difficulty;
use crate::job::DecayJob;
use crate::lifecycle;
use crate::retrievability;
use crate::stability;
use crate::state::{self, NeuralStateOptions};
use crate::strengthening::{self, StrengtheningOutcome};
use crate::trash::{self, PurgeReport};

/// Forgetting engine bound to a validated configuration.
///
/// Construction is the only fallible step: an invalid configuration is
/// rejected up front, after which every operation is infallible except the
/// node-store calls.
#[derive(Debug, Clone)]
pub struct DecayEngine {
    config: LetheConfig,
    sections: SectionRegistry,
}

impl DecayEngine {
    /// Engine with the global defaults and built-in section presets.
    pub fn new() -> Self {
        Self {
            config: LetheConfig::default(),
            sections: SectionRegistry::default(),
        }
    }

    /// Engine with a custom configuration.
    pub fn with_config(config: LetheConfig) -> LetheResult<Self> {
        config.validate()?;
        let sections = config.section_registry()?;
        Ok(Self { config, sections })
    }

    pub fn config(&self) -> &LetheConfig {
        &self.config
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    /// Batch job bound to this engine's configuration.
    pub fn job(&self) -> DecayJob<'_> {
        DecayJob::new(&self.config, &self.sections)
    }

    /// Promote a node into decay tracking.
    pub fn create_neural_state(&self, options: &NeuralStateOptions) -> NeuralState {
        state::create_neural_state_with(
            options,
            &self.config.difficulty,
            &self.config.strengthening,
        )
    }

    /// Promote a node into a named section's decay curve.
    pub fn create_neural_state_in_section(
        &self,
        options: NeuralStateOptions,
        section: &str,
    ) -> LetheResult<NeuralState> {
        let curve = *self.sections.resolve(section)?;
        Ok(self.create_neural_state(&options.with_section(curve)))
    }

    /// Lifecycle under a named section's curve.
    pub fn determine_lifecycle_in_section(
        &self,
        state: &NeuralState,
        section: &str,
        now: DateTime<Utc>,
    ) -> LetheResult<LifecycleDetermination> {
        let curve = self.sections.resolve(section)?;
        Ok(lifecycle::determine_section_lifecycle(
            state,
            now,
            curve,
            &self.config.lifecycle,
        ))
    }

    /// Stability growth for an access, optionally under a section's curve.
    pub fn update_stability(
        &self,
        stability: f64,
        difficulty: f64,
        section: Option<&str>,
    ) -> LetheResult<StabilityUpdate> {
        let params = self.stability_params(section)?;
        Ok(stability::update_stability_with(stability, difficulty, &params))
    }

    /// Apply an access to `state`.
    pub fn record_access(
        &self,
        state: &NeuralState,
        now: DateTime<Utc>,
        section: Option<&str>,
    ) -> LetheResult<(NeuralState, StabilityUpdate)> {
        let params = self.stability_params(section)?;
        Ok(stability::record_access(state, now, &params))
    }

    pub fn strengthen(
        &self,
        state: &NeuralState,
        event: StrengtheningEvent,
        now: DateTime<Utc>,
    ) -> StrengtheningOutcome {
        strengthening::strengthen_with(state, event, now, &self.config.strengthening)
    }

    pub fn calculate_difficulty(
        &self,
        category: ContentCategory,
        complexity: f64,
        avg_days_between_access: f64,
        edge_count: u32,
    ) -> DifficultyFactors {
        difficulty::calculate_difficulty_with(
            category,
            complexity,
            avg_days_between_access,
            edge_count,
            &self.config.difficulty,
        )
    }

    pub fn evaluate_deletion(
        &self,
        input: &NodeDecayInput,
        days_archived: f64,
        now: DateTime<Utc>,
    ) -> DeletionCandidate {
        deletion::evaluate_deletion_candidate(input, days_archived, now, &self.config.deletion)
    }

    pub fn move_to_trash(
        &self,
        node_id: &str,
        reason: &str,
        initiator: TrashInitiator,
        now: DateTime<Utc>,
    ) -> TrashRecord {
        trash::move_to_trash_with(node_id, reason, initiator, now, &self.config.trash)
    }

    pub fn purge_trash(
        &self,
        records: &[TrashRecord],
        store: &dyn INodeStore,
        now: DateTime<Utc>,
    ) -> PurgeReport {
        trash::purge_expired(records, store, now)
    }

    pub fn restore_from_trash(
        &self,
        record: &TrashRecord,
        store: &dyn INodeStore,
        now: DateTime<Utc>,
    ) -> LetheResult<()> {
        trash::restore_from_trash(record, store, now)
    }

    pub fn run_decay_cycle_parallel(
        &self,
        nodes: &[NodeDecayInput],
        now: DateTime<Utc>,
    ) -> DecayJobResult {
        self.job().run_parallel(nodes, now)
    }

    /// Decay sweep plus purge of expired trash through `store`.
    pub fn run_decay_cycle_with_store(
        &self,
        nodes: &[NodeDecayInput],
        trash: &[TrashRecord],
        store: &dyn INodeStore,
        now: DateTime<Utc>,
    ) -> (DecayJobResult, PurgeReport) {
        self.job().run_with_store(nodes, trash, store, now)
    }

    fn stability_params(&self, section: Option<&str>) -> LetheResult<StabilityConfig> {
        Ok(match section {
            Some(name) => self.sections.resolve(name)?.stability(),
            None => self.config.stability,
        })
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IDecayEngine for DecayEngine {
    fn retrievability(&self, state: &NeuralState, now: DateTime<Utc>) -> f64 {
        retrievability::calculate_retrievability(state.stability, state.days_since_access(now))
    }

    fn determine_lifecycle(
        &self,
        state: &NeuralState,
        now: DateTime<Utc>,
    ) -> LifecycleDetermination {
        lifecycle::determine_lifecycle(state, now, &self.config.lifecycle)
    }

    fn run_decay_cycle(&self, nodes: &[NodeDecayInput], now: DateTime<Utc>) -> DecayJobResult {
        self.job().run(nodes, now)
    }
}

/// Sweep `nodes` under the global defaults.
pub fn run_decay_cycle(nodes: &[NodeDecayInput], now: DateTime<Utc>) -> DecayJobResult {
    DecayEngine::new().job().run(nodes, now)
}

/// On-demand lifecycle query under the global thresholds.
pub fn determine_lifecycle(state: &NeuralState, now: DateTime<Utc>) -> LifecycleDetermination {
    lifecycle::determine_lifecycle(state, now, &lethe_core::config::LifecycleConfig::GLOBAL)
}
