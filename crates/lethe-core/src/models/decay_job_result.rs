use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DeletionCandidate;
use crate::node::ForgettingLifecycleState;

/// Count of nodes that moved between two lifecycle states in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    pub from: ForgettingLifecycleState,
    pub to: ForgettingLifecycleState,
    pub count: usize,
}

/// Per-node outcome the caller persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDecayUpdate {
    pub node_id: String,
    pub previous_state: ForgettingLifecycleState,
    pub new_state: ForgettingLifecycleState,
    pub retrievability: f64,
    pub days_in_dormant: f64,
    /// Signal for the external compression service.
    pub compression_eligible: bool,
    /// Crossed into ARCHIVED on this sweep.
    #[serde(default)]
    pub archive_eligible: bool,
    /// Screening result for nodes that landed in ARCHIVED.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion: Option<DeletionCandidate>,
}

impl NodeDecayUpdate {
    pub fn changed(&self) -> bool {
        self.previous_state != self.new_state
    }
}

/// Aggregate report of one decay-cycle run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayJobResult {
    pub evaluated: usize,
    pub transitions: Vec<StateTransition>,
    pub compressed: usize,
    pub archived: usize,
    pub deletion_flagged: usize,
    pub auto_deleted: usize,
    /// `"<node_id>: <message>"` for every node that failed.
    pub errors: Vec<String>,
    pub updates: Vec<NodeDecayUpdate>,
    pub executed_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl DecayJobResult {
    /// An empty result stamped at `executed_at`.
    pub fn empty(executed_at: DateTime<Utc>) -> Self {
        Self {
            evaluated: 0,
            transitions: Vec::new(),
            compressed: 0,
            archived: 0,
            deletion_flagged: 0,
            auto_deleted: 0,
            errors: Vec::new(),
            updates: Vec::new(),
            executed_at,
            duration_ms: 0,
        }
    }

    /// Count for a specific `from → to` pair, 0 if absent.
    pub fn transition_count(
        &self,
        from: ForgettingLifecycleState,
        to: ForgettingLifecycleState,
    ) -> usize {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.to == to)
            .map_or(0, |t| t.count)
    }
}
