use serde::{Deserialize, Serialize};

use crate::node::ForgettingLifecycleState;

/// Result of an on-demand lifecycle query.
///
/// The eligibility flags compare the node's *stored* state against the
/// freshly derived one, so they fire on the sweep that first crosses a rung,
/// including skipped rungs: a node stored as WEAK that now derives SUMMARIZED
/// or ARCHIVED is compression eligible. Once the new state is persisted the
/// flag stays off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifecycleDetermination {
    pub previous_state: ForgettingLifecycleState,
    pub state: ForgettingLifecycleState,
    pub retrievability: f64,
    pub days_since_access: f64,
    pub days_in_dormant: f64,
    pub compression_eligible: bool,
    pub archive_eligible: bool,
    pub deletion_candidate_eligible: bool,
}

impl LifecycleDetermination {
    pub fn changed(&self) -> bool {
        self.previous_state != self.state
    }
}
