use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Qualitative interaction that strengthens a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengtheningEvent {
    /// The node was returned by a retrieval and used.
    DirectRetrieval,
    /// The node was activated alongside another retrieved node.
    CoActivation,
    /// The user opened, edited, or otherwise touched the node.
    UserInteraction,
    /// Another node or an external source referenced this node.
    ExternalReference,
}

impl StrengtheningEvent {
    pub const ALL: [StrengtheningEvent; 4] = [
        Self::DirectRetrieval,
        Self::CoActivation,
        Self::UserInteraction,
        Self::ExternalReference,
    ];
}

impl fmt::Display for StrengtheningEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::DirectRetrieval => "direct_retrieval",
            Self::CoActivation => "co_activation",
            Self::UserInteraction => "user_interaction",
            Self::ExternalReference => "external_reference",
        };
        f.write_str(s)
    }
}

/// Immutable log entry for one strengthening event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengtheningRecord {
    pub event: StrengtheningEvent,
    pub strength_before: f64,
    pub strength_after: f64,
    /// Always >= 0.
    pub delta: f64,
    pub timestamp: DateTime<Utc>,
}
