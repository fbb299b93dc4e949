use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a decay-tracked node.
///
/// The first five states form the decay progression and are derived from
/// retrievability. `DeletionCandidate`, `Trash` and `Deleted` are side
/// branches reached from `Archived` or by explicit user action; the decay
/// sweep never derives them from retrievability.
///
/// `Summarized` is the canonical name of the compression slot. The legacy
/// name `COMPRESS` is accepted as an alias when parsing or deserializing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForgettingLifecycleState {
    #[default]
    Active,
    Weak,
    Dormant,
    #[serde(alias = "COMPRESS")]
    Summarized,
    Archived,
    DeletionCandidate,
    Trash,
    Deleted,
}

impl ForgettingLifecycleState {
    pub const ALL: [ForgettingLifecycleState; 8] = [
        Self::Active,
        Self::Weak,
        Self::Dormant,
        Self::Summarized,
        Self::Archived,
        Self::DeletionCandidate,
        Self::Trash,
        Self::Deleted,
    ];

    /// States only reachable by explicit action (user or deletion screening).
    /// The decay sweep leaves nodes in these states untouched.
    pub fn is_explicit_action_state(self) -> bool {
        matches!(self, Self::DeletionCandidate | Self::Trash | Self::Deleted)
    }

    /// States derived purely from retrievability and dormancy.
    pub fn is_decay_state(self) -> bool {
        !self.is_explicit_action_state()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Weak => "WEAK",
            Self::Dormant => "DORMANT",
            Self::Summarized => "SUMMARIZED",
            Self::Archived => "ARCHIVED",
            Self::DeletionCandidate => "DELETION_CANDIDATE",
            Self::Trash => "TRASH",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for ForgettingLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForgettingLifecycleState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        if normalized == "COMPRESS" {
            return Ok(Self::Summarized);
        }
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == normalized)
            .ok_or_else(|| format!("unknown lifecycle state: {s}"))
    }
}
