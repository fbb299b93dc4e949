use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who moved a node to the trash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrashInitiator {
    User,
    System,
}

impl fmt::Display for TrashInitiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::System => f.write_str("system"),
        }
    }
}

/// A node sitting in the trash buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrashRecord {
    pub node_id: String,
    pub trashed_at: DateTime<Utc>,
    /// `trashed_at + buffer_days`.
    pub auto_delete_at: DateTime<Utc>,
    pub reason: String,
    pub initiator: TrashInitiator,
}

impl TrashRecord {
    /// Whether the buffer has elapsed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.auto_delete_at
    }
}
