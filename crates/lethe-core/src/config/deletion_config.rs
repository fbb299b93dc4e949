use serde::{Deserialize, Serialize};

use super::check_non_negative;
use super::defaults;
use crate::errors::ConfigError;

/// Deletion-candidacy screening rules. Each exclusion can be toggled off
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletionConfig {
    /// Minimum days spent in ARCHIVED before a node can be a candidate.
    pub min_days_archived: f64,
    /// An archive search hit strictly younger than this excludes the node.
    pub recent_search_days: i64,
    pub exclude_identity: bool,
    pub exclude_pinned: bool,
    pub exclude_linked: bool,
    pub exclude_restored: bool,
    pub exclude_recently_searched: bool,
}

impl DeletionConfig {
    pub const GLOBAL: DeletionConfig = DeletionConfig {
        min_days_archived: defaults::DEFAULT_MIN_DAYS_ARCHIVED,
        recent_search_days: defaults::DEFAULT_RECENT_SEARCH_DAYS,
        exclude_identity: true,
        exclude_pinned: true,
        exclude_linked: true,
        exclude_restored: true,
        exclude_recently_searched: true,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("deletion.min_days_archived", self.min_days_archived)?;
        if self.recent_search_days < 0 {
            return Err(ConfigError::OutOfRange {
                field: "deletion.recent_search_days".into(),
                value: self.recent_search_days as f64,
                reason: "must be non-negative".into(),
            });
        }
        Ok(())
    }
}

impl Default for DeletionConfig {
    fn default() -> Self {
        Self::GLOBAL
    }
}

/// Trash buffer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrashConfig {
    /// Days a trashed node stays restorable before auto-deletion.
    pub buffer_days: i64,
}

impl TrashConfig {
    pub const GLOBAL: TrashConfig = TrashConfig {
        buffer_days: defaults::DEFAULT_TRASH_BUFFER_DAYS,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_days < 0 {
            return Err(ConfigError::OutOfRange {
                field: "trash.buffer_days".into(),
                value: self.buffer_days as f64,
                reason: "must be non-negative".into(),
            });
        }
        Ok(())
    }
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self::GLOBAL
    }
}
