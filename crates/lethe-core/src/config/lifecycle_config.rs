use serde::{Deserialize, Serialize};

use super::defaults;
use super::{check_positive, check_unit_interval};
use crate::errors::ConfigError;

/// Lifecycle thresholds consumed by the state machine.
///
/// One parameterized state machine serves both the global curve
/// ([`LifecycleConfig::GLOBAL`]) and per-section curves, which override
/// the retrievability thresholds through
/// [`SectionDecayConfig::lifecycle`](super::SectionDecayConfig::lifecycle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Retrievability strictly above this is ACTIVE.
    pub active_threshold: f64,
    /// Retrievability strictly above this (and not ACTIVE) is WEAK.
    pub weak_threshold: f64,
    /// Days below the weak threshold before a node counts as settled
    /// dormant. Informational; never shortens the compress/archive windows.
    pub dormant_days: f64,
    /// Days below the weak threshold at which a node enters SUMMARIZED.
    pub compress_days: f64,
    /// Days below the weak threshold at which a node enters ARCHIVED.
    pub archive_days: f64,
    /// Days below the weak threshold at which an archived node may be
    /// screened for deletion.
    pub deletion_candidate_days: f64,
}

impl LifecycleConfig {
    /// The global decay curve.
    pub const GLOBAL: LifecycleConfig = LifecycleConfig {
        active_threshold: defaults::DEFAULT_ACTIVE_THRESHOLD,
        weak_threshold: defaults::DEFAULT_WEAK_THRESHOLD,
        dormant_days: defaults::DEFAULT_DORMANT_DAYS,
        compress_days: defaults::DEFAULT_COMPRESS_DAYS,
        archive_days: defaults::DEFAULT_ARCHIVE_DAYS,
        deletion_candidate_days: defaults::DEFAULT_DELETION_CANDIDATE_DAYS,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_interval("lifecycle.active_threshold", self.active_threshold)?;
        check_unit_interval("lifecycle.weak_threshold", self.weak_threshold)?;
        if self.weak_threshold >= self.active_threshold {
            return Err(ConfigError::InvertedThresholds {
                lower: "lifecycle.weak_threshold".into(),
                upper: "lifecycle.active_threshold".into(),
            });
        }
        check_positive("lifecycle.compress_days", self.compress_days)?;
        if !(self.dormant_days >= 0.0 && self.dormant_days <= self.compress_days) {
            return Err(ConfigError::OutOfRange {
                field: "lifecycle.dormant_days".into(),
                value: self.dormant_days,
                reason: "must be within [0, compress_days]".into(),
            });
        }
        if self.compress_days >= self.archive_days {
            return Err(ConfigError::InvertedThresholds {
                lower: "lifecycle.compress_days".into(),
                upper: "lifecycle.archive_days".into(),
            });
        }
        if self.archive_days > self.deletion_candidate_days {
            return Err(ConfigError::InvertedThresholds {
                lower: "lifecycle.archive_days".into(),
                upper: "lifecycle.deletion_candidate_days".into(),
            });
        }
        Ok(())
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self::GLOBAL
    }
}
