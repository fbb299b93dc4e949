use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lifecycle_state::ForgettingLifecycleState;
use crate::constants::SECONDS_PER_DAY;

/// Per-node decay state.
///
/// `retrievability` and `days_in_dormant` are caches. Lifecycle decisions
/// always recompute them from `stability` and `last_accessed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuralState {
    /// Days until recall probability falls to 90%. Always > 0.
    pub stability: f64,
    /// Cached recall probability, 0.0–1.0.
    pub retrievability: f64,
    /// Saturating ranking signal, 0.0–1.0.
    pub strength: f64,
    /// Retention difficulty, within the configured difficulty bounds.
    pub difficulty: f64,
    pub last_accessed: DateTime<Utc>,
    pub access_count: u64,
    pub lifecycle_state: ForgettingLifecycleState,
    /// Consecutive days spent below the weak threshold.
    pub days_in_dormant: f64,
}

impl NeuralState {
    /// Fractional days elapsed between `last_accessed` and `now`, floored at 0.
    pub fn days_since_access(&self, now: DateTime<Utc>) -> f64 {
        let seconds = (now - self.last_accessed).num_milliseconds() as f64 / 1000.0;
        (seconds / SECONDS_PER_DAY).max(0.0)
    }
}
