//! Hebbian strengthening with saturation.
//!
//! ```text
//! delta       = bonus × (max_strength − strength)
//! newStrength = min(max_strength, strength + delta)
//! ```
//!
//! The increment shrinks as strength approaches the ceiling, so repeated
//! events show diminishing returns and never overshoot it.

use chrono::{DateTime, Utc};
use lethe_core::config::StrengtheningConfig;
use lethe_core::models::{StrengtheningEvent, StrengtheningRecord};
use lethe_core::node::NeuralState;

/// Updated state plus the log entry for the event.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengtheningOutcome {
    pub state: NeuralState,
    pub record: StrengtheningRecord,
}

/// Saturating increment. Non-positive or non-finite bonuses give 0.
pub fn hebbian_delta(strength: f64, bonus: f64, max_strength: f64) -> f64 {
    if !bonus.is_finite() || bonus <= 0.0 || !strength.is_finite() {
        return 0.0;
    }
    (bonus.min(1.0) * (max_strength - strength)).max(0.0)
}

/// Strengthen `state` for `event` using `params`. The input is not modified.
///
/// A stored strength outside `[0, max_strength]` is clamped first and the
/// record reports the clamped value as `strength_before`.
pub fn strengthen_with(
    state: &NeuralState,
    event: StrengtheningEvent,
    now: DateTime<Utc>,
    params: &StrengtheningConfig,
) -> StrengtheningOutcome {
    let before = if state.strength.is_finite() {
        state.strength.clamp(0.0, params.max_strength)
    } else {
        0.0
    };
    let delta = hebbian_delta(before, params.bonus(event), params.max_strength);
    let after = (before + delta).min(params.max_strength);

    StrengtheningOutcome {
        state: NeuralState {
            strength: after,
            ..state.clone()
        },
        record: StrengtheningRecord {
            event,
            strength_before: before,
            strength_after: after,
            delta: (after - before).max(0.0),
            timestamp: now,
        },
    }
}

/// Strengthen under the global bonuses.
pub fn strengthen_node(
    state: &NeuralState,
    event: StrengtheningEvent,
    now: DateTime<Utc>,
) -> StrengtheningOutcome {
    strengthen_with(state, event, now, &StrengtheningConfig::GLOBAL)
}
