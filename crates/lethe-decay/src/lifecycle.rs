//! Lifecycle state machine.
//!
//! A single parameterized implementation. The global curve is
//! [`LifecycleConfig::GLOBAL`]; section curves substitute their own
//! retrievability thresholds via [`SectionDecayConfig::lifecycle`].
//!
//! Decision order for `(R, daysDormant)`:
//!
//! ```text
//! R > active_threshold                    → ACTIVE
//! R > weak_threshold                      → WEAK
//! daysDormant <  compress_days            → DORMANT
//! daysDormant <  archive_days             → SUMMARIZED
//! otherwise                               → ARCHIVED
//! ```
//!
//! Both retrievability boundaries are exclusive: `R == 0.5` is WEAK and
//! `R == 0.1` is DORMANT. `dormant_days` takes no part in the ladder; the
//! `[compress_days, archive_days)` window always maps to SUMMARIZED.

use chrono::{DateTime, Utc};
use lethe_core::config::{LifecycleConfig, SectionDecayConfig};
use lethe_core::models::LifecycleDetermination;
use lethe_core::node::{ForgettingLifecycleState, NeuralState};

use crate::retrievability::{calculate_retrievability, days_below_threshold};

/// Map retrievability and days spent below the weak threshold to a state.
pub fn determine_state(
    retrievability: f64,
    days_dormant: f64,
    thresholds: &LifecycleConfig,
) -> ForgettingLifecycleState {
    if retrievability > thresholds.active_threshold {
        ForgettingLifecycleState::Active
    } else if retrievability > thresholds.weak_threshold {
        ForgettingLifecycleState::Weak
    } else if days_dormant < thresholds.compress_days {
        ForgettingLifecycleState::Dormant
    } else if days_dormant < thresholds.archive_days {
        ForgettingLifecycleState::Summarized
    } else {
        ForgettingLifecycleState::Archived
    }
}

/// State under the global thresholds.
pub fn get_decay_lifecycle_state(retrievability: f64, days_dormant: f64) -> ForgettingLifecycleState {
    determine_state(retrievability, days_dormant, &LifecycleConfig::GLOBAL)
}

/// State under a section's curve; day windows stay global.
pub fn get_section_lifecycle_state(
    retrievability: f64,
    days_dormant: f64,
    section: &SectionDecayConfig,
) -> ForgettingLifecycleState {
    determine_state(
        retrievability,
        days_dormant,
        &section.lifecycle(&LifecycleConfig::GLOBAL),
    )
}

/// Full lifecycle determination for a node at `now`.
///
/// Retrievability and dormancy are recomputed from `stability` and
/// `last_accessed`; the cached fields on `state` are ignored. Nodes in an
/// explicit-action state (deletion candidate, trash, deleted) keep it.
pub fn determine_lifecycle(
    state: &NeuralState,
    now: DateTime<Utc>,
    thresholds: &LifecycleConfig,
) -> LifecycleDetermination {
    let days_since_access = state.days_since_access(now);
    let retrievability = calculate_retrievability(state.stability, days_since_access);
    let days_in_dormant =
        days_below_threshold(state.stability, days_since_access, thresholds.weak_threshold);

    let previous = state.lifecycle_state;
    let next = if previous.is_explicit_action_state() {
        previous
    } else {
        determine_state(retrievability, days_in_dormant, thresholds)
    };

    LifecycleDetermination {
        previous_state: previous,
        state: next,
        retrievability,
        days_since_access,
        days_in_dormant,
        compression_eligible: previous < ForgettingLifecycleState::Summarized
            && matches!(
                next,
                ForgettingLifecycleState::Summarized | ForgettingLifecycleState::Archived
            ),
        archive_eligible: previous < ForgettingLifecycleState::Archived
            && next == ForgettingLifecycleState::Archived,
        deletion_candidate_eligible: previous.is_decay_state()
            && next == ForgettingLifecycleState::Archived
            && days_in_dormant >= thresholds.deletion_candidate_days,
    }
}

/// [`determine_lifecycle`] under a section's curve.
pub fn determine_section_lifecycle(
    state: &NeuralState,
    now: DateTime<Utc>,
    section: &SectionDecayConfig,
    base: &LifecycleConfig,
) -> LifecycleDetermination {
    determine_lifecycle(state, now, &section.lifecycle(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_window_is_not_shadowed_by_dormant_days() {
        // 90 days sits past dormant_days (60) but before compress_days (120).
        assert_eq!(
            get_decay_lifecycle_state(0.05, 90.0),
            ForgettingLifecycleState::Dormant
        );
        // 130 days sits in the compress window regardless of dormant_days.
        assert_eq!(
            get_decay_lifecycle_state(0.05, 130.0),
            ForgettingLifecycleState::Summarized
        );
    }
}
