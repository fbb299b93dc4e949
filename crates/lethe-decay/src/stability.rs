use chrono::{DateTime, Utc};
use lethe_core::config::{SectionDecayConfig, StabilityConfig};
use lethe_core::constants::DIFFICULTY_DAMPENING;
use lethe_core::models::StabilityUpdate;
use lethe_core::node::{ForgettingLifecycleState, NeuralState};

/// Stability growth on access.
///
/// ```text
/// growth    = growth_rate × (1 − difficulty × 0.5)
/// stability = min(max_stability_days, stability × growth)
/// ```
///
/// Difficulty is clamped to [0, 1] so growth never drops below half the
/// configured rate. Retrievability resets to 1.0 after any access.
pub fn update_stability_with(
    stability: f64,
    difficulty: f64,
    params: &StabilityConfig,
) -> StabilityUpdate {
    let difficulty = if difficulty.is_nan() { 0.0 } else { difficulty.clamp(0.0, 1.0) };
    let growth_factor = params.growth_rate * (1.0 - difficulty * DIFFICULTY_DAMPENING);
    let grown = stability.max(0.0) * growth_factor;
    let capped = grown > params.max_stability_days;

    StabilityUpdate {
        stability_before: stability,
        stability_after: if capped { params.max_stability_days } else { grown },
        growth_factor,
        capped,
        retrievability_reset: 1.0,
    }
}

/// Stability growth under the global parameters.
pub fn update_stability_on_access(stability: f64, difficulty: f64) -> StabilityUpdate {
    update_stability_with(stability, difficulty, &StabilityConfig::GLOBAL)
}

/// Stability growth under a section's parameters.
pub fn update_section_stability_on_access(
    stability: f64,
    difficulty: f64,
    section: &SectionDecayConfig,
) -> StabilityUpdate {
    update_stability_with(stability, difficulty, &section.stability())
}

/// Apply an access to `state`: grow stability, bump the access counter, and
/// bring the node back to ACTIVE with full retrievability.
pub fn record_access(
    state: &NeuralState,
    now: DateTime<Utc>,
    params: &StabilityConfig,
) -> (NeuralState, StabilityUpdate) {
    let update = update_stability_with(state.stability, state.difficulty, params);
    let next = NeuralState {
        stability: update.stability_after,
        retrievability: update.retrievability_reset,
        last_accessed: now,
        access_count: state.access_count.saturating_add(1),
        lifecycle_state: ForgettingLifecycleState::Active,
        days_in_dormant: 0.0,
        ..state.clone()
    };
    (next, update)
}
