//! Difficulty estimation.
//!
//! ```text
//! raw        = base
//!            + complexity × complexity_weight
//!            + reaccess_penalty × reaccess_weight
//!            − connection_bonus × connection_weight
//! reverted   = raw × (1 − mean_reversion_rate) + target × mean_reversion_rate
//! difficulty = clamp(reverted, min_difficulty, max_difficulty)
//! ```
//!
//! Mean reversion keeps estimates from drifting to the extremes ("ease hell").

pub mod complexity;

use lethe_core::config::DifficultyConfig;
use lethe_core::models::DifficultyFactors;
use lethe_core::node::ContentCategory;

pub use complexity::{analyze_complexity, ComplexityBreakdown};

/// Estimate difficulty with explicit parameters.
///
/// `complexity` is clamped to [0, 1]; a non-finite `avg_days_between_access`
/// is treated as "no re-access signal".
pub fn calculate_difficulty_with(
    category: ContentCategory,
    complexity: f64,
    avg_days_between_access: f64,
    edge_count: u32,
    params: &DifficultyConfig,
) -> DifficultyFactors {
    let base = category.initial_params().base_difficulty;
    let complexity = if complexity.is_nan() { 0.0 } else { complexity.clamp(0.0, 1.0) };

    let reaccess_penalty = if avg_days_between_access.is_finite()
        && avg_days_between_access < params.reaccess_penalty_threshold_days
    {
        params.reaccess_penalty
    } else {
        0.0
    };

    let connection_bonus =
        (f64::from(edge_count) * params.connection_bonus_per_edge).min(params.max_connection_bonus);

    let raw = base + complexity * params.complexity_weight
        + reaccess_penalty * params.reaccess_weight
        - connection_bonus * params.connection_weight;

    let reverted = raw * (1.0 - params.mean_reversion_rate)
        + params.target_difficulty * params.mean_reversion_rate;

    DifficultyFactors {
        base,
        complexity,
        reaccess_penalty,
        connection_bonus,
        calculated: params.clamp(reverted),
    }
}

/// Estimate difficulty under the global parameters.
pub fn calculate_difficulty(
    category: ContentCategory,
    complexity: f64,
    avg_days_between_access: f64,
    edge_count: u32,
) -> DifficultyFactors {
    calculate_difficulty_with(
        category,
        complexity,
        avg_days_between_access,
        edge_count,
        &DifficultyConfig::GLOBAL,
    )
}

/// Estimate difficulty straight from content text.
pub fn difficulty_for_content(
    category: ContentCategory,
    content: &str,
    avg_days_between_access: f64,
    edge_count: u32,
    params: &DifficultyConfig,
) -> DifficultyFactors {
    calculate_difficulty_with(
        category,
        analyze_complexity(content),
        avg_days_between_access,
        edge_count,
        params,
    )
}
