use lethe_core::constants::TARGET_RECALL;

/// Recall probability after `days_since_access` days.
///
/// ```text
/// R = 0.9 ^ (daysSinceAccess / stability)
/// ```
///
/// `R == 0.9` exactly when elapsed time equals stability.
/// Non-positive stability yields 0; non-positive elapsed time yields 1.
pub fn calculate_retrievability(stability: f64, days_since_access: f64) -> f64 {
    if stability.is_nan() || stability <= 0.0 {
        return 0.0;
    }
    if days_since_access.is_nan() || days_since_access <= 0.0 {
        return 1.0;
    }
    TARGET_RECALL.powf(days_since_access / stability).clamp(0.0, 1.0)
}

/// Elapsed days at which retrievability reaches `threshold`.
///
/// Returns `None` when the curve never reaches the threshold (threshold ≤ 0
/// with positive stability).
pub fn days_until_threshold(stability: f64, threshold: f64) -> Option<f64> {
    if stability.is_nan() || stability <= 0.0 || threshold >= 1.0 {
        return Some(0.0);
    }
    if threshold.is_nan() || threshold <= 0.0 {
        return None;
    }
    Some(stability * threshold.ln() / TARGET_RECALL.ln())
}

/// Days spent at or below `threshold`, derived from stability and elapsed
/// time rather than from a stored counter.
pub fn days_below_threshold(stability: f64, days_since_access: f64, threshold: f64) -> f64 {
    let elapsed = days_since_access.max(0.0);
    match days_until_threshold(stability, threshold) {
        Some(crossing) => (elapsed - crossing).max(0.0),
        None => 0.0,
    }
}
