use serde::{Deserialize, Serialize};

/// Outcome of a stability update on access.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityUpdate {
    pub stability_before: f64,
    pub stability_after: f64,
    /// `growth_rate × (1 − difficulty × 0.5)`.
    pub growth_factor: f64,
    /// True when `max_stability_days` clipped the result.
    pub capped: bool,
    /// Retrievability the node should carry after this access. Always 1.0.
    pub retrievability_reset: f64,
}
