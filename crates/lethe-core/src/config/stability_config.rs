use serde::{Deserialize, Serialize};

use super::check_positive;
use super::defaults;
use crate::errors::ConfigError;

/// Stability growth parameters applied on every access.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityConfig {
    /// Multiplier applied to stability on access before difficulty dampening.
    pub growth_rate: f64,
    /// Hard cap on stability, in days.
    pub max_stability_days: f64,
}

impl StabilityConfig {
    /// The global growth curve.
    pub const GLOBAL: StabilityConfig = StabilityConfig {
        growth_rate: defaults::DEFAULT_GROWTH_RATE,
        max_stability_days: defaults::DEFAULT_MAX_STABILITY_DAYS,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("stability.growth_rate", self.growth_rate)?;
        check_positive("stability.max_stability_days", self.max_stability_days)
    }
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self::GLOBAL
    }
}
