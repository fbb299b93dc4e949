use serde::{Deserialize, Serialize};

use super::defaults;
use super::check_unit_interval;
use crate::constants::MAX_STRENGTH;
use crate::errors::ConfigError;
use crate::models::StrengtheningEvent;

/// Per-event Hebbian bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengtheningConfig {
    pub direct_retrieval: f64,
    pub co_activation: f64,
    pub user_interaction: f64,
    pub external_reference: f64,
    /// Strength ceiling. Deltas shrink as strength approaches it.
    pub max_strength: f64,
    /// Strength assigned to a freshly promoted node.
    pub initial_strength: f64,
}

impl StrengtheningConfig {
    pub const GLOBAL: StrengtheningConfig = StrengtheningConfig {
        direct_retrieval: defaults::DEFAULT_DIRECT_RETRIEVAL_BONUS,
        co_activation: defaults::DEFAULT_CO_ACTIVATION_BONUS,
        user_interaction: defaults::DEFAULT_USER_INTERACTION_BONUS,
        external_reference: defaults::DEFAULT_EXTERNAL_REFERENCE_BONUS,
        max_strength: MAX_STRENGTH,
        initial_strength: defaults::DEFAULT_INITIAL_STRENGTH,
    };

    /// Bonus for an event type.
    pub fn bonus(&self, event: StrengtheningEvent) -> f64 {
        match event {
            StrengtheningEvent::DirectRetrieval => self.direct_retrieval,
            StrengtheningEvent::CoActivation => self.co_activation,
            StrengtheningEvent::UserInteraction => self.user_interaction,
            StrengtheningEvent::ExternalReference => self.external_reference,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_interval("strengthening.direct_retrieval", self.direct_retrieval)?;
        check_unit_interval("strengthening.co_activation", self.co_activation)?;
        check_unit_interval("strengthening.user_interaction", self.user_interaction)?;
        check_unit_interval("strengthening.external_reference", self.external_reference)?;
        check_unit_interval("strengthening.max_strength", self.max_strength)?;
        check_unit_interval("strengthening.initial_strength", self.initial_strength)?;
        if self.initial_strength > self.max_strength {
            return Err(ConfigError::InvertedThresholds {
                lower: "strengthening.initial_strength".into(),
                upper: "strengthening.max_strength".into(),
            });
        }
        Ok(())
    }
}

impl Default for StrengtheningConfig {
    fn default() -> Self {
        Self::GLOBAL
    }
}
