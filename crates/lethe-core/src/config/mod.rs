pub mod defaults;
mod deletion_config;
mod difficulty_config;
mod lifecycle_config;
mod section_config;
mod stability_config;
mod strengthening_config;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use deletion_config::{DeletionConfig, TrashConfig};
pub use difficulty_config::DifficultyConfig;
pub use lifecycle_config::LifecycleConfig;
pub use section_config::{builtin_sections, SectionDecayConfig, SectionRegistry};
pub use stability_config::StabilityConfig;
pub use strengthening_config::StrengtheningConfig;

use crate::errors::ConfigError;

/// Top-level engine configuration. Every section defaults independently, so a
/// partial TOML file only needs the keys it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LetheConfig {
    pub lifecycle: LifecycleConfig,
    pub stability: StabilityConfig,
    pub strengthening: StrengtheningConfig,
    pub difficulty: DifficultyConfig,
    pub deletion: DeletionConfig,
    pub trash: TrashConfig,
    /// Named section curves layered over the built-in presets.
    pub sections: BTreeMap<String, SectionDecayConfig>,
}

impl LetheConfig {
    /// Parse from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Check every section for out-of-range or inverted values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lifecycle.validate()?;
        self.stability.validate()?;
        self.strengthening.validate()?;
        self.difficulty.validate()?;
        self.deletion.validate()?;
        self.trash.validate()?;
        for (name, section) in &self.sections {
            section.validate(name)?;
        }
        Ok(())
    }

    /// Section lookup built from the presets plus `self.sections`.
    pub fn section_registry(&self) -> Result<SectionRegistry, ConfigError> {
        SectionRegistry::new(&self.sections)
    }
}

pub(crate) fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value,
            reason: "must be a finite positive number".into(),
        })
    }
}

pub(crate) fn check_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value,
            reason: "must be a finite non-negative number".into(),
        })
    }
}

pub(crate) fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value,
            reason: "must be within [0, 1]".into(),
        })
    }
}
