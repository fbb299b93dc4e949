use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::{check_positive, check_unit_interval, LifecycleConfig, StabilityConfig};
use crate::constants::DEFAULT_SECTION;
use crate::errors::ConfigError;

/// Per-section decay curve.
///
/// Substitutes for the global thresholds and growth parameters so that, for
/// example, ephemeral "signals" fade within days while "playbooks" persist
/// for months, without changing the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionDecayConfig {
    /// Initial stability for nodes created in this section. `None` keeps the
    /// content category's value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_stability_days: Option<f64>,
    pub growth_rate: f64,
    pub active_threshold: f64,
    pub weak_threshold: f64,
    pub max_stability_days: f64,
}

impl SectionDecayConfig {
    /// Mirrors the global curve and overrides nothing.
    pub const DEFAULT: SectionDecayConfig = SectionDecayConfig {
        initial_stability_days: None,
        growth_rate: StabilityConfig::GLOBAL.growth_rate,
        active_threshold: LifecycleConfig::GLOBAL.active_threshold,
        weak_threshold: LifecycleConfig::GLOBAL.weak_threshold,
        max_stability_days: StabilityConfig::GLOBAL.max_stability_days,
    };

    /// Short-lived observations: fast fade, slow growth, low cap.
    pub const SIGNALS: SectionDecayConfig = SectionDecayConfig {
        initial_stability_days: Some(0.5),
        growth_rate: 1.5,
        active_threshold: 0.6,
        weak_threshold: 0.2,
        max_stability_days: 30.0,
    };

    /// Durable procedures: long initial stability, fast growth, high cap.
    pub const PLAYBOOKS: SectionDecayConfig = SectionDecayConfig {
        initial_stability_days: Some(14.0),
        growth_rate: 3.0,
        active_threshold: 0.4,
        weak_threshold: 0.05,
        max_stability_days: 730.0,
    };

    /// Lifecycle thresholds for this section. Day windows come from `base`.
    pub fn lifecycle(&self, base: &LifecycleConfig) -> LifecycleConfig {
        LifecycleConfig {
            active_threshold: self.active_threshold,
            weak_threshold: self.weak_threshold,
            ..*base
        }
    }

    /// Stability growth parameters for this section.
    pub fn stability(&self) -> StabilityConfig {
        StabilityConfig {
            growth_rate: self.growth_rate,
            max_stability_days: self.max_stability_days,
        }
    }

    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let field = |f: &str| format!("sections.{name}.{f}");
        check_positive(&field("growth_rate"), self.growth_rate)?;
        check_positive(&field("max_stability_days"), self.max_stability_days)?;
        check_unit_interval(&field("active_threshold"), self.active_threshold)?;
        check_unit_interval(&field("weak_threshold"), self.weak_threshold)?;
        if self.weak_threshold >= self.active_threshold {
            return Err(ConfigError::InvertedThresholds {
                lower: field("weak_threshold"),
                upper: field("active_threshold"),
            });
        }
        if let Some(initial) = self.initial_stability_days {
            check_positive(&field("initial_stability_days"), initial)?;
            if initial > self.max_stability_days {
                return Err(ConfigError::InvertedThresholds {
                    lower: field("initial_stability_days"),
                    upper: field("max_stability_days"),
                });
            }
        }
        Ok(())
    }
}

/// Built-in section presets, constructed once per process.
pub fn builtin_sections() -> &'static BTreeMap<String, SectionDecayConfig> {
    static BUILTIN: OnceLock<BTreeMap<String, SectionDecayConfig>> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        BTreeMap::from([
            (DEFAULT_SECTION.to_string(), SectionDecayConfig::DEFAULT),
            ("signals".to_string(), SectionDecayConfig::SIGNALS),
            ("playbooks".to_string(), SectionDecayConfig::PLAYBOOKS),
        ])
    })
}

/// Immutable lookup of section curves: built-in presets overlaid with
/// configured sections.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: BTreeMap<String, SectionDecayConfig>,
}

impl SectionRegistry {
    /// Build from the built-in presets plus `overrides` (which win on name clash).
    pub fn new(overrides: &BTreeMap<String, SectionDecayConfig>) -> Result<Self, ConfigError> {
        let mut sections = builtin_sections().clone();
        for (name, section) in overrides {
            section.validate(name)?;
            sections.insert(name.clone(), *section);
        }
        Ok(Self { sections })
    }

    pub fn get(&self, name: &str) -> Option<&SectionDecayConfig> {
        self.sections.get(name)
    }

    /// Look up a section by name, failing on unknown names.
    pub fn resolve(&self, name: &str) -> Result<&SectionDecayConfig, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::UnknownSection {
            name: name.to_string(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self {
            sections: builtin_sections().clone(),
        }
    }
}
