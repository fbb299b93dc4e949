use serde::{Deserialize, Serialize};

use super::defaults;
use super::{check_non_negative, check_unit_interval};
use crate::errors::ConfigError;

/// Difficulty estimator weights and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub complexity_weight: f64,
    /// Penalty applied when re-access cadence is faster than the threshold.
    pub reaccess_penalty: f64,
    pub reaccess_penalty_threshold_days: f64,
    pub reaccess_weight: f64,
    pub connection_bonus_per_edge: f64,
    pub max_connection_bonus: f64,
    pub connection_weight: f64,
    /// Share of the target blended into every estimate.
    pub mean_reversion_rate: f64,
    pub target_difficulty: f64,
    pub min_difficulty: f64,
    pub max_difficulty: f64,
}

impl DifficultyConfig {
    pub const GLOBAL: DifficultyConfig = DifficultyConfig {
        complexity_weight: defaults::DEFAULT_COMPLEXITY_WEIGHT,
        reaccess_penalty: defaults::DEFAULT_REACCESS_PENALTY,
        reaccess_penalty_threshold_days: defaults::DEFAULT_REACCESS_PENALTY_THRESHOLD_DAYS,
        reaccess_weight: defaults::DEFAULT_REACCESS_WEIGHT,
        connection_bonus_per_edge: defaults::DEFAULT_CONNECTION_BONUS_PER_EDGE,
        max_connection_bonus: defaults::DEFAULT_MAX_CONNECTION_BONUS,
        connection_weight: defaults::DEFAULT_CONNECTION_WEIGHT,
        mean_reversion_rate: defaults::DEFAULT_MEAN_REVERSION_RATE,
        target_difficulty: defaults::DEFAULT_TARGET_DIFFICULTY,
        min_difficulty: defaults::DEFAULT_MIN_DIFFICULTY,
        max_difficulty: defaults::DEFAULT_MAX_DIFFICULTY,
    };

    /// Clamp a raw value into `[min_difficulty, max_difficulty]`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.target_difficulty.clamp(self.min_difficulty, self.max_difficulty);
        }
        value.clamp(self.min_difficulty, self.max_difficulty)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("difficulty.complexity_weight", self.complexity_weight)?;
        check_non_negative("difficulty.reaccess_penalty", self.reaccess_penalty)?;
        check_non_negative(
            "difficulty.reaccess_penalty_threshold_days",
            self.reaccess_penalty_threshold_days,
        )?;
        check_non_negative("difficulty.reaccess_weight", self.reaccess_weight)?;
        check_non_negative(
            "difficulty.connection_bonus_per_edge",
            self.connection_bonus_per_edge,
        )?;
        check_non_negative("difficulty.max_connection_bonus", self.max_connection_bonus)?;
        check_non_negative("difficulty.connection_weight", self.connection_weight)?;
        check_unit_interval("difficulty.mean_reversion_rate", self.mean_reversion_rate)?;
        check_unit_interval("difficulty.min_difficulty", self.min_difficulty)?;
        check_unit_interval("difficulty.max_difficulty", self.max_difficulty)?;
        if self.min_difficulty > self.max_difficulty {
            return Err(ConfigError::InvertedThresholds {
                lower: "difficulty.min_difficulty".into(),
                upper: "difficulty.max_difficulty".into(),
            });
        }
        if !(self.min_difficulty..=self.max_difficulty).contains(&self.target_difficulty) {
            return Err(ConfigError::OutOfRange {
                field: "difficulty.target_difficulty".into(),
                value: self.target_difficulty,
                reason: "must lie within [min_difficulty, max_difficulty]".into(),
            });
        }
        Ok(())
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::GLOBAL
    }
}
