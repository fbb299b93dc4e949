use serde::{Deserialize, Serialize};

/// Breakdown of a difficulty estimate. Reproducible from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyFactors {
    /// Category base difficulty.
    pub base: f64,
    /// Content complexity input, 0.0–1.0.
    pub complexity: f64,
    /// Penalty for rapid re-access (0 when cadence is slow enough).
    pub reaccess_penalty: f64,
    /// Connectivity bonus, capped.
    pub connection_bonus: f64,
    /// Final difficulty after mean reversion and clamping.
    pub calculated: f64,
}
