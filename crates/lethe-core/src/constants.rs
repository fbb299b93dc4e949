/// Lethe engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Recall probability at `elapsed == stability`. Stability is defined as the
/// number of days until recall drops to this value.
pub const TARGET_RECALL: f64 = 0.9;

/// Seconds per day, for converting timestamps into fractional days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Upper bound on `strength`.
pub const MAX_STRENGTH: f64 = 1.0;

/// Difficulty dampening applied to stability growth: `1 - difficulty × this`.
pub const DIFFICULTY_DAMPENING: f64 = 0.5;

/// Name of the built-in section that mirrors the global decay curve.
pub const DEFAULT_SECTION: &str = "default";
