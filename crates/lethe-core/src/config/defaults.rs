//! Default values for every configurable parameter.

// Lifecycle
pub const DEFAULT_ACTIVE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_WEAK_THRESHOLD: f64 = 0.1;
pub const DEFAULT_DORMANT_DAYS: f64 = 60.0;
pub const DEFAULT_COMPRESS_DAYS: f64 = 120.0;
pub const DEFAULT_ARCHIVE_DAYS: f64 = 180.0;
/// `archive_days + min_days_archived`.
pub const DEFAULT_DELETION_CANDIDATE_DAYS: f64 = 545.0;

// Stability
pub const DEFAULT_GROWTH_RATE: f64 = 2.5;
pub const DEFAULT_MAX_STABILITY_DAYS: f64 = 365.0;

// Strengthening
pub const DEFAULT_DIRECT_RETRIEVAL_BONUS: f64 = 0.10;
pub const DEFAULT_CO_ACTIVATION_BONUS: f64 = 0.03;
pub const DEFAULT_USER_INTERACTION_BONUS: f64 = 0.15;
pub const DEFAULT_EXTERNAL_REFERENCE_BONUS: f64 = 0.05;
pub const DEFAULT_INITIAL_STRENGTH: f64 = 0.5;

// Difficulty
pub const DEFAULT_COMPLEXITY_WEIGHT: f64 = 0.3;
pub const DEFAULT_REACCESS_PENALTY: f64 = 0.1;
pub const DEFAULT_REACCESS_PENALTY_THRESHOLD_DAYS: f64 = 1.0;
pub const DEFAULT_REACCESS_WEIGHT: f64 = 1.0;
pub const DEFAULT_CONNECTION_BONUS_PER_EDGE: f64 = 0.01;
pub const DEFAULT_MAX_CONNECTION_BONUS: f64 = 0.2;
pub const DEFAULT_CONNECTION_WEIGHT: f64 = 1.0;
pub const DEFAULT_MEAN_REVERSION_RATE: f64 = 0.1;
pub const DEFAULT_TARGET_DIFFICULTY: f64 = 0.3;
pub const DEFAULT_MIN_DIFFICULTY: f64 = 0.05;
pub const DEFAULT_MAX_DIFFICULTY: f64 = 0.95;

// Deletion
pub const DEFAULT_MIN_DAYS_ARCHIVED: f64 = 365.0;
pub const DEFAULT_RECENT_SEARCH_DAYS: i64 = 180;

// Trash
pub const DEFAULT_TRASH_BUFFER_DAYS: i64 = 30;
