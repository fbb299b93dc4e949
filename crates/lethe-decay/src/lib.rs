//! # lethe-decay
//!
//! FSRS-style forgetting curves over knowledge-store nodes: retrievability,
//! the lifecycle state machine, stability growth, Hebbian strengthening,
//! difficulty estimation, deletion screening, trash bookkeeping, and the
//! batch decay cycle. Pure computation; persistence belongs to the caller.

pub mod deletion;
pub mod difficulty;
pub mod engine;
pub mod job;
pub mod lifecycle;
pub mod retrievability;
pub mod spans;
pub mod stability;
pub mod state;
pub mod strengthening;
pub mod trash;

pub use deletion::{check_exclusions, evaluate_deletion_candidate, is_deletion_candidate};
pub use difficulty::{analyze_complexity, calculate_difficulty, calculate_difficulty_with};
pub use engine::{determine_lifecycle, run_decay_cycle, DecayEngine};
pub use job::DecayJob;
pub use lifecycle::{determine_state, get_decay_lifecycle_state, get_section_lifecycle_state};
pub use retrievability::calculate_retrievability;
pub use stability::{record_access, update_section_stability_on_access, update_stability_on_access};
pub use state::{create_neural_state, NeuralStateOptions};
pub use strengthening::{strengthen_node, StrengtheningOutcome};
pub use trash::{move_to_trash, purge_expired, restore_from_trash, PurgeReport};
