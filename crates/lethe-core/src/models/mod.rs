mod decay_job_result;
mod deletion_candidate;
mod difficulty_factors;
mod lifecycle_determination;
mod stability_update;
mod strengthening_record;
mod trash_record;

pub use decay_job_result::{DecayJobResult, NodeDecayUpdate, StateTransition};
pub use deletion_candidate::{DeletionCandidate, ExclusionCheckResult};
pub use difficulty_factors::DifficultyFactors;
pub use lifecycle_determination::LifecycleDetermination;
pub use stability_update::StabilityUpdate;
pub use strengthening_record::{StrengtheningEvent, StrengtheningRecord};
pub use trash_record::{TrashInitiator, TrashRecord};
