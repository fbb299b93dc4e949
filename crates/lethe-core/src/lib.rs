//! # lethe-core
//!
//! Foundation crate for the Lethe forgetting engine.
//! Defines node state types, the constant category/section tables, config,
//! errors, collaborator traits, and payload validators.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod node;
pub mod traits;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use config::{LetheConfig, SectionDecayConfig};
pub use errors::{LetheError, LetheResult};
pub use node::{ContentCategory, ForgettingLifecycleState, NeuralState, NodeDecayInput, NodeType};
