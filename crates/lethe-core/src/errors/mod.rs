mod config_error;
mod store_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;

/// Top-level error for the Lethe engine.
///
/// Data-level problems inside a batch run never surface as this type; they are
/// stringified into the job result. This is for invocation-level misuse and
/// for the node-store capability.
#[derive(Debug, thiserror::Error)]
pub enum LetheError {
    #[error("invalid neural state for node {node_id}: {reason}")]
    InvalidNodeState { node_id: String, reason: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("node store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type LetheResult<T> = Result<T, LetheError>;
