/// Errors surfaced by an [`INodeStore`](crate::traits::INodeStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("node store does not support {operation}")]
    Unavailable { operation: String },

    #[error("failed to delete node {node_id}: {reason}")]
    DeleteFailed { node_id: String, reason: String },

    #[error("failed to restore node {node_id}: {reason}")]
    RestoreFailed { node_id: String, reason: String },
}
