use crate::errors::{LetheResult, StoreError};
use crate::models::TrashRecord;

/// Storage capability for the destructive and restorative side of the trash
/// lifecycle. The decay engine never talks to storage except through this.
pub trait INodeStore: Send + Sync {
    /// Permanently delete a trashed node.
    fn delete_node(&self, record: &TrashRecord) -> LetheResult<()>;

    /// Restore a trashed node to the live pool.
    fn restore_node(&self, record: &TrashRecord) -> LetheResult<()>;
}

/// Placeholder store for callers that have not wired persistence yet.
/// Every operation reports [`StoreError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedNodeStore;

impl INodeStore for DetachedNodeStore {
    fn delete_node(&self, _record: &TrashRecord) -> LetheResult<()> {
        Err(StoreError::Unavailable {
            operation: "permanent deletion".into(),
        }
        .into())
    }

    fn restore_node(&self, _record: &TrashRecord) -> LetheResult<()> {
        Err(StoreError::Unavailable {
            operation: "restoration".into(),
        }
        .into())
    }
}
