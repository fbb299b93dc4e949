//! Trash buffer bookkeeping.
//!
//! Trashing only stamps a record. Permanent deletion and restoration go
//! through an injected [`INodeStore`].

use chrono::{DateTime, Duration, Utc};
use lethe_core::config::TrashConfig;
use lethe_core::errors::{LetheResult, StoreError};
use lethe_core::models::{TrashInitiator, TrashRecord};
use lethe_core::traits::INodeStore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Stamp a trash record for `node_id`. Performs no deletion.
pub fn move_to_trash_with(
    node_id: &str,
    reason: &str,
    initiator: TrashInitiator,
    now: DateTime<Utc>,
    params: &TrashConfig,
) -> TrashRecord {
    let record = TrashRecord {
        node_id: node_id.to_string(),
        trashed_at: now,
        auto_delete_at: now + Duration::days(params.buffer_days),
        reason: reason.to_string(),
        initiator,
    };
    info!(
        node_id = %record.node_id,
        initiator = %record.initiator,
        auto_delete_at = %record.auto_delete_at,
        "moved node to trash"
    );
    record
}

/// Stamp a trash record with the default 30-day buffer.
pub fn move_to_trash(
    node_id: &str,
    reason: &str,
    initiator: TrashInitiator,
    now: DateTime<Utc>,
) -> TrashRecord {
    move_to_trash_with(node_id, reason, initiator, now, &TrashConfig::GLOBAL)
}

/// Outcome of a purge over the trash buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurgeReport {
    /// Node ids permanently deleted.
    pub deleted: Vec<String>,
    /// Records still inside their buffer, or whose deletion failed.
    pub retained: Vec<TrashRecord>,
    /// `"<node_id>: <message>"` for every failed deletion.
    pub errors: Vec<String>,
}

/// Permanently delete every record whose buffer has elapsed at `now`.
///
/// Failures are collected and the record is retained for the next sweep.
pub fn purge_expired(
    records: &[TrashRecord],
    store: &dyn INodeStore,
    now: DateTime<Utc>,
) -> PurgeReport {
    let _span = crate::trash_purge_span!(records.len()).entered();
    let mut report = PurgeReport::default();
    for record in records {
        if !record.is_expired(now) {
            report.retained.push(record.clone());
            continue;
        }
        match store.delete_node(record) {
            Ok(()) => {
                info!(node_id = %record.node_id, "auto-deleted trashed node");
                report.deleted.push(record.node_id.clone());
            }
            Err(e) => {
                warn!(node_id = %record.node_id, error = %e, "trash purge failed");
                report.errors.push(format!("{}: {e}", record.node_id));
                report.retained.push(record.clone());
            }
        }
    }
    report
}

/// Restore a trashed node while its buffer is still open.
pub fn restore_from_trash(
    record: &TrashRecord,
    store: &dyn INodeStore,
    now: DateTime<Utc>,
) -> LetheResult<()> {
    if record.is_expired(now) {
        return Err(StoreError::RestoreFailed {
            node_id: record.node_id.clone(),
            reason: format!("trash buffer expired at {}", record.auto_delete_at),
        }
        .into());
    }
    store.restore_node(record)?;
    info!(node_id = %record.node_id, "restored node from trash");
    Ok(())
}
