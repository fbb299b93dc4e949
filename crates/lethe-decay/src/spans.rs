//! Span definitions for decay operations.

/// Span wrapping one decay-cycle run.
#[macro_export]
macro_rules! decay_cycle_span {
    ($node_count:expr) => {
        tracing::info_span!("lethe.decay_cycle", node_count = $node_count)
    };
}

/// Span wrapping one trash purge.
#[macro_export]
macro_rules! trash_purge_span {
    ($record_count:expr) => {
        tracing::info_span!("lethe.trash_purge", record_count = $record_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DECAY_CYCLE: &str = "lethe.decay_cycle";
    pub const TRASH_PURGE: &str = "lethe.trash_purge";
}
