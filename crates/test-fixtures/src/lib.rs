//! Test fixtures for the Lethe crates: JSON population loader, node builders,
//! an in-memory node store, and test tracing setup.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use lethe_core::errors::{LetheResult, StoreError};
use lethe_core::models::{StateTransition, TrashRecord};
use lethe_core::node::{ContentCategory, ForgettingLifecycleState, NeuralState, NodeDecayInput};
use lethe_core::traits::INodeStore;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A node population with the decay-cycle outcome expected at `now`.
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationFixture {
    pub now: DateTime<Utc>,
    pub nodes: Vec<NodeDecayInput>,
    pub expected: ExpectedCycle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedCycle {
    pub evaluated: usize,
    pub errors: usize,
    pub compressed: usize,
    pub archived: usize,
    pub deletion_flagged: usize,
    pub transitions: Vec<StateTransition>,
}

/// The mixed population covering every lifecycle rung.
pub fn mixed_population() -> PopulationFixture {
    load_fixture("mixed_population.json")
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Fixed reference instant used across tests.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("reference timestamp is ambiguous"))
}

/// Random node id.
pub fn node_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Neural state last accessed `days_ago` before `now`.
pub fn neural_state(
    stability: f64,
    days_ago: f64,
    lifecycle_state: ForgettingLifecycleState,
    now: DateTime<Utc>,
) -> NeuralState {
    NeuralState {
        stability,
        retrievability: 1.0,
        strength: 0.5,
        difficulty: 0.3,
        last_accessed: now - Duration::milliseconds((days_ago * 86_400_000.0) as i64),
        access_count: 1,
        lifecycle_state,
        days_in_dormant: 0.0,
    }
}

/// Decay input with no exclusions and the global curve.
pub fn node_input(id: &str, content_category: ContentCategory, state: NeuralState) -> NodeDecayInput {
    NodeDecayInput {
        node_id: id.to_string(),
        content_category,
        state,
        pinned: false,
        restore_count: 0,
        last_archive_search_hit: None,
        active_inbound_link_count: 0,
        section: None,
    }
}

/// `count` general-category nodes spread evenly across `max_days_ago` days
/// of inactivity, stored in the state their age implies.
pub fn spread_population(count: usize, max_days_ago: f64, now: DateTime<Utc>) -> Vec<NodeDecayInput> {
    (0..count)
        .map(|i| {
            let days = max_days_ago * i as f64 / count.max(1) as f64;
            let stored = match days {
                d if d < 6.5 => ForgettingLifecycleState::Active,
                d if d < 21.8 => ForgettingLifecycleState::Weak,
                d if d < 141.8 => ForgettingLifecycleState::Dormant,
                d if d < 201.8 => ForgettingLifecycleState::Summarized,
                _ => ForgettingLifecycleState::Archived,
            };
            node_input(
                &format!("node-{i:05}"),
                ContentCategory::General,
                neural_state(1.0, days, stored, now),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Node store that records calls and fails for configured ids.
#[derive(Debug, Default)]
pub struct InMemoryNodeStore {
    deleted: Mutex<Vec<String>>,
    restored: Mutex<Vec<String>>,
    failing: BTreeSet<String>,
}

impl InMemoryNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose delete and restore calls fail for `ids`.
    pub fn failing_on(ids: &[&str]) -> Self {
        Self {
            failing: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn restored(&self) -> Vec<String> {
        self.restored.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl INodeStore for InMemoryNodeStore {
    fn delete_node(&self, record: &TrashRecord) -> LetheResult<()> {
        if self.failing.contains(&record.node_id) {
            return Err(StoreError::DeleteFailed {
                node_id: record.node_id.clone(),
                reason: "simulated storage failure".into(),
            }
            .into());
        }
        if let Ok(mut deleted) = self.deleted.lock() {
            deleted.push(record.node_id.clone());
        }
        Ok(())
    }

    fn restore_node(&self, record: &TrashRecord) -> LetheResult<()> {
        if self.failing.contains(&record.node_id) {
            return Err(StoreError::RestoreFailed {
                node_id: record.node_id.clone(),
                reason: "simulated storage failure".into(),
            }
            .into());
        }
        if let Ok(mut restored) = self.restored.lock() {
            restored.push(record.node_id.clone());
        }
        Ok(())
    }
}

/// Install a test-writer tracing subscriber. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_population_fixture_exists() {
        assert!(fixture_exists("mixed_population.json"));
    }

    #[test]
    fn mixed_population_parses() {
        let fixture = mixed_population();
        assert_eq!(fixture.nodes.len(), 10);
        assert_eq!(fixture.now, reference_now());
        assert_eq!(
            fixture.expected.evaluated + fixture.expected.errors,
            fixture.nodes.len()
        );
    }

    #[test]
    fn neural_state_sets_last_access() {
        let now = reference_now();
        let state = neural_state(3.0, 2.5, ForgettingLifecycleState::Active, now);
        assert!((state.days_since_access(now) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn spread_population_has_unique_ids() {
        let nodes = spread_population(100, 400.0, reference_now());
        let ids: BTreeSet<_> = nodes.iter().map(|n| n.node_id.clone()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn failing_store_reports_delete_failure() {
        let store = InMemoryNodeStore::failing_on(&["bad"]);
        let record = TrashRecord {
            node_id: "bad".into(),
            trashed_at: reference_now(),
            auto_delete_at: reference_now(),
            reason: "test".into(),
            initiator: lethe_core::models::TrashInitiator::System,
        };
        assert!(store.delete_node(&record).is_err());
        assert!(store.deleted().is_empty());
    }
}
