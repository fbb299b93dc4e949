use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::ContentCategory;
use super::neural_state::NeuralState;

/// Read-only snapshot handed to a single decay evaluation.
///
/// Supplied fresh by the storage layer on every run; the engine keeps nothing
/// between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDecayInput {
    pub node_id: String,
    pub content_category: ContentCategory,
    pub state: NeuralState,
    #[serde(default)]
    pub pinned: bool,
    /// Times this node was restored from archive or trash.
    #[serde(default)]
    pub restore_count: u32,
    /// Last time an archive search surfaced this node.
    #[serde(default)]
    pub last_archive_search_hit: Option<DateTime<Utc>>,
    /// Inbound links from nodes that are still ACTIVE.
    #[serde(default)]
    pub active_inbound_link_count: u32,
    /// Section whose decay curve applies. `None` uses the global curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}
