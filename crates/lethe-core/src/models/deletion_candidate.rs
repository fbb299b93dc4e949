use serde::{Deserialize, Serialize};

use crate::node::ContentCategory;

/// Independently evaluated exclusion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExclusionCheckResult {
    pub is_identity: bool,
    pub is_pinned: bool,
    pub has_active_links: bool,
    pub was_restored: bool,
    pub recently_searched: bool,
    /// OR of the five flags above.
    pub any_exclusion: bool,
}

impl ExclusionCheckResult {
    /// Build from the five flags, deriving `any_exclusion`.
    pub fn new(
        is_identity: bool,
        is_pinned: bool,
        has_active_links: bool,
        was_restored: bool,
        recently_searched: bool,
    ) -> Self {
        Self {
            is_identity,
            is_pinned,
            has_active_links,
            was_restored,
            recently_searched,
            any_exclusion: is_identity
                || is_pinned
                || has_active_links
                || was_restored
                || recently_searched,
        }
    }

    /// Human-readable labels of every triggered exclusion, in rule order.
    pub fn triggered(&self) -> Vec<&'static str> {
        [
            (self.is_identity, "identity content"),
            (self.is_pinned, "pinned"),
            (self.has_active_links, "linked from an active node"),
            (self.was_restored, "previously restored"),
            (self.recently_searched, "recently found in archive search"),
        ]
        .into_iter()
        .filter_map(|(hit, label)| hit.then_some(label))
        .collect()
    }
}

/// Deletion-candidacy decision for one archived node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletionCandidate {
    pub node_id: String,
    pub days_archived: f64,
    pub content_category: ContentCategory,
    pub exclusions: ExclusionCheckResult,
    pub is_candidate: bool,
    pub reason: String,
}
