use chrono::{DateTime, Duration, Utc};
use lethe_core::config::{DeletionConfig, LifecycleConfig};
use lethe_core::models::{DeletionCandidate, ExclusionCheckResult};
use lethe_core::node::{ContentCategory, NodeDecayInput};

/// Days a node has spent in ARCHIVED, derived from its dormancy.
pub fn days_archived(days_in_dormant: f64, thresholds: &LifecycleConfig) -> f64 {
    (days_in_dormant - thresholds.archive_days).max(0.0)
}

/// Whether an archive search hit is recent at `now`.
///
/// Strictly less than `recent_search_days`: a hit exactly that many days
/// old is no longer recent.
pub fn is_recent_search(
    last_hit: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    recent_search_days: i64,
) -> bool {
    match last_hit {
        Some(hit) => now - hit < Duration::days(recent_search_days),
        None => false,
    }
}

/// Evaluate each exclusion rule independently. Disabled rules never fire.
pub fn check_exclusions(
    input: &NodeDecayInput,
    now: DateTime<Utc>,
    rules: &DeletionConfig,
) -> ExclusionCheckResult {
    ExclusionCheckResult::new(
        rules.exclude_identity && input.content_category == ContentCategory::Identity,
        rules.exclude_pinned && input.pinned,
        rules.exclude_linked && input.active_inbound_link_count > 0,
        rules.exclude_restored && input.restore_count > 0,
        rules.exclude_recently_searched
            && is_recent_search(input.last_archive_search_hit, now, rules.recent_search_days),
    )
}

/// Screen an archived node for deletion.
///
/// A node is a candidate only when it has been archived for at least
/// `min_days_archived` and no exclusion fires. The reason lists every
/// triggered exclusion.
pub fn evaluate_deletion_candidate(
    input: &NodeDecayInput,
    days_archived: f64,
    now: DateTime<Utc>,
    rules: &DeletionConfig,
) -> DeletionCandidate {
    let exclusions = check_exclusions(input, now, rules);
    let old_enough = days_archived >= rules.min_days_archived;
    let is_candidate = old_enough && !exclusions.any_exclusion;

    let mut problems = Vec::new();
    if !old_enough {
        problems.push(format!(
            "archived {:.0} of {:.0} required days",
            days_archived.floor(),
            rules.min_days_archived
        ));
    }
    if exclusions.any_exclusion {
        problems.push(format!("excluded: {}", exclusions.triggered().join(", ")));
    }

    let reason = if is_candidate {
        format!(
            "archived {:.0} days with no exclusions",
            days_archived.floor()
        )
    } else {
        problems.join("; ")
    };

    DeletionCandidate {
        node_id: input.node_id.clone(),
        days_archived,
        content_category: input.content_category,
        exclusions,
        is_candidate,
        reason,
    }
}

/// Screen under the global rules.
pub fn is_deletion_candidate(
    input: &NodeDecayInput,
    days_archived: f64,
    now: DateTime<Utc>,
) -> DeletionCandidate {
    evaluate_deletion_candidate(input, days_archived, now, &DeletionConfig::GLOBAL)
}
