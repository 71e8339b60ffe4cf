//! Consolidating saved draft versions into one entry per event.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::group_key::compute_enhanced_draft_group_key;
use crate::model::DraftInput;

/// Drafts that share a group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftGroup {
    /// Shared group key.
    pub key: String,
    /// Input positions of every draft in the group, in input order.
    pub members: Vec<usize>,
    /// Input position of the most recently saved draft.
    pub latest: usize,
}

impl DraftGroup {
    /// Number of saved versions in this group.
    pub fn version_count(&self) -> usize {
        self.members.len()
    }

    /// Input positions of the versions superseded by `latest`.
    pub fn superseded(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied().filter(move |i| *i != self.latest)
    }
}

/// Group drafts by their enhanced group key.
///
/// Groups appear in the order their first member appears. The latest
/// version is the one with the newest `updated_at`; drafts without a
/// readable timestamp count as oldest, and ties go to the later input.
pub fn consolidate_drafts(drafts: &[DraftInput]) -> Vec<DraftGroup> {
    let mut groups: Vec<DraftGroup> = Vec::new();
    let mut latest_seen: Vec<Option<DateTime<Utc>>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (position, draft) in drafts.iter().enumerate() {
        let key = compute_enhanced_draft_group_key(draft);
        let saved_at = draft.updated_at.as_deref().and_then(parse_timestamp);

        match index.get(&key) {
            Some(&g) => {
                groups[g].members.push(position);
                if saved_at >= latest_seen[g] {
                    groups[g].latest = position;
                    latest_seen[g] = saved_at;
                }
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(DraftGroup {
                    key,
                    members: vec![position],
                    latest: position,
                });
                latest_seen.push(saved_at);
            }
        }
    }

    debug!("Consolidated {} draft(s) into {} group(s)", drafts.len(), groups.len());

    groups
}

/// Read a save timestamp, treating offset-less values as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Postgres text output, e.g. "2025-05-01 10:00:00.123+00"
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc())
}
