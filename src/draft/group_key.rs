//! Stable keys for grouping saved draft versions of the same event.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::UNGROUPED_KEY;
use crate::model::DraftInput;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Normalize a draft date to `YYYY-MM-DD`; unreadable dates become empty.
///
/// Timestamps with an offset are converted to their UTC calendar date.
pub fn normalize_draft_date(raw: &str) -> String {
    parse_draft_date(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_draft_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

fn normalize_text(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Join the non-empty parts with `|`, or return the ungrouped key.
fn join_parts(parts: &[&str]) -> String {
    let key = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("|");

    if key.is_empty() {
        UNGROUPED_KEY.to_string()
    } else {
        key
    }
}

/// Group key from name, date and location alone.
pub fn compute_draft_group_key(name: &str, date: &str, location: &str) -> String {
    let name = normalize_text(name);
    let date = normalize_draft_date(date);
    let location = normalize_text(location);
    join_parts(&[&name, &date, &location])
}

/// Group key that also accounts for the selected services.
///
/// Service identifiers are lower-cased and sorted, so the order in which
/// services were picked does not matter. Duplicates are kept. Without any
/// services this is [`compute_draft_group_key`].
pub fn compute_enhanced_draft_group_key(draft: &DraftInput) -> String {
    let mut ids: Vec<String> = draft
        .services
        .iter()
        .map(|id| normalize_text(id))
        .filter(|id| !id.is_empty())
        .collect();

    if ids.is_empty() {
        return compute_draft_group_key(&draft.name, &draft.date, &draft.location);
    }

    ids.sort();

    let name = normalize_text(&draft.name);
    let date = normalize_draft_date(&draft.date);
    let location = normalize_text(&draft.location);
    let services = ids.join(",");
    join_parts(&[&name, &date, &location, &services])
}
