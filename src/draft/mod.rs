//! Draft order grouping.

mod consolidate;
mod group_key;

pub use consolidate::{consolidate_drafts, DraftGroup};
pub use group_key::{compute_draft_group_key, compute_enhanced_draft_group_key, normalize_draft_date};
