//! Combo cost calculation.

mod behavior;
mod calculator;

pub use behavior::{
    effective_behavior, is_protein_category_name, normalize_category_name,
    CategoryBehaviorResolver, KeywordBehaviorResolver, StrictBehaviorResolver,
};
pub use calculator::{calculate_combo_total, calculate_combo_total_with};
