//! Combo order selections and cost breakdowns.

use serde::{Deserialize, Serialize};

use super::json;
use crate::config::DEFAULT_HEADCOUNT;

/// How a combo category is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionBehavior {
    /// Buyer picks a count per item; each unit is one combo ordered.
    Quantity,
    /// Flat per-head surcharge.
    #[serde(other)]
    Choice,
}

impl SelectionBehavior {
    /// Check if this is the quantity (protein) behavior.
    pub fn is_quantity(&self) -> bool {
        matches!(self, SelectionBehavior::Quantity)
    }
}

/// One selected item within a combo category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub item_name: String,
    /// Surcharge per unit (protein) or per guest (choice).
    #[serde(default, deserialize_with = "json::lenient_amount")]
    pub additional_price: Option<f64>,
    /// Units ordered; only meaningful in quantity categories.
    #[serde(default, deserialize_with = "json::lenient_count")]
    pub quantity: Option<u32>,
}

impl SelectedItem {
    /// Create an item with a surcharge and no quantity.
    pub fn new(item_id: impl Into<String>, item_name: impl Into<String>, additional_price: f64) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            additional_price: Some(additional_price),
            quantity: None,
        }
    }

    /// Set the ordered quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Surcharge, treating a missing value as zero.
    pub fn surcharge(&self) -> f64 {
        self.additional_price.unwrap_or(0.0)
    }

    /// Quantity if one was given and is non-zero.
    pub fn ordered_quantity(&self) -> Option<u32> {
        self.quantity.filter(|q| *q > 0)
    }
}

/// The selections made in one combo category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySelection {
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub category_name: String,
    /// Explicit behavior tag; overrides any name-based inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_behavior: Option<SelectionBehavior>,
    #[serde(default)]
    pub selected_items: Vec<SelectedItem>,
}

impl CategorySelection {
    /// Create an untagged category.
    pub fn new(category_id: impl Into<String>, category_name: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            category_name: category_name.into(),
            ..Default::default()
        }
    }

    /// Tag the category with an explicit behavior.
    pub fn with_behavior(mut self, behavior: SelectionBehavior) -> Self {
        self.selection_behavior = Some(behavior);
        self
    }

    /// Add a selected item.
    pub fn with_item(mut self, item: SelectedItem) -> Self {
        self.selected_items.push(item);
        self
    }
}

fn default_headcount() -> u32 {
    DEFAULT_HEADCOUNT
}

fn lenient_headcount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(json::lenient_count(deserializer)?.unwrap_or(DEFAULT_HEADCOUNT))
}

fn lenient_base_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(json::lenient_amount(deserializer)?.unwrap_or(0.0))
}

/// A full combo pricing request as sent by the checkout form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboRequest {
    /// Price of one combo before surcharges.
    #[serde(default, deserialize_with = "lenient_base_price")]
    pub base_price: f64,
    #[serde(default, alias = "categorySelections")]
    pub categories: Vec<CategorySelection>,
    /// Guests served; a missing or unusable value means one guest.
    #[serde(default = "default_headcount", deserialize_with = "lenient_headcount")]
    pub headcount: u32,
}

/// One line of a combo cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub name: String,
    /// Item quantity for protein lines, headcount otherwise.
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub is_protein: bool,
}

/// Breakdown lines for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category_id: String,
    pub category_name: String,
    pub behavior: SelectionBehavior,
    pub items: Vec<BreakdownItem>,
}

impl CategoryBreakdown {
    /// Sum of line totals in this category.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|i| i.total_price).sum()
    }
}

/// Total cost of one combo order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboTotal {
    /// Price of one combo as requested.
    pub base_price: f64,
    /// Base price scaled by the number of protein units ordered.
    pub adjusted_base_price: f64,
    pub protein_costs: f64,
    pub additional_costs: f64,
    pub total_price: f64,
    pub total_combos_ordered: u32,
    pub headcount: u32,
    pub breakdown: Vec<CategoryBreakdown>,
}

impl ComboTotal {
    /// Total divided across guests; zero when there are no guests.
    pub fn per_guest(&self) -> f64 {
        if self.headcount == 0 {
            0.0
        } else {
            self.total_price / f64::from(self.headcount)
        }
    }
}
