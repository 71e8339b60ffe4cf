//! Combo order totals.
//!
//! A combo is charged once per protein unit ordered: three guests picking
//! two steaks and one chicken order three combos. Protein surcharges are
//! charged per unit, while every other category is a per-guest surcharge.
//!
//! When no protein unit is selected the scaled base price is zero, whatever
//! the combo's base price is.

use tracing::debug;

use super::behavior::{effective_behavior, CategoryBehaviorResolver, KeywordBehaviorResolver};
use crate::model::{
    BreakdownItem, CategoryBreakdown, CategorySelection, ComboRequest, ComboTotal,
    SelectionBehavior,
};

/// Calculate a combo total, inferring untagged categories from their names.
pub fn calculate_combo_total(
    base_price: f64,
    categories: &[CategorySelection],
    headcount: u32,
) -> ComboTotal {
    calculate_combo_total_with(&KeywordBehaviorResolver, base_price, categories, headcount)
}

/// Calculate a combo total with a custom policy for untagged categories.
pub fn calculate_combo_total_with(
    resolver: &dyn CategoryBehaviorResolver,
    base_price: f64,
    categories: &[CategorySelection],
    headcount: u32,
) -> ComboTotal {
    // Resolved once so both passes agree.
    let behaviors: Vec<SelectionBehavior> = categories
        .iter()
        .map(|c| effective_behavior(resolver, c))
        .collect();

    let total_protein_quantity = categories
        .iter()
        .zip(&behaviors)
        .filter(|(_, b)| b.is_quantity())
        .flat_map(|(c, _)| &c.selected_items)
        .filter_map(|item| item.ordered_quantity())
        .fold(0u32, u32::saturating_add);

    let adjusted_base_price = base_price * f64::from(total_protein_quantity);
    let guests = f64::from(headcount);

    let mut protein_costs = 0.0;
    let mut additional_costs = 0.0;
    let mut breakdown = Vec::with_capacity(categories.len());

    for (category, behavior) in categories.iter().zip(&behaviors) {
        let mut items = Vec::with_capacity(category.selected_items.len());

        for item in &category.selected_items {
            let unit_price = item.surcharge();
            let protein_quantity = item.ordered_quantity().filter(|_| behavior.is_quantity());

            let line = match protein_quantity {
                Some(quantity) => {
                    let total = unit_price * f64::from(quantity);
                    protein_costs += total;
                    BreakdownItem {
                        name: item.item_name.clone(),
                        quantity,
                        unit_price,
                        total_price: total,
                        is_protein: true,
                    }
                }
                None => {
                    let total = unit_price * guests;
                    additional_costs += total;
                    BreakdownItem {
                        name: item.item_name.clone(),
                        quantity: headcount,
                        unit_price,
                        total_price: total,
                        is_protein: false,
                    }
                }
            };
            items.push(line);
        }

        breakdown.push(CategoryBreakdown {
            category_id: category.category_id.clone(),
            category_name: category.category_name.clone(),
            behavior: *behavior,
            items,
        });
    }

    let total_price = adjusted_base_price + protein_costs + additional_costs;

    debug!(
        "Combo total {:.2}: {} combo(s) x {:.2} + proteins {:.2} + extras {:.2} for {} guest(s)",
        total_price, total_protein_quantity, base_price, protein_costs, additional_costs, headcount
    );

    ComboTotal {
        base_price,
        adjusted_base_price,
        protein_costs,
        additional_costs,
        total_price,
        total_combos_ordered: total_protein_quantity,
        headcount,
        breakdown,
    }
}

impl ComboRequest {
    /// Calculate the total for this request.
    pub fn calculate(&self) -> ComboTotal {
        calculate_combo_total(self.base_price, &self.categories, self.headcount)
    }
}
