//! Menu item extraction across service categories.

use crate::model::{ComboOffer, MenuItem, PriceValue, Service, ServiceDetails};

/// Collect the sellable line items of a service.
///
/// Each category reads its lists in priority order and uses the first
/// non-empty one. Catering prefers top-level `menuItems`, then the nested
/// `catering` menu merged with its combos, then `menu`. Services without
/// details, or of an unknown type, have no items.
pub fn get_menu_items(service: &Service) -> Vec<MenuItem> {
    match &service.details {
        ServiceDetails::Catering {
            menu_items,
            nested_menu_items,
            combos,
            menu,
        } => {
            if !menu_items.is_empty() {
                return menu_items.clone();
            }

            let merged: Vec<MenuItem> = nested_menu_items
                .iter()
                .cloned()
                .chain(combos.iter().map(combo_menu_item))
                .collect();
            if !merged.is_empty() {
                return merged;
            }

            menu.clone()
        }
        ServiceDetails::PartyRental {
            rental_items,
            items,
            nested_rental_items,
        } => first_non_empty(&[rental_items, items, nested_rental_items]),
        ServiceDetails::Staff {
            staff_services,
            services,
        } => first_non_empty(&[staff_services, services]),
        ServiceDetails::Venue {
            venue_options,
            options,
        } => first_non_empty(&[venue_options, options]),
        ServiceDetails::Empty => Vec::new(),
    }
}

/// Re-tag a catering combo as a per-person menu item.
fn combo_menu_item(combo: &ComboOffer) -> MenuItem {
    let price = combo
        .price_per_person
        .clone()
        .or_else(|| combo.price.clone())
        .unwrap_or(PriceValue::Number(0.0));

    MenuItem {
        name: combo.name.clone(),
        price: Some(price),
        price_type: Some("per_person".to_string()),
        is_popular: combo.is_popular,
        is_combo: Some(true),
        description: combo.description.clone(),
    }
}

fn first_non_empty(lists: &[&Vec<MenuItem>]) -> Vec<MenuItem> {
    lists
        .iter()
        .find(|l| !l.is_empty())
        .map(|l| l.to_vec())
        .unwrap_or_default()
}
