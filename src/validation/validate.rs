//! Advisory checks on pricing inputs.
//!
//! The calculators accept anything; these checks report what looks wrong so
//! the CLI (or a caller) can surface it.

use crate::combo::{calculate_combo_total, effective_behavior, KeywordBehaviorResolver};
use crate::config::{is_flat_rate, PriceSuffix, PRICE_ON_REQUEST};
use crate::model::{ComboRequest, Service, ServiceKind};
use crate::pricing::{get_menu_items, parse_price_value, price_range};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Check if there is nothing to report.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// Validate a service record.
pub fn validate_service(service: &Service) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if service.kind == ServiceKind::Unknown {
        result.add_warning("Service type is missing or unknown; it has no menu items");
    }

    match service.price.as_deref().map(str::trim) {
        None | Some("") => {
            result.add_warning("Service has no price; it is shown as price on request");
        }
        Some(price) if price.eq_ignore_ascii_case(PRICE_ON_REQUEST) => {}
        Some(price) => {
            if parse_price_value(price).is_none() {
                result.add_error(format!("Price '{}' has no numeric amount", price));
            }
        }
    }

    if let Some(price_type) = service.price_type.as_deref() {
        if !is_flat_rate(price_type) && PriceSuffix::from_price_type(price_type).is_none() {
            result.add_warning(format!(
                "Price type '{}' is not recognized; no unit is shown",
                price_type
            ));
        }
    }

    if service.kind.is_catering() {
        let items = get_menu_items(service);
        if !items.is_empty() && price_range(&items).is_none() {
            result.add_warning(format!(
                "None of the {} menu items has a numeric price; the service price is shown instead",
                items.len()
            ));
        }
    }

    result
}

/// Validate a combo pricing request.
pub fn validate_combo_request(request: &ComboRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !request.base_price.is_finite() || request.base_price < 0.0 {
        result.add_error(format!("Invalid base price {}", request.base_price));
    }

    if request.headcount == 0 {
        result.add_warning("Headcount is zero; per-guest surcharges are not charged");
    }

    for (cat_idx, category) in request.categories.iter().enumerate() {
        let label = if category.category_name.is_empty() {
            format!("Category {}", cat_idx + 1)
        } else {
            format!("Category '{}'", category.category_name)
        };

        if category.selected_items.is_empty() {
            result.add_warning(format!("{}: No items selected", label));
        }

        let behavior = effective_behavior(&KeywordBehaviorResolver, category);

        for (item_idx, item) in category.selected_items.iter().enumerate() {
            let surcharge = item.surcharge();
            if !surcharge.is_finite() || surcharge < 0.0 {
                result.add_error(format!(
                    "{}, Item {}: Invalid additional price {}",
                    label,
                    item_idx + 1,
                    surcharge
                ));
            }

            if behavior.is_quantity() && item.ordered_quantity().is_none() {
                result.add_warning(format!(
                    "{}, Item {}: No quantity; charged per guest instead of per unit",
                    label,
                    item_idx + 1
                ));
            }
        }
    }

    let has_selections = request
        .categories
        .iter()
        .any(|c| !c.selected_items.is_empty());
    let total = calculate_combo_total(request.base_price, &request.categories, request.headcount);
    if has_selections && total.total_combos_ordered == 0 {
        result.add_warning("No protein units selected; the combo base price is not charged");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategorySelection, MenuItem, PriceValue, SelectedItem, ServiceDetails};

    fn combo_request() -> ComboRequest {
        ComboRequest {
            base_price: 10.0,
            categories: vec![CategorySelection::new("p", "Proteins")
                .with_item(SelectedItem::new("steak", "Steak", 5.0).with_quantity(2))],
            headcount: 2,
        }
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.is_clean());
    }

    #[test]
    fn test_validation_result_add_error() {
        let mut result = ValidationResult::ok();
        result.add_warning("Warning 1");
        assert!(result.passed);

        result.add_error("Error 1");
        assert!(!result.passed);
        assert!(!result.is_clean());
    }

    // ==================== validate_service tests ====================

    #[test]
    fn test_validate_service_valid() {
        let service = Service::new(ServiceKind::Venue, "$450", "flat_rate");
        let result = validate_service(&service);
        assert!(result.passed);
        assert!(result.is_clean());
    }

    #[test]
    fn test_validate_service_missing_price_warning() {
        let mut service = Service::new(ServiceKind::Staff, "", "per_hour");
        service.price = None;
        let result = validate_service(&service);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("no price")));
    }

    #[test]
    fn test_validate_service_non_numeric_price() {
        let service = Service::new(ServiceKind::Staff, "call us", "per_hour");
        let result = validate_service(&service);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("no numeric amount")));
    }

    #[test]
    fn test_validate_service_price_on_request_label() {
        let service = Service::new(ServiceKind::Staff, "Price on request", "");
        assert!(validate_service(&service).passed);
    }

    #[test]
    fn test_validate_service_unknown_type_and_price_type() {
        let service = Service::new(ServiceKind::Unknown, "$20", "per_fortnight");
        let result = validate_service(&service);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_validate_service_unpriced_menu() {
        let service = Service::new(ServiceKind::Catering, "$25", "per_person").with_details(
            ServiceDetails::Catering {
                menu_items: vec![MenuItem {
                    name: "Chef's table".into(),
                    price: Some(PriceValue::Text("ask".into())),
                    ..Default::default()
                }],
                nested_menu_items: vec![],
                combos: vec![],
                menu: vec![],
            },
        );
        let result = validate_service(&service);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("menu items")));
    }

    // ==================== validate_combo_request tests ====================

    #[test]
    fn test_validate_combo_valid() {
        let result = validate_combo_request(&combo_request());
        assert!(result.passed);
        assert!(result.is_clean());
    }

    #[test]
    fn test_validate_combo_negative_prices() {
        let mut request = combo_request();
        request.base_price = -1.0;
        request.categories[0].selected_items[0].additional_price = Some(-3.0);
        let result = validate_combo_request(&request);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_validate_combo_zero_protein_warning() {
        let request = ComboRequest {
            base_price: 10.0,
            categories: vec![CategorySelection::new("s", "Sides")
                .with_item(SelectedItem::new("rice", "Rice", 1.0))],
            headcount: 5,
        };
        let result = validate_combo_request(&request);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("No protein units selected")));
    }

    #[test]
    fn test_validate_combo_protein_without_quantity() {
        let mut request = combo_request();
        request.categories[0]
            .selected_items
            .push(SelectedItem::new("tofu", "Tofu", 0.0));
        let result = validate_combo_request(&request);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Category 'Proteins', Item 2: No quantity")));
    }

    #[test]
    fn test_validate_combo_empty_category_and_zero_headcount() {
        let mut request = combo_request();
        request.headcount = 0;
        request.categories.push(CategorySelection::new("d", ""));
        let result = validate_combo_request(&request);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("Headcount is zero")));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Category 2: No items selected")));
    }
}
