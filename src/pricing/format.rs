//! Canonical price strings shown throughout the marketplace.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::amount::{format_amount, format_whole_dollars};
use super::menu_items::get_menu_items;
use crate::config::{has_canonical_suffix, is_flat_rate, PriceSuffix, DEFAULT_PRICE, PRICE_ON_REQUEST};
use crate::model::{MenuItem, PriceValue, Service};

/// Older billing-unit spellings: `per hour`, `/ hour`, `hourly`, `daily`, ...
static LEGACY_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*(?:(?:per\s+|/\s*)(?:person|people|hour|day|item|guest|event)s?|hourly|daily)\b")
        .expect("valid legacy suffix pattern")
});

/// Format the price of a service for display.
///
/// Catering services with priced menu items show the range of those prices;
/// everything else uses the service's own price. A zero or missing price
/// reads "Price on request". Prices that already carry a canonical suffix
/// are returned unchanged, so formatting is idempotent.
pub fn format_unified_service_price(service: &Service) -> String {
    let base = service_base_price(service);
    finish_price(&base, service.price_type.as_deref())
}

/// Format a single menu item using its own price type.
pub fn format_menu_item_price(item: &MenuItem) -> String {
    let base = match &item.price {
        Some(PriceValue::Number(n)) => format_amount(*n),
        Some(PriceValue::Text(s)) => s.clone(),
        None => return PRICE_ON_REQUEST.to_string(),
    };
    finish_price(&base, item.price_type.as_deref())
}

/// Lowest and highest numeric price among the items.
pub fn price_range(items: &[MenuItem]) -> Option<(f64, f64)> {
    items
        .iter()
        .filter_map(MenuItem::numeric_price)
        .fold(None, |range, price| match range {
            None => Some((price, price)),
            Some((min, max)) => Some((min.min(price), max.max(price))),
        })
}

/// Remove legacy billing-unit text from a price string.
pub fn strip_legacy_suffix(price: &str) -> String {
    LEGACY_SUFFIX.replace_all(price, "").trim().to_string()
}

/// The price string before suffix handling.
fn service_base_price(service: &Service) -> String {
    let raw = || service.price.clone().unwrap_or_else(|| DEFAULT_PRICE.to_string());

    if !service.kind.is_catering() {
        return raw();
    }

    let items = get_menu_items(service);
    if items.is_empty() {
        return raw();
    }

    match price_range(&items) {
        Some((min, max)) if min == max => format_whole_dollars(min),
        Some((min, max)) => format!("{}-{}", format_whole_dollars(min), format_whole_dollars(max)),
        None => {
            debug!(
                "No numeric prices among {} menu items, using service price",
                items.len()
            );
            raw()
        }
    }
}

/// Apply the zero check, idempotence check, legacy cleanup and suffix.
fn finish_price(base: &str, price_type: Option<&str>) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() || trimmed == DEFAULT_PRICE || trimmed.eq_ignore_ascii_case(PRICE_ON_REQUEST) {
        return PRICE_ON_REQUEST.to_string();
    }

    if has_canonical_suffix(base) {
        return base.to_string();
    }

    let cleaned = strip_legacy_suffix(base);
    let price_type = price_type.unwrap_or("");

    if is_flat_rate(price_type) {
        return cleaned;
    }

    match PriceSuffix::from_price_type(price_type) {
        Some(suffix) => format!("{}{}", cleaned, suffix),
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ServiceDetails, ServiceKind};
    use pretty_assertions::assert_eq;

    fn priced(price: &str, price_type: &str) -> Service {
        Service::new(ServiceKind::Staff, price, price_type)
    }

    fn catering_with(prices: &[f64], price_type: &str) -> Service {
        let items = prices
            .iter()
            .enumerate()
            .map(|(i, p)| MenuItem::new(format!("Item {}", i), *p))
            .collect();
        Service::new(ServiceKind::Catering, "$99", price_type).with_details(ServiceDetails::Catering {
            menu_items: items,
            nested_menu_items: vec![],
            combos: vec![],
            menu: vec![],
        })
    }

    // ==================== suffix mapping ====================

    #[test]
    fn test_suffix_mapping_table() {
        let cases = [
            ("per_person", "$20/Person"),
            ("per_hour", "$20/Hour"),
            ("per_day", "$20/Day"),
            ("per_item", "$20/Item"),
            ("per_guest", "$20/Person"),
            ("per_event", "$20/Event"),
            ("hourly", "$20/Hour"),
            ("daily", "$20/Day"),
            ("PER_PERSON", "$20/Person"),
        ];
        for (price_type, expected) in cases {
            assert_eq!(format_unified_service_price(&priced("$20", price_type)), expected);
        }
    }

    #[test]
    fn test_flat_rate_aliases_have_no_suffix() {
        for price_type in ["flat_rate", "fixed", "one_time", ""] {
            assert_eq!(format_unified_service_price(&priced("$20", price_type)), "$20");
        }
    }

    #[test]
    fn test_unknown_price_type_has_no_suffix() {
        assert_eq!(format_unified_service_price(&priced("$20", "per_week")), "$20");
    }

    #[test]
    fn test_missing_price_type() {
        let mut service = priced("$20", "");
        service.price_type = None;
        assert_eq!(format_unified_service_price(&service), "$20");
    }

    // ==================== zero and missing prices ====================

    #[test]
    fn test_price_on_request() {
        assert_eq!(format_unified_service_price(&priced("$0", "per_person")), PRICE_ON_REQUEST);
        assert_eq!(format_unified_service_price(&priced("", "per_person")), PRICE_ON_REQUEST);

        let mut service = priced("", "per_hour");
        service.price = None;
        assert_eq!(format_unified_service_price(&service), PRICE_ON_REQUEST);
    }

    // ==================== legacy cleanup ====================

    #[test]
    fn test_legacy_suffix_cleanup() {
        assert_eq!(format_unified_service_price(&priced("$20 per hour", "per_hour")), "$20/Hour");
        assert_eq!(format_unified_service_price(&priced("$20 / hour", "per_hour")), "$20/Hour");
        assert_eq!(format_unified_service_price(&priced("$20 Hourly", "per_hour")), "$20/Hour");
        assert_eq!(format_unified_service_price(&priced("$150 daily", "per_day")), "$150/Day");
        assert_eq!(format_unified_service_price(&priced("$35 per person", "per_person")), "$35/Person");
        assert_eq!(format_unified_service_price(&priced("$35 Per Guest", "flat_rate")), "$35");
    }

    #[test]
    fn test_strip_legacy_suffix() {
        assert_eq!(strip_legacy_suffix("$20 per hour"), "$20");
        assert_eq!(strip_legacy_suffix("$20/ item"), "$20");
        assert_eq!(strip_legacy_suffix("$20 per events"), "$20");
        assert_eq!(strip_legacy_suffix("$20"), "$20");
    }

    // ==================== idempotence ====================

    #[test]
    fn test_idempotent_on_canonical_suffix() {
        for price_type in ["per_person", "per_hour", "per_day", "per_item", "per_guest", "per_event", "flat_rate"] {
            let once = format_unified_service_price(&priced("$20", price_type));
            let twice = format_unified_service_price(&priced(&once, price_type));
            assert_eq!(once, twice, "{}", price_type);
        }
    }

    #[test]
    fn test_idempotent_on_price_on_request() {
        let once = format_unified_service_price(&priced("$0", "per_person"));
        let twice = format_unified_service_price(&priced(&once, "per_person"));
        assert_eq!(twice, PRICE_ON_REQUEST);
    }

    #[test]
    fn test_canonical_suffix_kept_verbatim() {
        assert_eq!(format_unified_service_price(&priced("$20/guest", "per_hour")), "$20/guest");
    }

    // ==================== catering ranges ====================

    #[test]
    fn test_catering_range() {
        let service = catering_with(&[10.0, 25.0, 25.0, 40.0], "flat_rate");
        assert_eq!(format_unified_service_price(&service), "$10-$40");
    }

    #[test]
    fn test_catering_single_price_has_no_dash() {
        let service = catering_with(&[15.0, 15.0], "flat_rate");
        assert_eq!(format_unified_service_price(&service), "$15");
    }

    #[test]
    fn test_catering_range_with_suffix() {
        let service = catering_with(&[12.4, 30.5], "per_person");
        assert_eq!(format_unified_service_price(&service), "$12-$31/Person");
    }

    #[test]
    fn test_catering_all_zero_prices() {
        let service = catering_with(&[0.0], "per_person");
        assert_eq!(format_unified_service_price(&service), PRICE_ON_REQUEST);
    }

    #[test]
    fn test_catering_unparseable_prices_fall_back() {
        let mut service = catering_with(&[], "per_person");
        service.details = ServiceDetails::Catering {
            menu_items: vec![MenuItem {
                name: "Chef's choice".into(),
                price: Some(PriceValue::Text("ask".into())),
                ..Default::default()
            }],
            nested_menu_items: vec![],
            combos: vec![],
            menu: vec![],
        };
        assert_eq!(format_unified_service_price(&service), "$99/Person");
    }

    #[test]
    fn test_catering_without_items_uses_service_price() {
        let service = Service::new(ServiceKind::Catering, "$18", "per_person");
        assert_eq!(format_unified_service_price(&service), "$18/Person");
    }

    #[test]
    fn test_non_catering_ignores_items() {
        let service = Service::new(ServiceKind::Staff, "$30", "per_hour").with_details(ServiceDetails::Staff {
            staff_services: vec![MenuItem::new("Server", 10.0), MenuItem::new("Chef", 80.0)],
            services: vec![],
        });
        assert_eq!(format_unified_service_price(&service), "$30/Hour");
    }

    #[test]
    fn test_price_range() {
        let items = vec![
            MenuItem::new("a", 5.0),
            MenuItem { name: "b".into(), ..Default::default() },
            MenuItem::new("c", 2.0),
        ];
        assert_eq!(price_range(&items), Some((2.0, 5.0)));
        assert_eq!(price_range(&[]), None);
    }

    // ==================== menu item prices ====================

    #[test]
    fn test_format_menu_item_price() {
        let mut item = MenuItem::new("Brisket", 12.5);
        item.price_type = Some("per_person".into());
        assert_eq!(format_menu_item_price(&item), "$12.50/Person");

        let mut item = MenuItem::new("Chairs", 3.0);
        item.price_type = Some("per_item".into());
        assert_eq!(format_menu_item_price(&item), "$3/Item");

        let item = MenuItem {
            name: "Tent".into(),
            price: Some(PriceValue::Text("$300 per day".into())),
            price_type: Some("per_day".into()),
            ..Default::default()
        };
        assert_eq!(format_menu_item_price(&item), "$300/Day");

        let item = MenuItem { name: "Unpriced".into(), ..Default::default() };
        assert_eq!(format_menu_item_price(&item), PRICE_ON_REQUEST);
    }
}
