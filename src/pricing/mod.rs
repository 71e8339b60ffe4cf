//! Service price extraction and display formatting.

mod amount;
mod format;
mod menu_items;

pub use amount::{format_amount, format_whole_dollars, parse_price_value};
pub use format::{format_menu_item_price, format_unified_service_price, price_range, strip_legacy_suffix};
pub use menu_items::get_menu_items;
