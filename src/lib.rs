//! cater-pricing - Service pricing rules for the Cater Directly marketplace.
//!
//! This library reproduces the pricing rules that decide what a host sees and
//! pays: the canonical price string of a service, the menu items behind it,
//! the total of a catering combo order, and the key used to merge saved
//! draft versions of the same event.
//!
//! Every calculation is a pure function over data the caller already has.
//! None of them fail; missing or malformed data degrades to a documented
//! default ("Price on request", no items, "ungrouped").
//!
//! # Example
//!
//! ```
//! use cater_pricing::{format_unified_service_price, Service};
//! use serde_json::json;
//!
//! let service = Service::from_value(&json!({
//!     "type": "staff",
//!     "price": "$40 per hour",
//!     "price_type": "per_hour",
//! }));
//! assert_eq!(format_unified_service_price(&service), "$40/Hour");
//! ```

pub mod combo;
pub mod config;
pub mod draft;
pub mod error;
pub mod input;
pub mod model;
pub mod pricing;
pub mod validation;

// Re-exports for convenience
pub use combo::{calculate_combo_total, calculate_combo_total_with, CategoryBehaviorResolver};
pub use config::{PriceSuffix, PRICE_ON_REQUEST, UNGROUPED_KEY};
pub use draft::{
    compute_draft_group_key, compute_enhanced_draft_group_key, consolidate_drafts, DraftGroup,
};
pub use error::{PricingError, Result};
pub use model::{
    CategorySelection, ComboRequest, ComboTotal, DraftInput, MenuItem, SelectedItem,
    SelectionBehavior, Service, ServiceKind,
};
pub use pricing::{format_unified_service_price, get_menu_items};
pub use validation::{validate_combo_request, validate_service, ValidationResult};
