//! Pricing constants and lookup tables.

use serde::{Deserialize, Serialize};

/// Price assumed when a service record carries none.
pub const DEFAULT_PRICE: &str = "$0";

/// Label shown instead of a zero or missing price.
pub const PRICE_ON_REQUEST: &str = "Price on request";

/// Currency symbol used for every rendered amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Headcount used by the combo calculator when none is given.
pub const DEFAULT_HEADCOUNT: u32 = 1;

/// Group key returned when a draft has no name, date, location or services.
pub const UNGROUPED_KEY: &str = "ungrouped";

/// Suffixes that mark a price string as already formatted.
pub const CANONICAL_SUFFIXES: [&str; 6] = ["/person", "/hour", "/day", "/item", "/guest", "/event"];

/// Price types that render without any suffix.
pub const FLAT_RATE_ALIASES: [&str; 4] = ["flat_rate", "fixed", "one_time", ""];

/// Category names that mark a combo category as priced per protein unit.
///
/// Matched as whole-word phrases against the normalized category name.
pub const PROTEIN_KEYWORDS: [&str; 12] = [
    "protein",
    "proteins",
    "meat",
    "meats",
    "main",
    "mains",
    "main dish",
    "main dishes",
    "entree",
    "entrees",
    "main protein",
    "main proteins",
];

/// Common misspellings corrected before keyword matching.
pub const CATEGORY_TYPOS: [(&str, &str); 4] = [
    ("protiens", "proteins"),
    ("protien", "protein"),
    ("protines", "proteins"),
    ("protine", "protein"),
];

/// Billing unit appended to a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceSuffix {
    Person,
    Hour,
    Day,
    Item,
    Event,
}

impl PriceSuffix {
    /// Look up the suffix for a `price_type` value (case-insensitive).
    ///
    /// Flat-rate aliases and unknown types have no suffix.
    pub fn from_price_type(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "per_person" | "per_guest" => Some(PriceSuffix::Person),
            "per_hour" | "hourly" => Some(PriceSuffix::Hour),
            "per_day" | "daily" => Some(PriceSuffix::Day),
            "per_item" => Some(PriceSuffix::Item),
            "per_event" => Some(PriceSuffix::Event),
            _ => None,
        }
    }
}

impl std::fmt::Display for PriceSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSuffix::Person => write!(f, "/Person"),
            PriceSuffix::Hour => write!(f, "/Hour"),
            PriceSuffix::Day => write!(f, "/Day"),
            PriceSuffix::Item => write!(f, "/Item"),
            PriceSuffix::Event => write!(f, "/Event"),
        }
    }
}

/// Check whether a `price_type` renders without a suffix.
pub fn is_flat_rate(price_type: &str) -> bool {
    let normalized = price_type.trim().to_lowercase();
    FLAT_RATE_ALIASES.contains(&normalized.as_str())
}

/// Check whether a price string already ends in a canonical suffix.
pub fn has_canonical_suffix(price: &str) -> bool {
    let lower = price.trim_end().to_lowercase();
    CANONICAL_SUFFIXES.iter().any(|s| lower.ends_with(s))
}
