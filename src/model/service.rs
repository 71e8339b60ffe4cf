//! Service records and the normalization adapter for `service_details`.
//!
//! The backend stores `service_details` in several historical shapes. Every
//! shape is read once here into [`ServiceDetails`], one variant per service
//! kind, so the pricing code never probes optional fields itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json;
use super::menu_item::{ComboOffer, MenuItem};
use crate::config::CURRENCY_SYMBOL;

/// Marketplace service category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Catering,
    Venue,
    PartyRental,
    Staff,
    #[default]
    Unknown,
}

impl ServiceKind {
    /// Parse a service type name (case-insensitive, singular or plural).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "catering" => ServiceKind::Catering,
            "venue" | "venues" => ServiceKind::Venue,
            "party-rental" | "party-rentals" => ServiceKind::PartyRental,
            "staff" | "staffing" => ServiceKind::Staff,
            _ => ServiceKind::Unknown,
        }
    }

    /// Check if this is a catering service.
    pub fn is_catering(&self) -> bool {
        matches!(self, ServiceKind::Catering)
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceKind::Catering => write!(f, "catering"),
            ServiceKind::Venue => write!(f, "venues"),
            ServiceKind::PartyRental => write!(f, "party-rentals"),
            ServiceKind::Staff => write!(f, "staff"),
            ServiceKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Every legacy item list a service kind can be read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceDetails {
    Catering {
        /// `service_details.menuItems`
        menu_items: Vec<MenuItem>,
        /// `service_details.catering.menuItems`
        nested_menu_items: Vec<MenuItem>,
        /// `service_details.catering.combos`
        combos: Vec<ComboOffer>,
        /// `service_details.menu`
        menu: Vec<MenuItem>,
    },
    PartyRental {
        /// `service_details.rentalItems`
        rental_items: Vec<MenuItem>,
        /// `service_details.items`
        items: Vec<MenuItem>,
        /// `service_details.rental.items`
        nested_rental_items: Vec<MenuItem>,
    },
    Staff {
        /// `service_details.staffServices`
        staff_services: Vec<MenuItem>,
        /// `service_details.services`
        services: Vec<MenuItem>,
    },
    Venue {
        /// `service_details.venueOptions`
        venue_options: Vec<MenuItem>,
        /// `service_details.options`
        options: Vec<MenuItem>,
    },
    #[default]
    Empty,
}

impl ServiceDetails {
    /// Read the detail bag for a service of the given kind.
    pub fn from_value(kind: &ServiceKind, value: &Value) -> Self {
        if !value.is_object() {
            return ServiceDetails::Empty;
        }

        let items = |parent: Option<&Value>, key: &str| -> Vec<MenuItem> {
            json::objects(parent, key)
                .into_iter()
                .map(MenuItem::from_value)
                .collect()
        };

        match kind {
            ServiceKind::Catering => {
                let catering = value.get("catering");
                ServiceDetails::Catering {
                    menu_items: items(Some(value), "menuItems"),
                    nested_menu_items: items(catering, "menuItems"),
                    combos: json::objects(catering, "combos")
                        .into_iter()
                        .map(ComboOffer::from_value)
                        .collect(),
                    menu: items(Some(value), "menu"),
                }
            }
            ServiceKind::PartyRental => ServiceDetails::PartyRental {
                rental_items: items(Some(value), "rentalItems"),
                items: items(Some(value), "items"),
                nested_rental_items: items(value.get("rental"), "items"),
            },
            ServiceKind::Staff => ServiceDetails::Staff {
                staff_services: items(Some(value), "staffServices"),
                services: items(Some(value), "services"),
            },
            ServiceKind::Venue => ServiceDetails::Venue {
                venue_options: items(Some(value), "venueOptions"),
                options: items(Some(value), "options"),
            },
            ServiceKind::Unknown => ServiceDetails::Empty,
        }
    }
}

/// A marketplace service as shown in listings and at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Service {
    /// Service category.
    pub kind: ServiceKind,
    /// Raw price string, e.g. `"$25"`.
    pub price: Option<String>,
    /// Billing unit (`per_person`, `flat_rate`, ...).
    pub price_type: Option<String>,
    /// Normalized detail bag.
    pub details: ServiceDetails,
}

impl Service {
    /// Create a service with a price and no details.
    pub fn new(kind: ServiceKind, price: impl Into<String>, price_type: impl Into<String>) -> Self {
        Self {
            kind,
            price: Some(price.into()),
            price_type: Some(price_type.into()),
            details: ServiceDetails::Empty,
        }
    }

    /// Build a service from a backend record of any known shape.
    pub fn from_value(value: &Value) -> Self {
        let kind = json::first_str(value, &["type", "serviceType", "service_type"])
            .map(|s| ServiceKind::parse(&s))
            .unwrap_or_default();

        let price = match value.get("price") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(format!("{}{}", CURRENCY_SYMBOL, n)),
            _ => None,
        };

        let price_type = value
            .get("price_type")
            .or_else(|| value.get("priceType"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let raw_details = value
            .get("service_details")
            .or_else(|| value.get("serviceDetails"));
        let details = json::decode_embedded(raw_details)
            .map(|d| ServiceDetails::from_value(&kind, &d))
            .unwrap_or_default();

        Self {
            kind,
            price,
            price_type,
            details,
        }
    }

    /// Attach a detail bag.
    pub fn with_details(mut self, details: ServiceDetails) -> Self {
        self.details = details;
        self
    }
}

impl From<Value> for Service {
    fn from(value: Value) -> Self {
        Service::from_value(&value)
    }
}
