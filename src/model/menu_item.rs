//! Sellable line items extracted from a service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json;
use crate::pricing::parse_price_value;

/// A price as stored by the backend: either a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    /// Read a price from a JSON value; null and non-scalar values have none.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(PriceValue::Number),
            Value::String(s) => Some(PriceValue::Text(s.clone())),
            _ => None,
        }
    }

    /// Numeric amount, if the price has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PriceValue::Number(n) if n.is_finite() => Some(*n),
            PriceValue::Number(_) => None,
            PriceValue::Text(s) => parse_price_value(s),
        }
    }
}

/// Normalized menu item, regardless of which legacy list it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Display name.
    pub name: String,
    /// Price, absent when the backend stored none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Billing unit of this item (`per_person`, `flat_rate`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_combo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuItem {
    /// Create an item with a numeric price.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price: Some(PriceValue::Number(price)),
            ..Default::default()
        }
    }

    /// Read an item from one element of a legacy item list.
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: json::first_str(value, &["name", "title"]).unwrap_or_default(),
            price: value.get("price").and_then(PriceValue::from_value),
            price_type: json::first_str(value, &["priceType", "price_type"]),
            is_popular: json::first_bool(value, &["isPopular", "is_popular"]),
            is_combo: json::first_bool(value, &["isCombo", "is_combo"]),
            description: json::first_str(value, &["description"]),
        }
    }

    /// Numeric amount of this item's price.
    pub fn numeric_price(&self) -> Option<f64> {
        self.price.as_ref().and_then(PriceValue::as_number)
    }

    /// Check if this item is a combo.
    pub fn is_combo(&self) -> bool {
        self.is_combo.unwrap_or(false)
    }
}

/// A catering combo as stored under `catering.combos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboOffer {
    pub name: String,
    pub price_per_person: Option<PriceValue>,
    pub price: Option<PriceValue>,
    pub is_popular: Option<bool>,
    pub description: Option<String>,
}

impl ComboOffer {
    /// Read a combo from one element of `catering.combos`.
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: json::first_str(value, &["name", "title"]).unwrap_or_default(),
            price_per_person: value.get("pricePerPerson").and_then(PriceValue::from_value),
            price: value.get("price").and_then(PriceValue::from_value),
            is_popular: json::first_bool(value, &["isPopular", "is_popular"]),
            description: json::first_str(value, &["description"]),
        }
    }
}
