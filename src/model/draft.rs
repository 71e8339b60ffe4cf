//! Saved draft orders, as far as grouping needs them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json;

const NAME_KEYS: [&str; 3] = ["name", "eventName", "event_name"];
const DATE_KEYS: [&str; 3] = ["date", "eventDate", "event_date"];
const LOCATION_KEYS: [&str; 3] = ["location", "venue", "venue_name"];
const UPDATED_KEYS: [&str; 2] = ["updated_at", "updatedAt"];
const SERVICE_LIST_KEYS: [&str; 2] = ["selected_services", "selectedServices"];
const SERVICE_ID_KEYS: [&str; 5] = ["id", "serviceId", "service_id", "slug", "name"];

/// The grouping-relevant fields of a draft order.
///
/// Values are kept raw; normalization happens when the key is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct DraftInput {
    pub name: String,
    pub date: String,
    pub location: String,
    /// Last save timestamp, when known.
    pub updated_at: Option<String>,
    /// Resolved service identifiers, in input order.
    pub services: Vec<String>,
}

impl DraftInput {
    /// Create a draft from already-extracted fields.
    pub fn new(name: impl Into<String>, date: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    /// Add a service identifier.
    pub fn with_service(mut self, id: impl Into<String>) -> Self {
        self.services.push(id.into());
        self
    }

    /// Build a draft from a saved record, probing every historical field name.
    ///
    /// Top-level fields win over `form_data`.
    pub fn from_value(value: &Value) -> Self {
        let form = json::decode_embedded(value.get("form_data").or_else(|| value.get("formData")))
            .unwrap_or(Value::Null);

        let field = |keys: &[&str]| -> String {
            json::first_str(value, keys)
                .or_else(|| json::first_str(&form, keys))
                .unwrap_or_default()
        };

        let service_list = SERVICE_LIST_KEYS
            .iter()
            .filter_map(|k| value.get(k))
            .find(|v| v.is_array())
            .or_else(|| {
                SERVICE_LIST_KEYS
                    .iter()
                    .filter_map(|k| form.get(k))
                    .find(|v| v.is_array())
            });

        let services = service_list
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(resolve_service_id).collect())
            .unwrap_or_default();

        Self {
            name: field(&NAME_KEYS[..]),
            date: field(&DATE_KEYS[..]),
            location: field(&LOCATION_KEYS[..]),
            updated_at: json::first_str(value, &UPDATED_KEYS),
            services,
        }
    }
}

impl From<Value> for DraftInput {
    fn from(value: Value) -> Self {
        DraftInput::from_value(&value)
    }
}

/// Resolve one `selected_services` entry to an identifier.
///
/// Objects use the first non-null of `id`, `serviceId`, `service_id`, `slug`,
/// `name`; bare strings and numbers are identifiers themselves.
fn resolve_service_id(entry: &Value) -> Option<String> {
    let id = match entry {
        Value::Object(_) => json::first_present(entry, &SERVICE_ID_KEYS)?,
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!id.is_empty()).then_some(id)
}
