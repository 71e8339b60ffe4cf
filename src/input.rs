//! Loading pricing inputs from JSON files or stdin.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{PricingError, Result};
use crate::model::{ComboRequest, DraftInput, Service};

/// Read an input document; the path `-` reads stdin.
pub fn read_input(path: &Path) -> Result<String> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !path.exists() {
            return Err(PricingError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        std::fs::read_to_string(path)?
    };

    if content.trim().is_empty() {
        return Err(PricingError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}

/// Read an input document as untyped JSON.
pub fn load_json(path: &Path) -> Result<Value> {
    let content = read_input(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load one service record.
pub fn load_service(path: &Path) -> Result<Service> {
    let value = load_json(path)?;
    expect_object(&value)?;
    Ok(Service::from_value(&value))
}

/// Load a list of service records, or a single record as a list of one.
pub fn load_services(path: &Path) -> Result<Vec<Service>> {
    objects_or_list(load_json(path)?)
        .map(|values| values.iter().map(Service::from_value).collect())
}

/// Load a combo pricing request.
pub fn load_combo_request(path: &Path) -> Result<ComboRequest> {
    let content = read_input(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load one saved draft.
pub fn load_draft(path: &Path) -> Result<DraftInput> {
    let value = load_json(path)?;
    expect_object(&value)?;
    Ok(DraftInput::from_value(&value))
}

/// Load a list of saved drafts, or a single draft as a list of one.
pub fn load_drafts(path: &Path) -> Result<Vec<DraftInput>> {
    objects_or_list(load_json(path)?)
        .map(|values| values.iter().map(DraftInput::from_value).collect())
}

fn expect_object(value: &Value) -> Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(PricingError::UnexpectedShape {
            expected: "a JSON object".to_string(),
            found: json_kind(value).to_string(),
        })
    }
}

fn objects_or_list(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => {
            if let Some(bad) = items.iter().find(|v| !v.is_object()) {
                return Err(PricingError::UnexpectedShape {
                    expected: "an array of JSON objects".to_string(),
                    found: format!("an array containing {}", json_kind(bad)),
                });
            }
            Ok(items)
        }
        Value::Object(_) => Ok(vec![value]),
        other => Err(PricingError::UnexpectedShape {
            expected: "a JSON object or array".to_string(),
            found: json_kind(&other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
