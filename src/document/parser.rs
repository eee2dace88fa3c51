//! JSON parsing into `JsonTree`.
//!
//! Parsing itself is delegated to `serde_json` (built with `preserve_order`, so
//! object keys keep their source order). This module converts the result into
//! our own node representation and back.
//!
//! # Example
//!
//! ```
//! use jsonnode_utils::document::parser::parse_json;
//!
//! let tree = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert!(tree.root().value().is_object());
//! assert!(!tree.is_modified());
//! ```

use super::node::{JsonNode, JsonNumber, JsonValue};
use super::tree::JsonTree;
use anyhow::{Context, Result};
use serde_json::Value as SerdeValue;

/// Parses a JSON string into a `JsonTree`.
///
/// # Errors
///
/// This function will return an error if:
/// - The input string is not valid JSON
/// - The top-level value is a scalar rather than an object or an array
///
/// ```
/// use jsonnode_utils::document::parser::parse_json;
///
/// assert!(parse_json(r#"{"unclosed": "#).is_err());
/// assert!(parse_json("42").is_err());
/// ```
pub fn parse_json(json_str: &str) -> Result<JsonTree> {
    let serde_value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    let tree = JsonTree::new(parse_value(&serde_value))?;
    Ok(tree)
}

/// Converts a `serde_json::Value` into a `JsonNode`.
///
/// Every produced node is marked as not modified. Integers stay exact, using
/// `u64` when they do not fit in `i64`.
pub fn parse_value(value: &SerdeValue) -> JsonNode {
    let json_value = match value {
        SerdeValue::Object(map) => {
            let entries = map
                .iter()
                .map(|(k, v)| (k.clone(), parse_value(v)))
                .collect();
            JsonValue::Object(entries)
        }
        SerdeValue::Array(arr) => JsonValue::Array(arr.iter().map(parse_value).collect()),
        SerdeValue::String(s) => JsonValue::String(s.clone()),
        SerdeValue::Number(n) => JsonValue::Number(parse_number(n)),
        SerdeValue::Bool(b) => JsonValue::Boolean(*b),
        SerdeValue::Null => JsonValue::Null,
    };

    JsonNode::parsed(json_value)
}

fn parse_number(n: &serde_json::Number) -> JsonNumber {
    if let Some(i) = n.as_i64() {
        JsonNumber::Integer(i)
    } else if let Some(u) = n.as_u64() {
        JsonNumber::Unsigned(u)
    } else {
        JsonNumber::Float(n.as_f64().unwrap_or(0.0))
    }
}

/// Converts a `JsonNode` back into a `serde_json::Value`.
///
/// Non-finite floats have no JSON form and become `null`.
pub fn to_serde_value(node: &JsonNode) -> SerdeValue {
    match node.value() {
        JsonValue::Object(entries) => SerdeValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), to_serde_value(v)))
                .collect(),
        ),
        JsonValue::Array(elements) => {
            SerdeValue::Array(elements.iter().map(to_serde_value).collect())
        }
        JsonValue::String(s) => SerdeValue::String(s.clone()),
        JsonValue::Number(JsonNumber::Integer(i)) => SerdeValue::from(*i),
        JsonValue::Number(JsonNumber::Unsigned(u)) => SerdeValue::from(*u),
        JsonValue::Number(JsonNumber::Float(f)) => serde_json::Number::from_f64(*f)
            .map(SerdeValue::Number)
            .unwrap_or(SerdeValue::Null),
        JsonValue::Boolean(b) => SerdeValue::Bool(*b),
        JsonValue::Null => SerdeValue::Null,
    }
}
