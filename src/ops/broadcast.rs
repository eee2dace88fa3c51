//! Edits applied to every object element of an array.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::for_each_object_element;
use crate::document::node::{JsonNode, JsonNumber, JsonValue, Scalar};
use log::trace;

/// What a rule-driven broadcast does with an element whose lookup value has no rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedRule {
    /// Leave the element untouched.
    #[default]
    Skip,
    /// Write `false`.
    SetFalse,
}

/// Removes `field_name` from every object element of the array at `path`.
///
/// The empty path means `root` itself is the array.
pub fn remove_field_of_list_by_path_and_name<S: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    field_name: &str,
) {
    for_each_object_element(
        root,
        path,
        "remove_field_of_list_by_path_and_name",
        |_, element| {
            element.remove_field(field_name);
        },
    );
}

/// Removes `field_name` from every object element of an array two keys deep,
/// e.g. `["foo", "bar"]` where `bar` is the array.
pub fn remove_field_two_level_array<S: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S; 2],
    field_name: &str,
) {
    for_each_object_element(
        root,
        path.as_slice(),
        "remove_field_two_level_array",
        |_, element| {
            element.remove_field(field_name);
        },
    );
}

/// Writes each element's zero-based array index into `field_name`.
///
/// Indices count every element, so a skipped non-object still takes up its slot.
pub fn add_position_by_path<S: AsRef<str>>(root: &mut JsonNode, path: &[S], field_name: &str) {
    for_each_object_element(root, path, "add_position_by_path", |index, element| {
        let position = JsonNumber::Integer(index as i64);
        element.insert_field(field_name, JsonNode::new(JsonValue::Number(position)));
    });
}

/// Writes the same scalar into `field_name` on every element.
///
/// This covers both the fixed-boolean and the fixed-string broadcast.
pub fn add_field_to_array<S: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    field_name: &str,
    value: impl Into<Scalar>,
) {
    let value = value.into();
    for_each_object_element(root, path, "add_field_to_array", |_, element| {
        element.insert_field(field_name, JsonNode::from(value.clone()));
    });
}

/// Sets `field_name` on each element to the rule found for the element's
/// `lookup_key` value. Elements without a matching rule are left untouched.
pub fn add_field_to_array_by_rules<S: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    field_name: &str,
    lookup_key: &str,
    rules: &HashMap<String, bool>,
) {
    add_field_to_array_by_rules_with(
        root,
        path,
        field_name,
        lookup_key,
        rules,
        UnmatchedRule::Skip,
    );
}

/// Like [`add_field_to_array_by_rules`] with an explicit policy for elements
/// whose lookup value is absent, not textual, or has no rule.
pub fn add_field_to_array_by_rules_with<S: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    field_name: &str,
    lookup_key: &str,
    rules: &HashMap<String, bool>,
    unmatched: UnmatchedRule,
) {
    for_each_object_element(root, path, "add_field_to_array_by_rules", |index, element| {
        let rule = element
            .get(lookup_key)
            .and_then(|node| node.value().as_text())
            .and_then(|text| rules.get(&text).copied());

        let value = match (rule, unmatched) {
            (Some(value), _) => value,
            (None, UnmatchedRule::SetFalse) => false,
            (None, UnmatchedRule::Skip) => {
                trace!("add_field_to_array_by_rules: no rule for element {}", index);
                return;
            }
        };
        element.insert_field(field_name, JsonNode::new(JsonValue::Boolean(value)));
    });
}
