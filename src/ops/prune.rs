//! Removal of fields and structures that carry no information.

use indexmap::IndexMap;

use super::{for_each_object_element, for_each_target};
use crate::document::node::{JsonNode, JsonValue};
use crate::path;
use log::trace;

fn is_empty_string(node: Option<&JsonNode>) -> bool {
    matches!(node.map(JsonNode::value), Some(JsonValue::String(s)) if s.is_empty())
}

/// Drops `group_field` from each element of the array at `path` when both of its
/// sub-fields are present and equal to `""`.
///
/// An element without the group, or with either sub-field absent or non-empty,
/// is left untouched.
pub fn clean_field_of_two_empty_fields<S: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    group_field: &str,
    sub_field_a: &str,
    sub_field_b: &str,
) {
    for_each_object_element(
        root,
        path,
        "clean_field_of_two_empty_fields",
        |index, element| {
            let Some(group) = element.get(group_field) else {
                return;
            };
            if is_empty_string(group.get(sub_field_a)) && is_empty_string(group.get(sub_field_b)) {
                trace!(
                    "clean_field_of_two_empty_fields: dropping {} from element {}",
                    group_field,
                    index
                );
                element.remove_field(group_field);
            }
        },
    );
}

/// Removes `field_name` wherever it holds an empty array.
///
/// `path` locates the targets: an object is a single target, an array makes each
/// of its object elements a target. Within each target, `inner_path` locates the
/// object that owns `field_name`. Either path may be empty to mean "right here".
pub fn clean_array_field_if_array_is_empty<S: AsRef<str>, T: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    inner_path: &[T],
    field_name: &str,
) {
    for_each_target(root, path, "clean_array_field_if_array_is_empty", |target| {
        let Some(owner) = path::locate_object_mut(target, inner_path) else {
            return;
        };
        let is_empty_array = matches!(
            owner.get(field_name).map(JsonNode::value),
            Some(JsonValue::Array(elements)) if elements.is_empty()
        );
        if is_empty_array {
            owner.remove_field(field_name);
        }
    });
}

/// Replaces each of `field_names` that holds exactly `""` with an empty object.
///
/// Targets are located as in [`clean_array_field_if_array_is_empty`]: the object
/// at `path`, or each object element of the array at `path`. Only string values
/// that are exactly empty are converted; everything else is left alone.
pub fn convert_empty_string_field_to_empty_map<S: AsRef<str>, F: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    field_names: &[F],
) {
    for_each_target(root, path, "convert_empty_string_field_to_empty_map", |target| {
        for name in field_names {
            let name = name.as_ref();
            if !is_empty_string(target.get(name)) {
                continue;
            }
            if let Some(field) = target.fields_mut().and_then(|fields| fields.get_mut(name)) {
                *field.value_mut() = JsonValue::Object(IndexMap::new());
            }
        }
    });
}
