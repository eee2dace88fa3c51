//! The mutation operation catalogue.
//!
//! Every operation takes the node to start from plus a key path (see
//! [`crate::path`]) and performs one structural edit in place. Operations are
//! permissive: when the path is missing or leads to a node of the wrong shape
//! they do nothing and log at debug level. Only [`set_field`] and
//! [`remove_field`], which act directly on a caller-supplied node, report a
//! shape mismatch as an error.
//!
//! Array-wide operations ("broadcasts") visit elements in array order and skip
//! anything that is not an object. Each element is edited independently; there
//! is no rollback if a later element is skipped.
//!
//! # Example
//!
//! ```
//! use jsonnode_utils::document::parser::parse_json;
//! use jsonnode_utils::ops;
//!
//! let mut tree = parse_json(r#"{"items": [{"name": "a"}, {"name": "b"}]}"#).unwrap();
//! ops::add_position_by_path(tree.root_mut(), &["items"], "position");
//! ops::add_field_to_array(tree.root_mut(), &["items"], "status", "OK");
//!
//! let second = &tree.root().get("items").unwrap().value().as_array().unwrap()[1];
//! assert_eq!(second.get("position").unwrap().value().as_text().as_deref(), Some("1"));
//! ```

mod broadcast;
mod extract;
mod fields;
mod prune;

pub use broadcast::{
    add_field_to_array, add_field_to_array_by_rules, add_field_to_array_by_rules_with,
    add_position_by_path, remove_field_of_list_by_path_and_name, remove_field_two_level_array,
    UnmatchedRule,
};
pub use extract::{get_node_by_path, get_string, get_string_list};
pub use fields::{add_field_by_path, remove_field, remove_field_by_path_and_name, set_field};
pub use prune::{
    clean_array_field_if_array_is_empty, clean_field_of_two_empty_fields,
    convert_empty_string_field_to_empty_map,
};

use crate::document::node::JsonNode;
use crate::path;
use log::{debug, trace};

/// Calls `f` with the index and node of every object element of the array at `path`.
///
/// Non-object elements are skipped. Nothing happens when `path` does not lead
/// to an array.
fn for_each_object_element<S, F>(root: &mut JsonNode, path: &[S], operation: &str, mut f: F)
where
    S: AsRef<str>,
    F: FnMut(usize, &mut JsonNode),
{
    let Some(elements) = path::locate_array_mut(root, path).and_then(JsonNode::elements_mut) else {
        debug!("{}: no array at {}", operation, path::display(path));
        return;
    };

    for (index, element) in elements.iter_mut().enumerate() {
        if element.value().is_object() {
            f(index, element);
        } else {
            trace!(
                "{}: skipping {} element {} of {}",
                operation,
                element.value().kind(),
                index,
                path::display(path)
            );
        }
    }
}

/// Calls `f` with every object reached by `path`.
///
/// An object at `path` is visited once; an array at `path` has each of its
/// object elements visited. Anything else is a no-op.
fn for_each_target<S, F>(root: &mut JsonNode, path: &[S], operation: &str, mut f: F)
where
    S: AsRef<str>,
    F: FnMut(&mut JsonNode),
{
    let Some(node) = path::resolve_mut(root, path) else {
        debug!("{}: nothing at {}", operation, path::display(path));
        return;
    };

    if node.value().is_object() {
        f(node);
        return;
    }

    let kind = node.value().kind();
    match node.elements_mut() {
        Some(elements) => elements
            .iter_mut()
            .filter(|element| element.value().is_object())
            .for_each(&mut f),
        None => debug!(
            "{}: {} at {} is neither an object nor an array",
            operation,
            kind,
            path::display(path)
        ),
    }
}
