//! Single-object field insertion and removal.

use crate::document::node::{JsonNode, Scalar};
use crate::error::NodeError;
use crate::path;
use log::debug;

/// Writes `key -> value` into the object `root`.
///
/// A new key is appended; an existing key is overwritten in place.
///
/// # Errors
///
/// Returns [`NodeError::NotAnObject`] when `root` is not an object.
pub fn set_field(root: &mut JsonNode, key: &str, value: impl Into<Scalar>) -> Result<(), NodeError> {
    let found = root.value().kind();
    if root.insert_field(key, JsonNode::from(value.into())) {
        Ok(())
    } else {
        Err(NodeError::NotAnObject { found })
    }
}

/// Removes `key` from the object `root`. An absent key is not an error.
///
/// # Errors
///
/// Returns [`NodeError::NotAnObject`] when `root` is not an object.
pub fn remove_field(root: &mut JsonNode, key: &str) -> Result<(), NodeError> {
    if !root.value().is_object() {
        return Err(NodeError::NotAnObject {
            found: root.value().kind(),
        });
    }
    root.remove_field(key);
    Ok(())
}

/// Inserts `key -> value` into the object at `path`, with the semantics of [`set_field`].
///
/// Does nothing when `path` is missing or does not lead to an object.
pub fn add_field_by_path<S: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    key: &str,
    value: impl Into<Scalar>,
) {
    match path::locate_object_mut(root, path) {
        Some(target) => {
            target.insert_field(key, JsonNode::from(value.into()));
        }
        None => debug!("add_field_by_path: no object at {}", path::display(path)),
    }
}

/// Removes `field_name` from the object at `path`; the empty path means `root` itself.
///
/// Does nothing when the path is missing, leads to a non-object, or the field is absent.
pub fn remove_field_by_path_and_name<S: AsRef<str>>(
    root: &mut JsonNode,
    path: &[S],
    field_name: &str,
) {
    match path::locate_object_mut(root, path) {
        Some(target) => {
            target.remove_field(field_name);
        }
        None => debug!(
            "remove_field_by_path_and_name: no object at {}",
            path::display(path)
        ),
    }
}
