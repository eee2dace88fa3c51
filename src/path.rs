//! Key-path resolution.
//!
//! A path is an ordered sequence of object keys. Resolution starts at a node and
//! follows one key per segment; it only ever descends through objects. Arrays are
//! never indexed by a path segment, operations that work on arrays visit every
//! element explicitly instead.
//!
//! A failed resolution is `None` (the document is missing that location). It is
//! never an error and never conflated with a JSON `null` that is actually stored.

use crate::document::node::{JsonNode, JsonValue};

/// The empty path: "the node itself".
pub const ROOT: &[&str] = &[];

/// Resolves `path` starting at `root`.
///
/// Returns `None` as soon as a segment names a key that is absent or the
/// current node is not an object. The empty path returns `root`.
///
/// # Example
///
/// ```
/// use jsonnode_utils::document::parser::parse_json;
/// use jsonnode_utils::path::{resolve, ROOT};
///
/// let tree = parse_json(r#"{"users": [{"id": 1}]}"#).unwrap();
/// assert!(resolve(tree.root(), &["users"]).unwrap().value().is_array());
/// assert!(resolve(tree.root(), &["users", "0"]).is_none());
/// assert!(resolve(tree.root(), ROOT).is_some());
/// ```
pub fn resolve<'a, S: AsRef<str>>(root: &'a JsonNode, path: &[S]) -> Option<&'a JsonNode> {
    let mut current = root;

    for segment in path {
        current = match current.value() {
            JsonValue::Object(fields) => fields.get(segment.as_ref())?,
            _ => return None,
        };
    }

    Some(current)
}

/// Mutable variant of [`resolve`].
///
/// Only the nodes actually written to are marked as modified; descending
/// through intermediate objects does not touch their flags.
pub fn resolve_mut<'a, S: AsRef<str>>(
    root: &'a mut JsonNode,
    path: &[S],
) -> Option<&'a mut JsonNode> {
    let mut current = root;

    for segment in path {
        current = match &mut current.value {
            JsonValue::Object(fields) => fields.get_mut(segment.as_ref())?,
            _ => return None,
        };
    }

    Some(current)
}

/// Resolves `path` and returns the node only if it is an array.
///
/// All operations that visit "every element of the array at `path`" go through
/// this helper, whatever the number of segments locating the array.
pub fn locate_array_mut<'a, S: AsRef<str>>(
    root: &'a mut JsonNode,
    path: &[S],
) -> Option<&'a mut JsonNode> {
    resolve_mut(root, path).filter(|node| node.value().is_array())
}

/// Resolves `path` and returns the node only if it is an object.
pub fn locate_object_mut<'a, S: AsRef<str>>(
    root: &'a mut JsonNode,
    path: &[S],
) -> Option<&'a mut JsonNode> {
    resolve_mut(root, path).filter(|node| node.value().is_object())
}

/// Renders a path for messages: segments joined by `.`, or `<root>` when empty.
pub fn display<S: AsRef<str>>(path: &[S]) -> String {
    if path.is_empty() {
        return "<root>".to_string();
    }
    path.iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<_>>()
        .join(".")
}

/// Splits a dot-separated path such as `a.b.c` into segments.
///
/// An empty string and a lone `.` both denote the root. Empty segments are
/// dropped, so `a..b` is the same as `a.b`. Keys that are empty or contain a
/// `.` cannot be written in this form.
pub fn parse_dotted(text: &str) -> Vec<String> {
    text.split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
