//! Read-only lookups by path.

use crate::document::node::{JsonNode, JsonValue};
use crate::path;

/// Returns the raw node at `path`, or `None` when the path is missing.
pub fn get_node_by_path<'a, S: AsRef<str>>(root: &'a JsonNode, path: &[S]) -> Option<&'a JsonNode> {
    path::resolve(root, path)
}

/// Returns the textual value of the scalar at `path`.
///
/// Strings come back unchanged, numbers and booleans formatted. A missing path,
/// a `null`, an object or an array all yield `None`.
pub fn get_string<S: AsRef<str>>(root: &JsonNode, path: &[S]) -> Option<String> {
    path::resolve(root, path).and_then(|node| node.value().as_text())
}

/// Returns the textual values of the array at `path`.
///
/// Elements without a textual form (nulls, objects, arrays) are left out. A
/// missing path or a non-array yields an empty list, never an error.
pub fn get_string_list<S: AsRef<str>>(root: &JsonNode, path: &[S]) -> Vec<String> {
    match path::resolve(root, path).map(JsonNode::value) {
        Some(JsonValue::Array(elements)) => elements
            .iter()
            .filter_map(|element| element.value().as_text())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_json;

    #[test]
    fn test_get_string_nested() {
        let tree =
            parse_json(r#"{"name":{"first":"Aviv","last":"Doron"},"age":29}"#).unwrap();
        assert_eq!(
            get_string(tree.root(), &["name", "first"]).as_deref(),
            Some("Aviv")
        );
        assert_eq!(get_string(tree.root(), &["age"]).as_deref(), Some("29"));
    }

    #[test]
    fn test_get_string_non_scalar_is_none() {
        let tree = parse_json(r#"{"name":{"first":"Aviv"},"gone":null}"#).unwrap();
        assert_eq!(get_string(tree.root(), &["name"]), None);
        assert_eq!(get_string(tree.root(), &["gone"]), None);
        assert_eq!(get_string(tree.root(), &["nope"]), None);
    }

    #[test]
    fn test_get_string_list() {
        let tree = parse_json(r#"{"names":["alice","bob","charlie"]}"#).unwrap();
        assert_eq!(
            get_string_list(tree.root(), &["names"]),
            vec!["alice", "bob", "charlie"]
        );
        assert!(get_string_list(tree.root(), &["last names"]).is_empty());
    }

    #[test]
    fn test_get_string_list_skips_non_text_elements() {
        let tree = parse_json(r#"{"mixed":["a",1,true,null,{},[]]}"#).unwrap();
        assert_eq!(
            get_string_list(tree.root(), &["mixed"]),
            vec!["a", "1", "true"]
        );
    }

    #[test]
    fn test_get_string_list_of_scalar_is_empty() {
        let tree = parse_json(r#"{"name":"Aviv"}"#).unwrap();
        assert!(get_string_list(tree.root(), &["name"]).is_empty());
    }

    #[test]
    fn test_get_node_by_path() {
        let tree = parse_json(r#"{"a":{"b":{"c":"value"}}}"#).unwrap();
        let node = get_node_by_path(tree.root(), &["a", "b", "c"]).unwrap();
        assert_eq!(node.value().as_text().as_deref(), Some("value"));
        assert!(get_node_by_path(tree.root(), &["a", "c"]).is_none());
    }
}
