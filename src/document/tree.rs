//! A complete JSON document.
//!
//! `JsonTree` owns the root node and guarantees it is an object or an array.
//! Lookups go through the key-path resolver in [`crate::path`].
//!
//! # Example
//!
//! ```
//! use jsonnode_utils::document::parser::parse_json;
//!
//! let tree = parse_json(r#"{"a": {"b": {"c": "value"}}}"#).unwrap();
//! let node = tree.get(&["a", "b", "c"]).unwrap();
//! assert_eq!(node.value().as_text().as_deref(), Some("value"));
//!
//! assert!(tree.get(&["a", "x"]).is_none());
//! ```

use super::node::JsonNode;
use crate::error::NodeError;
use crate::path;

/// A parsed JSON document whose root is an object or an array.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonTree {
    root: JsonNode,
}

impl JsonTree {
    /// Creates a tree, rejecting scalar roots.
    pub fn new(root: JsonNode) -> Result<Self, NodeError> {
        if !root.value().is_container() {
            return Err(NodeError::InvalidRoot {
                found: root.value().kind(),
            });
        }
        Ok(Self { root })
    }

    /// Returns a reference to the root node of the tree.
    pub fn root(&self) -> &JsonNode {
        &self.root
    }

    /// Returns a mutable reference to the root node of the tree.
    ///
    /// Replacing the root with a scalar breaks the tree's invariant; edit
    /// through the operations in [`crate::ops`] instead.
    pub fn root_mut(&mut self) -> &mut JsonNode {
        &mut self.root
    }

    /// Consumes the tree and returns its root.
    pub fn into_root(self) -> JsonNode {
        self.root
    }

    /// Resolves a key path from the root. `None` means the path is missing.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&JsonNode> {
        path::resolve(&self.root, path)
    }

    /// Mutable variant of [`JsonTree::get`].
    pub fn get_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut JsonNode> {
        path::resolve_mut(&mut self.root, path)
    }

    /// Returns whether any node in the tree has been edited since parsing.
    pub fn is_modified(&self) -> bool {
        self.root.is_modified_deep()
    }
}
