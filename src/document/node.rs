//! JSON node representation with modification tracking.
//!
//! This module provides the core data structures for representing parsed JSON
//! documents. Each value is wrapped in a `JsonNode` that records whether it has
//! been touched by an edit, so callers can tell a no-op batch from a real change.
//!
//! # Example
//!
//! ```
//! use jsonnode_utils::document::node::{JsonNode, JsonValue, JsonNumber};
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("name".to_string(), JsonNode::new(JsonValue::String("Aviv".to_string())));
//! fields.insert("age".to_string(), JsonNode::new(JsonValue::Number(JsonNumber::Integer(29))));
//! let person = JsonNode::new(JsonValue::Object(fields));
//!
//! assert!(person.value().is_object());
//! assert_eq!(person.value().kind(), "object");
//! ```

use indexmap::IndexMap;

/// A JSON number, keeping integers exact.
///
/// Integers above `i64::MAX` are held as `Unsigned` so they survive a load and
/// save unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl std::fmt::Display for JsonNumber {
    /// Prints the number the way it is written to disk, so a whole float keeps
    /// its decimal point and reparses as a float.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonNumber::Integer(i) => write!(f, "{}", i),
            JsonNumber::Unsigned(u) => write!(f, "{}", u),
            JsonNumber::Float(fl) => match serde_json::Number::from_f64(*fl) {
                Some(n) => write!(f, "{}", n),
                None => write!(f, "{}", fl),
            },
        }
    }
}

/// A JSON value without metadata.
///
/// Objects and arrays contain `JsonNode` instances so that modification
/// tracking is kept throughout the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// Key-value pairs in insertion order
    Object(IndexMap<String, JsonNode>),
    /// Ordered elements
    Array(Vec<JsonNode>),
    String(String),
    Number(JsonNumber),
    Boolean(bool),
    Null,
}

impl JsonValue {
    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonnode_utils::document::node::{JsonValue, JsonNumber};
    /// use indexmap::IndexMap;
    ///
    /// assert!(JsonValue::Object(IndexMap::new()).is_object());
    /// assert!(!JsonValue::Number(JsonNumber::Integer(42)).is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this value is an object or an array.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }

    /// The type discriminant as a lowercase name, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
            JsonValue::String(_) => "string",
            JsonValue::Number(_) => "number",
            JsonValue::Boolean(_) => "boolean",
            JsonValue::Null => "null",
        }
    }

    /// Returns the textual form of a scalar.
    ///
    /// Strings are returned as-is, numbers and booleans are formatted. Null and
    /// containers have no textual form and yield `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonnode_utils::document::node::{JsonValue, JsonNumber};
    ///
    /// assert_eq!(JsonValue::Number(JsonNumber::Integer(29)).as_text().as_deref(), Some("29"));
    /// assert_eq!(JsonValue::Boolean(false).as_text().as_deref(), Some("false"));
    /// assert_eq!(JsonValue::Null.as_text(), None);
    /// ```
    pub fn as_text(&self) -> Option<String> {
        match self {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Boolean(b) => Some(b.to_string()),
            JsonValue::Null | JsonValue::Object(_) | JsonValue::Array(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, JsonNode>> {
        match self {
            JsonValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<JsonNode>> {
        match self {
            JsonValue::Array(elements) => Some(elements),
            _ => None,
        }
    }
}

/// A scalar that can be written into an object field.
///
/// This is the value type accepted by the field insertion operations. Containers
/// and null are deliberately not representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(JsonNumber),
    Boolean(bool),
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(JsonNumber::Integer(n))
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(JsonNumber::Integer(n.into()))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Number(JsonNumber::Integer(n.into()))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(JsonNumber::Float(n))
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

impl From<Scalar> for JsonValue {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(s) => JsonValue::String(s),
            Scalar::Number(n) => JsonValue::Number(n),
            Scalar::Boolean(b) => JsonValue::Boolean(b),
        }
    }
}

/// A JSON value wrapped with a modification flag.
///
/// Equality compares values only; two nodes holding the same content are equal
/// whether or not either has been edited.
#[derive(Debug, Clone)]
pub struct JsonNode {
    pub(crate) value: JsonValue,
    pub(crate) modified: bool,
}

impl PartialEq for JsonNode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<Scalar> for JsonNode {
    fn from(scalar: Scalar) -> Self {
        JsonNode::new(scalar.into())
    }
}

impl JsonNode {
    /// Creates a new `JsonNode` with the given value.
    ///
    /// The node is marked as modified since it did not come from a parsed source.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonnode_utils::document::node::{JsonNode, JsonValue};
    ///
    /// let node = JsonNode::new(JsonValue::Boolean(true));
    /// assert!(node.is_modified());
    /// ```
    pub fn new(value: JsonValue) -> Self {
        Self {
            value,
            modified: true,
        }
    }

    /// Creates a node as it comes out of the parser: not modified.
    pub fn parsed(value: JsonValue) -> Self {
        Self {
            value,
            modified: false,
        }
    }

    /// Returns an immutable reference to the node's value.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// Returns a mutable reference to the node's value.
    ///
    /// Calling this method marks the node as modified, even if the value is
    /// not actually changed.
    pub fn value_mut(&mut self) -> &mut JsonValue {
        self.modified = true;
        &mut self.value
    }

    /// Returns whether this node has been modified.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns whether this node or any node below it has been modified.
    pub fn is_modified_deep(&self) -> bool {
        if self.modified {
            return true;
        }
        match &self.value {
            JsonValue::Object(fields) => fields.values().any(JsonNode::is_modified_deep),
            JsonValue::Array(elements) => elements.iter().any(JsonNode::is_modified_deep),
            _ => false,
        }
    }

    /// Looks up a direct child of an object node by key.
    pub fn get(&self, key: &str) -> Option<&JsonNode> {
        match &self.value {
            JsonValue::Object(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Returns true if this node is an object containing `key`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or replaces `key` in an object node.
    ///
    /// A new key is appended; an existing key keeps its position and only its
    /// value changes. Returns `false`, leaving the node untouched, when this
    /// node is not an object.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonnode_utils::document::node::{JsonNode, JsonValue, Scalar};
    /// use indexmap::IndexMap;
    ///
    /// let mut node = JsonNode::new(JsonValue::Object(IndexMap::new()));
    /// assert!(node.insert_field("a", Scalar::from(1).into()));
    /// assert!(node.has("a"));
    ///
    /// let mut list = JsonNode::new(JsonValue::Array(vec![]));
    /// assert!(!list.insert_field("a", Scalar::from(1).into()));
    /// ```
    pub fn insert_field(&mut self, key: &str, value: JsonNode) -> bool {
        match &mut self.value {
            JsonValue::Object(fields) => {
                fields.insert(key.to_string(), value);
                self.modified = true;
                true
            }
            _ => false,
        }
    }

    /// Removes `key` from an object node, keeping the order of the remaining keys.
    ///
    /// The node is only marked as modified when something was removed.
    pub fn remove_field(&mut self, key: &str) -> Option<JsonNode> {
        let removed = match &mut self.value {
            JsonValue::Object(fields) => fields.shift_remove(key),
            _ => None,
        };
        if removed.is_some() {
            self.modified = true;
        }
        removed
    }

    /// Mutable access to the direct children of an object, without marking
    /// this node as modified.
    pub(crate) fn fields_mut(&mut self) -> Option<&mut IndexMap<String, JsonNode>> {
        match &mut self.value {
            JsonValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable access to the elements of an array, without marking this node as
    /// modified. Elements record their own edits.
    pub(crate) fn elements_mut(&mut self) -> Option<&mut Vec<JsonNode>> {
        match &mut self.value {
            JsonValue::Array(elements) => Some(elements),
            _ => None,
        }
    }
}
