//! Path-addressed structural edits for parsed JSON documents.
//!
//! A document is parsed into a [`document::JsonTree`]. Locations inside it are
//! named by key paths (see [`path`]), and [`ops`] provides the catalogue of
//! edits: inserting and removing fields, extracting values, broadcasting a
//! field over every element of an array, and pruning fields that became empty.
//! [`script`] strings operations together into a batch read from TOML.
//!
//! # Example
//!
//! ```
//! use jsonnode_utils::document::parser::parse_json;
//! use jsonnode_utils::file::saver::serialize_node_compact;
//! use jsonnode_utils::ops;
//!
//! let mut tree = parse_json(r#"{"users":[{"id":1,"hobbies":["reading"]},{"id":2,"hobbies":[]}]}"#)
//!     .unwrap();
//! ops::clean_array_field_if_array_is_empty(tree.root_mut(), &["users"], jsonnode_utils::path::ROOT, "hobbies");
//!
//! assert_eq!(
//!     serialize_node_compact(tree.root()),
//!     r#"{"users":[{"id":1,"hobbies":["reading"]},{"id":2}]}"#
//! );
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod file;
pub mod ops;
pub mod path;
pub mod script;

pub use error::NodeError;
