//! Document model: nodes, trees and the serde_json adapter.

pub mod node;
pub mod parser;
pub mod tree;

pub use node::{JsonNode, JsonNumber, JsonValue, Scalar};
pub use tree::JsonTree;
