//! Batch scripts: a TOML list of operations applied to one document in order.
//!
//! Each `[[op]]` table names an operation with its `op` key; the remaining keys
//! are that operation's arguments. Paths are arrays of keys, `[]` meaning the
//! document root.
//!
//! ```toml
//! [[op]]
//! op = "remove_field_of_list"
//! path = ["users"]
//! field = "age"
//!
//! [[op]]
//! op = "set_on_each"
//! path = ["users"]
//! field = "active"
//! value = true
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::document::node::{JsonNumber, Scalar};
use crate::document::tree::JsonTree;
use crate::error::NodeError;
use crate::ops;

/// A scalar as written in a script: string, integer, float or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<ScriptValue> for Scalar {
    fn from(value: ScriptValue) -> Self {
        match value {
            ScriptValue::Boolean(b) => Scalar::Boolean(b),
            ScriptValue::Integer(i) => Scalar::Number(JsonNumber::Integer(i)),
            ScriptValue::Float(f) => Scalar::Number(JsonNumber::Float(f)),
            ScriptValue::String(s) => Scalar::String(s),
        }
    }
}

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Root-level insert; the root must be an object.
    SetField { key: String, value: ScriptValue },
    /// Root-level removal; the root must be an object.
    RemoveField { key: String },
    AddField {
        path: Vec<String>,
        key: String,
        value: ScriptValue,
    },
    RemoveFieldAt { path: Vec<String>, field: String },
    RemoveFieldOfList {
        #[serde(default)]
        path: Vec<String>,
        field: String,
    },
    RemoveFieldTwoLevel { path: [String; 2], field: String },
    AddPosition { path: Vec<String>, field: String },
    SetByRules {
        path: Vec<String>,
        field: String,
        lookup: String,
        rules: HashMap<String, bool>,
    },
    SetOnEach {
        path: Vec<String>,
        field: String,
        value: ScriptValue,
    },
    CleanTwoEmptyFields {
        path: Vec<String>,
        group: String,
        first: String,
        second: String,
    },
    CleanEmptyArrayField {
        #[serde(default)]
        path: Vec<String>,
        #[serde(default)]
        inner_path: Vec<String>,
        field: String,
    },
    EmptyStringToMap {
        #[serde(default)]
        path: Vec<String>,
        fields: Vec<String>,
    },
}

impl Operation {
    /// Applies this operation to `tree`.
    ///
    /// # Errors
    ///
    /// Only `set_field` and `remove_field` can fail, when the root is an array.
    pub fn apply(&self, tree: &mut JsonTree, config: &Config) -> Result<(), NodeError> {
        let root = tree.root_mut();
        match self {
            Operation::SetField { key, value } => ops::set_field(root, key, value.clone())?,
            Operation::RemoveField { key } => ops::remove_field(root, key)?,
            Operation::AddField { path, key, value } => {
                ops::add_field_by_path(root, path, key, value.clone())
            }
            Operation::RemoveFieldAt { path, field } => {
                ops::remove_field_by_path_and_name(root, path, field)
            }
            Operation::RemoveFieldOfList { path, field } => {
                ops::remove_field_of_list_by_path_and_name(root, path, field)
            }
            Operation::RemoveFieldTwoLevel { path, field } => {
                ops::remove_field_two_level_array(root, path, field)
            }
            Operation::AddPosition { path, field } => ops::add_position_by_path(root, path, field),
            Operation::SetByRules {
                path,
                field,
                lookup,
                rules,
            } => ops::add_field_to_array_by_rules_with(
                root,
                path,
                field,
                lookup,
                rules,
                config.unmatched_rule,
            ),
            Operation::SetOnEach { path, field, value } => {
                ops::add_field_to_array(root, path, field, value.clone())
            }
            Operation::CleanTwoEmptyFields {
                path,
                group,
                first,
                second,
            } => ops::clean_field_of_two_empty_fields(root, path, group, first, second),
            Operation::CleanEmptyArrayField {
                path,
                inner_path,
                field,
            } => ops::clean_array_field_if_array_is_empty(root, path, inner_path, field),
            Operation::EmptyStringToMap { path, fields } => {
                ops::convert_empty_string_field_to_empty_map(root, path, fields)
            }
        }
        Ok(())
    }
}

/// An ordered list of operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub op: Vec<Operation>,
}

impl Script {
    /// Parses a script from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse script")
    }

    /// Reads and parses a script file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml(&text)
    }

    /// Applies every operation in order and returns how many were applied.
    ///
    /// Stops at the first failing operation; the edits made before it stay in
    /// place.
    pub fn apply(&self, tree: &mut JsonTree, config: &Config) -> Result<usize, NodeError> {
        for (index, operation) in self.op.iter().enumerate() {
            log::debug!("Applying operation {}: {:?}", index, operation);
            operation.apply(tree, config)?;
        }
        Ok(self.op.len())
    }
}
