//! Configuration system for jsonnode.
//!
//! Settings are read from `~/.config/jsonnode/config.toml` when present and fall
//! back to defaults otherwise. Command-line flags override individual fields.
//!
//! # Example
//!
//! ```
//! use jsonnode_utils::config::Config;
//! use jsonnode_utils::ops::UnmatchedRule;
//!
//! let config = Config::default();
//! assert_eq!(config.indent_size, 2);
//! assert_eq!(config.unmatched_rule, UnmatchedRule::Skip);
//!
//! let custom = Config {
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! assert!(!custom.compact_output);
//! ```

use serde::{Deserialize, Serialize};

use crate::ops::UnmatchedRule;

/// Configuration for reading, editing and writing documents.
///
/// # Fields
///
/// * `indent_size` - Spaces per indentation level in pretty output (default: 2)
/// * `compact_output` - Write single-line JSON (default: false)
/// * `create_backup` - Create .bak files before overwriting (default: false)
/// * `unmatched_rule` - Rule-driven broadcast policy for elements without a rule (default: skip)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Write single-line JSON
    #[serde(default)]
    pub compact_output: bool,

    /// Create .bak files before overwriting
    #[serde(default)]
    pub create_backup: bool,

    /// What `set_by_rules` does when an element's lookup value has no rule
    #[serde(default)]
    pub unmatched_rule: UnmatchedRule,
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            compact_output: false,
            create_backup: false,
            unmatched_rule: UnmatchedRule::Skip,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonnode/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonnode");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults on any failure.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("Could not read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path` as pretty TOML.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
