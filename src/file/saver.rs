//! JSON serialization and file saving.
//!
//! Text is produced by `serde_json` from the tree's `serde_json::Value` form,
//! so escaping and number formatting match what the loader accepts. Files are
//! written through a temp file in the target directory and then moved into
//! place, with optional backups and gzip compression.

use crate::config::Config;
use crate::document::node::JsonNode;
use crate::document::parser::to_serde_value;
use crate::document::tree::JsonTree;
use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serializes a tree according to `config` (compact or indented).
pub fn serialize_tree(tree: &JsonTree, config: &Config) -> Result<String> {
    if config.compact_output {
        Ok(serialize_node_compact(tree.root()))
    } else {
        serialize_node(tree.root(), config.indent_size)
    }
}

/// Serializes a node to a single line with no whitespace.
pub fn serialize_node_compact(node: &JsonNode) -> String {
    to_serde_value(node).to_string()
}

/// Serializes a node with one entry per line, indented by `indent_size` spaces
/// per level.
///
/// ```
/// use jsonnode_utils::document::parser::parse_json;
/// use jsonnode_utils::file::saver::serialize_node;
///
/// let tree = parse_json(r#"{"a":[1]}"#).unwrap();
/// assert_eq!(serialize_node(tree.root(), 2).unwrap(), "{\n  \"a\": [\n    1\n  ]\n}");
/// ```
pub fn serialize_node(node: &JsonNode, indent_size: usize) -> Result<String> {
    let indent = vec![b' '; indent_size];
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    to_serde_value(node)
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(out).context("Serialized JSON is not valid UTF-8")
}

/// Saves a JSON tree to a file.
///
/// Targets ending in `.gz` are gzip-compressed. With `config.create_backup`,
/// an existing target is first copied to `<name>.bak`. Nothing at the target
/// changes unless the whole document was written.
///
/// # Examples
///
/// ```no_run
/// use jsonnode_utils::config::Config;
/// use jsonnode_utils::document::parser::parse_json;
/// use jsonnode_utils::file::saver::save_json_file;
///
/// let tree = parse_json(r#"{"a": 1}"#).unwrap();
/// save_json_file("output.json", &tree, &Config::default()).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - The temp file cannot be created or written
/// - The temp file cannot be moved over the target
pub fn save_json_file<P: AsRef<Path>>(path: P, tree: &JsonTree, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let compress = path.extension().is_some_and(|ext| ext == "gz");

    let mut text = serialize_tree(tree, config)?;
    text.push('\n');

    if config.create_backup && path.exists() {
        backup(path)?;
    }

    replace_file(path, text.as_bytes(), compress)?;
    log::debug!("Saved {} bytes to {}", text.len(), path.display());

    Ok(())
}

fn backup(path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Cannot back up {}: no file name", path.display()))?;
    let mut backup_name = name.to_os_string();
    backup_name.push(".bak");
    fs::copy(path, path.with_file_name(backup_name)).context("Failed to create backup")?;
    Ok(())
}

/// The temp file is created next to `path` under a fresh name, so no existing
/// file is touched. It is removed on any error before the final move.
fn replace_file(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).context("Failed to create temp file")?;

    if compress {
        let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        temp.write_all(data).context("Failed to write temp file")?;
    }

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .context("Failed to copy file permissions")?;
    }

    temp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}
