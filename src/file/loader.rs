//! JSON document loading.
//!
//! This module loads documents from files or stdin into `JsonTree` structures.
//! Gzip-compressed input is decompressed transparently.

use crate::document::parser::parse_json;
use crate::document::tree::JsonTree;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a JSON file from the filesystem.
///
/// Files ending in `.gz` are decompressed before parsing.
///
/// # Examples
///
/// ```no_run
/// use jsonnode_utils::file::loader::load_json_file;
///
/// let tree = load_json_file("config.json").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read (missing, permissions, etc.)
/// - A `.gz` file is not valid gzip
/// - The contents are not valid JSON, or the root is a scalar
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonTree> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    log::debug!("Loaded {} bytes from {}", content.len(), path_ref.display());
    parse_json(&content)
}

/// Loads and parses JSON from standard input.
///
/// Gzip input is detected by its magic bytes (`0x1f 0x8b`).
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is not valid UTF-8 or not valid JSON
pub fn load_json_from_stdin() -> Result<JsonTree> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_json_from_bytes(buffer)
}

/// Parses a document from raw bytes, decompressing gzip input.
pub fn load_json_from_bytes(buffer: Vec<u8>) -> Result<JsonTree> {
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    parse_json(&content)
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
