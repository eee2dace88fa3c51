//! File I/O for JSON documents.
//!
//! This module loads documents from disk or stdin, and saves trees back to files
//! with atomic write operations and optional backups.

pub mod loader;
pub mod saver;
