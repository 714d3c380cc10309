//! File system access: reading and writing sources, discovering inputs.

pub mod walker;

pub use walker::{discover_swift_files, SwiftFileWalker};

use crate::errors::{ReorderError, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ReorderError::io_with_path(e.to_string(), path))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ReorderError::io_with_path(e.to_string(), path))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
