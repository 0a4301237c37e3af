//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::paths::absolute;
use crate::error::Result;
use crate::error::fs::io_error;

/// Resolve an optional directory argument to an absolute path.
///
/// Falls back to the current directory.
pub fn resolve_dir(dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(path) => absolute(path),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}"))),
    }
}
