//! Path utilities and constants
//!
//! This module provides the fixed names used inside bundles, install targets
//! and project mirrors, plus resolution of the per-user default locations.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::error::config::invalid;

/// Router document consumed by OpenCode to pick a skill
pub const ROUTER_FILE: &str = "AGENTS.md";

/// Skills tree
pub const SKILLS_DIR: &str = "skills";

/// Helper scripts tree
pub const SCRIPTS_DIR: &str = "scripts";

/// Members every bundle must have and every install target receives
pub const BUNDLE_MEMBERS: [&str; 3] = [ROUTER_FILE, SKILLS_DIR, SCRIPTS_DIR];

/// Project-local agent directory that receives a second copy of the mirror
pub const AGENT_DIR: &str = ".agent";

/// Optional bundle settings file at the bundle root
pub const SETTINGS_FILE: &str = "skillport.yaml";

/// Name of the cache directory under the user's cache directory
const CACHE_DIR: &str = "skillport";

/// Upstream clones subdirectory within the cache
pub const UPSTREAM_DIR: &str = "upstream";

/// Suffix appended to the target directory name for the default backup root
const BACKUP_SUFFIX: &str = "-backups";

/// Default install target: `~/.config/opencode`
///
/// OpenCode reads `~/.config/opencode` on every platform, so this does not use
/// the platform config directory.
pub fn default_target_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| invalid("Could not determine home directory"))?;
    Ok(home.join(".config").join("opencode"))
}

/// Backup root for a target.
///
/// Defaults to a sibling of the target named `<target>-backups`. Can be
/// overridden with the `SKILLPORT_BACKUP_DIR` environment variable.
pub fn backup_root(target_dir: &Path) -> PathBuf {
    if let Ok(dir) = std::env::var("SKILLPORT_BACKUP_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    let name = target_dir
        .file_name()
        .map_or_else(|| "opencode".into(), |n| n.to_string_lossy().into_owned());
    let parent = target_dir.parent().unwrap_or(target_dir);
    parent.join(format!("{name}{BACKUP_SUFFIX}"))
}

/// Get the cache directory path
///
/// Uses the platform's standard cache location with a `skillport`
/// subdirectory. Can be overridden with the `SKILLPORT_CACHE_DIR` environment
/// variable.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var("SKILLPORT_CACHE_DIR") {
        if !cache_dir.is_empty() {
            return Ok(PathBuf::from(cache_dir));
        }
    }

    let base = dirs::cache_dir().ok_or_else(|| invalid("Could not determine cache directory"))?;
    Ok(base.join(CACHE_DIR))
}

/// Make a path absolute against the current directory without touching the
/// file system (the target may not exist yet).
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map_err(|e| invalid(format!("Cannot resolve {}: {e}", path.display())))
}
