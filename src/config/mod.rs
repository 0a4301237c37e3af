//! Configuration for Skillport
//!
//! - [`paths`]: fixed member names and default locations
//! - [`bundle`]: optional per-bundle `skillport.yaml`
//!
//! `Settings` is resolved once by the command layer and handed to every
//! component by reference; nothing below the commands reads the environment
//! or the home directory on its own.

pub mod bundle;
pub mod paths;

use std::path::{Path, PathBuf};

pub use bundle::{BundleSettings, MemoryToolSettings, RuntimeConfigSettings, UpstreamRepo};

use crate::error::Result;

/// Resolved locations for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Install target root (e.g. `~/.config/opencode`)
    pub target_dir: PathBuf,

    /// Parent directory of backup snapshots
    pub backup_root: PathBuf,

    /// Cache directory holding upstream clones
    pub cache_dir: PathBuf,
}

impl Settings {
    pub fn new(
        target_dir: impl Into<PathBuf>,
        backup_root: impl Into<PathBuf>,
        cache_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            target_dir: target_dir.into(),
            backup_root: backup_root.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Resolve settings from an optional target override (CLI flag or
    /// `SKILLPORT_TARGET_DIR`) and the per-user defaults.
    pub fn resolve(target_override: Option<&Path>) -> Result<Self> {
        let target_dir = match target_override {
            Some(dir) => paths::absolute(dir)?,
            None => paths::default_target_dir()?,
        };
        let backup_root = paths::absolute(&paths::backup_root(&target_dir))?;

        Ok(Self::new(target_dir, backup_root, paths::cache_dir()?))
    }

    /// Router document inside the install target
    pub fn router_path(&self) -> PathBuf {
        self.target_dir.join(paths::ROUTER_FILE)
    }

    /// Skills tree inside the install target
    pub fn skills_dir(&self) -> PathBuf {
        self.target_dir.join(paths::SKILLS_DIR)
    }

    /// Cache directory of upstream clones
    pub fn upstream_cache_dir(&self) -> PathBuf {
        self.cache_dir.join(paths::UPSTREAM_DIR)
    }
}
