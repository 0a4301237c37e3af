//! The source bundle

use std::path::{Path, PathBuf};

use crate::config::BundleSettings;
use crate::config::paths::{ROUTER_FILE, SCRIPTS_DIR, SETTINGS_FILE, SKILLS_DIR};
use crate::error::Result;
use crate::error::bundle::incomplete;

/// Required members and whether each one is a directory
const REQUIRED_MEMBERS: [(&str, bool); 3] =
    [(ROUTER_FILE, false), (SKILLS_DIR, true), (SCRIPTS_DIR, true)];

/// A bundle directory: `AGENTS.md`, `skills/`, `scripts/` and optionally a
/// runtime config template and `skillport.yaml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a member inside the bundle
    pub fn member(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Fail with every missing member listed at once
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = REQUIRED_MEMBERS
            .iter()
            .filter(|(name, is_dir)| {
                let path = self.member(name);
                if *is_dir { !path.is_dir() } else { !path.is_file() }
            })
            .map(|(name, is_dir)| {
                if *is_dir {
                    format!("{name}/")
                } else {
                    (*name).to_string()
                }
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(incomplete(self.root.display().to_string(), missing.join(", ")))
        }
    }

    /// `skillport.yaml`, or the defaults when the bundle has none
    pub fn settings(&self) -> Result<BundleSettings> {
        BundleSettings::load_or_default(&self.member(SETTINGS_FILE))
    }
}
