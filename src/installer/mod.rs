//! Bundle installation
//!
//! `Installer::run` deploys a bundle into the install target:
//! 1. validate the bundle (nothing is touched when a member is missing)
//! 2. refresh it from upstream when asked to
//! 3. back up the members the target already has
//! 4. replace `AGENTS.md`, `skills/` and `scripts/` wholesale
//! 5. seed the runtime config from its template, first install only
//! 6. register the memory tool with OpenCode
//! 7. mirror the fresh install into a project when asked to
//!
//! Steps 1-4 fail fast. Steps 5-7 are best-effort: problems are reported as
//! warnings and the install still succeeds.

pub mod bundle;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use bundle::Bundle;

use crate::backup;
use crate::config::paths::{BUNDLE_MEMBERS, ROUTER_FILE, SCRIPTS_DIR, SKILLS_DIR};
use crate::config::{MemoryToolSettings, RuntimeConfigSettings, Settings};
use crate::error::Result;
use crate::error::fs::write_error;
use crate::error::tool::registration_failed;
use crate::fs_ops;
use crate::sync::{SyncReport, sync_project};
use crate::tools::{CommandRunner, ToolLocator};
use crate::ui;
use crate::upstream::{self, RefreshReport};

/// Options of one install run
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Refresh the bundle from upstream first
    pub update: bool,

    /// Project to mirror the installed router and skills into
    pub sync: Option<PathBuf>,
}

/// Outcome of the memory-tool registration step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// The binary is not on `PATH`
    NotInstalled,
    Failed,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registered => write!(f, "registered"),
            Self::NotInstalled => write!(f, "not installed"),
            Self::Failed => write!(f, "registration failed"),
        }
    }
}

/// What an install run did
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub target: PathBuf,
    pub backup: Option<PathBuf>,
    pub refresh: Option<RefreshReport>,
    pub scripts_marked: usize,
    pub runtime_config_created: bool,
    pub registration: Registration,
    pub sync: Option<SyncReport>,
}

/// Deploys bundles into the install target of `settings`
pub struct Installer<'a> {
    settings: &'a Settings,
    locator: &'a dyn ToolLocator,
    runner: &'a dyn CommandRunner,
    backup_label: String,
}

impl<'a> Installer<'a> {
    pub fn new(
        settings: &'a Settings,
        locator: &'a dyn ToolLocator,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            settings,
            locator,
            runner,
            backup_label: backup::timestamp_label(),
        }
    }

    /// Use a fixed snapshot label instead of the current time
    #[cfg(test)]
    #[must_use]
    pub fn with_backup_label(mut self, label: impl Into<String>) -> Self {
        self.backup_label = label.into();
        self
    }

    /// Install `bundle` into the target
    pub fn run(&self, bundle: &Bundle, options: &InstallOptions) -> Result<InstallReport> {
        bundle.validate()?;
        let bundle_settings = bundle.settings()?;

        let refresh = if options.update {
            ui::step("Updating bundle from upstream");
            let report = upstream::refresh(
                self.settings,
                bundle.root(),
                &bundle_settings,
                self.locator,
                self.runner,
            )?;
            // The refresh may have written into the bundle
            bundle.validate()?;
            Some(report)
        } else {
            None
        };

        let target = &self.settings.target_dir;
        fs::create_dir_all(target).map_err(|e| write_error(target, e))?;

        let backup = backup::snapshot(
            target,
            &BUNDLE_MEMBERS,
            &self.settings.backup_root,
            &self.backup_label,
        )?;
        if let Some(dir) = &backup {
            info!(snapshot = %dir.display(), "previous install backed up");
        }

        let scripts_marked = self.deploy(bundle)?;

        let runtime_config_created =
            match copy_runtime_config(bundle, target, &bundle_settings.runtime_config) {
                Ok(created) => created,
                Err(e) => {
                    ui::warn(format!("Runtime config not created: {e}"));
                    false
                }
            };

        let registration = self.register_memory_tool(&bundle_settings.memory_tool);

        let sync = options
            .sync
            .as_deref()
            .and_then(|project| self.sync_into(project));

        Ok(InstallReport {
            target: target.clone(),
            backup,
            refresh,
            scripts_marked,
            runtime_config_created,
            registration,
            sync,
        })
    }

    /// Replace the target members with the bundle's; returns the number of
    /// scripts marked executable
    fn deploy(&self, bundle: &Bundle) -> Result<usize> {
        let target = &self.settings.target_dir;

        for dir in [SKILLS_DIR, SCRIPTS_DIR] {
            fs_ops::mirror_dir(&bundle.member(dir), &target.join(dir))?;
            debug!(member = dir, "mirrored");
        }
        fs_ops::mirror_file(&bundle.member(ROUTER_FILE), &target.join(ROUTER_FILE))?;

        fs_ops::make_executable(&target.join(SCRIPTS_DIR))
    }

    fn register_memory_tool(&self, tool: &MemoryToolSettings) -> Registration {
        let Some(binary) = self.locator.locate(&tool.binary) else {
            debug!(binary = %tool.binary, "memory tool not on PATH, skipping registration");
            return Registration::NotInstalled;
        };

        // Best-effort: registration problems are reported here and nowhere else
        match self
            .runner
            .run(&binary, &tool.register)
            .map_err(|e| registration_failed(&tool.binary, e.to_string()))
        {
            Ok(()) => Registration::Registered,
            Err(e) => {
                ui::warn(e);
                Registration::Failed
            }
        }
    }

    /// Mirror the freshly installed router and skills into `project`
    fn sync_into(&self, project: &Path) -> Option<SyncReport> {
        match sync_project(
            &self.settings.router_path(),
            &self.settings.skills_dir(),
            project,
        ) {
            Ok(report) => Some(report),
            Err(e) => {
                ui::warn(format!("Sync into {} skipped: {e}", project.display()));
                None
            }
        }
    }
}

/// Copy the runtime config template into the target unless the target
/// already has a runtime config. Returns whether a file was created.
fn copy_runtime_config(
    bundle: &Bundle,
    target: &Path,
    config: &RuntimeConfigSettings,
) -> Result<bool> {
    let destination = target.join(&config.file);
    if fs_ops::entry_exists(&destination) {
        debug!(path = %destination.display(), "runtime config exists, leaving it alone");
        return Ok(false);
    }

    let template = bundle.member(&config.template);
    if !template.is_file() {
        return Ok(false);
    }

    fs::copy(&template, &destination).map_err(|e| write_error(&destination, e))?;
    Ok(true)
}
