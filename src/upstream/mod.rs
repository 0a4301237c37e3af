//! Upstream refresh (`install --update`)
//!
//! Brings the bundle up to date before it is installed:
//! 1. clone or pull every configured upstream repository into the cache
//! 2. import the skills each repository offers into the bundle
//! 3. make sure the memory-tool binary is installed
//!
//! Git failures abort the refresh, and with it the install. The memory-tool
//! step never does.

pub mod memory_tool;
pub mod skills;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

pub use memory_tool::{MemoryToolStatus, ensure_memory_tool};
pub use skills::import_skills;

use crate::config::paths::SKILLS_DIR;
use crate::config::{BundleSettings, Settings, UpstreamRepo};
use crate::error::Result;
use crate::error::fs::write_error;
use crate::tools::{CommandRunner, ToolLocator};
use crate::{fs_ops, git, ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoAction {
    Cloned,
    Pulled,
}

/// State of one cached clone after the refresh
#[derive(Debug, Clone)]
pub struct RepoUpdate {
    pub name: String,
    pub path: PathBuf,
    pub action: RepoAction,
    pub head: String,
}

impl RepoUpdate {
    pub fn short_head(&self) -> &str {
        &self.head[..self.head.len().min(7)]
    }
}

#[derive(Debug, Clone)]
pub struct RefreshReport {
    pub repos: Vec<RepoUpdate>,
    pub imported_skills: Vec<String>,
    pub memory_tool: MemoryToolStatus,
}

/// Refresh the bundle at `bundle_root` from its upstream repositories
pub fn refresh(
    settings: &Settings,
    bundle_root: &Path,
    bundle: &BundleSettings,
    locator: &dyn ToolLocator,
    runner: &dyn CommandRunner,
) -> Result<RefreshReport> {
    let cache_root = settings.upstream_cache_dir();
    let bundle_skills = bundle_root.join(SKILLS_DIR);
    let mut repos = Vec::with_capacity(bundle.upstream.len());
    let mut imported_skills = Vec::new();

    for repo in &bundle.upstream {
        let pb = ui::spinner(format!("Updating {}", repo.name));
        let update = match update_repo(&cache_root, repo) {
            Ok(update) => {
                pb.finish_and_clear();
                update
            }
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        ui::success(format!(
            "{} {} ({})",
            match update.action {
                RepoAction::Cloned => "Cloned",
                RepoAction::Pulled => "Updated",
            },
            update.name,
            update.short_head()
        ));

        if let Some(pattern) = &repo.skills {
            let names = import_skills(&update.path, pattern, &bundle_skills)?;
            if !names.is_empty() {
                ui::note(format!("skills from {}: {}", repo.name, names.join(", ")));
            }
            imported_skills.extend(names);
        }
        repos.push(update);
    }

    let memory_tool = ensure_memory_tool(&bundle.memory_tool, locator, runner);

    Ok(RefreshReport {
        repos,
        imported_skills,
        memory_tool,
    })
}

/// Pull the cached clone of `repo`, or clone it fresh
fn update_repo(cache_root: &Path, repo: &UpstreamRepo) -> Result<RepoUpdate> {
    let path = cache_root.join(&repo.name);

    let (action, head) = if path.join(".git").exists() {
        debug!(repo = %repo.name, path = %path.display(), "pulling");
        (RepoAction::Pulled, git::pull(&path)?)
    } else {
        // Leftovers of an interrupted clone
        if fs_ops::remove_entry(&path)? {
            debug!(path = %path.display(), "removed incomplete clone");
        }
        fs::create_dir_all(cache_root).map_err(|e| write_error(cache_root, e))?;

        debug!(repo = %repo.name, url = %repo.url, "cloning");
        let cloned = git::clone(&repo.url, &path)?;
        let head = cloned
            .head()
            .ok()
            .and_then(|h| h.target())
            .map(|oid| oid.to_string())
            .unwrap_or_default();
        (RepoAction::Cloned, head)
    };

    Ok(RepoUpdate {
        name: repo.name.clone(),
        path,
        action,
        head,
    })
}
