//! Project mirrors
//!
//! Copies (never links) the router document and the skills tree into a
//! project root and into its `.agent/` directory. Each destination is fully
//! replaced: symlinks in the way are unlinked, old trees are deleted, so a
//! skill removed from the source also disappears from the project.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::paths::{AGENT_DIR, ROUTER_FILE, SKILLS_DIR};
use crate::error::Result;
use crate::error::bundle::{project_not_found, source_not_found};
use crate::fs_ops;

/// Destinations written by one sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub router_files: Vec<PathBuf>,
    pub skills_dirs: Vec<PathBuf>,
}

impl SyncReport {
    /// All written paths, files first
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.router_files.iter().chain(self.skills_dirs.iter())
    }
}

/// The mirror roots of a project: the project itself and `<project>/.agent`
pub fn mirror_roots(project_dir: &Path) -> [PathBuf; 2] {
    [project_dir.to_path_buf(), project_dir.join(AGENT_DIR)]
}

/// Mirror `router` and `skills` into `project_dir` and `project_dir/.agent`.
pub fn sync_project(router: &Path, skills: &Path, project_dir: &Path) -> Result<SyncReport> {
    if !router.is_file() {
        return Err(source_not_found(router.display().to_string()));
    }
    if !skills.is_dir() {
        return Err(source_not_found(skills.display().to_string()));
    }
    if !project_dir.is_dir() {
        return Err(project_not_found(project_dir.display().to_string()));
    }

    // Nothing is written unless every destination is safe to replace
    for root in mirror_roots(project_dir) {
        fs_ops::check_mirror(router, &root.join(ROUTER_FILE))?;
        fs_ops::check_mirror(skills, &root.join(SKILLS_DIR))?;
    }

    let mut report = SyncReport {
        router_files: Vec::new(),
        skills_dirs: Vec::new(),
    };

    for root in mirror_roots(project_dir) {
        let router_dst = root.join(ROUTER_FILE);
        fs_ops::mirror_file(router, &router_dst)?;
        debug!(path = %router_dst.display(), "router copied");
        report.router_files.push(router_dst);

        let skills_dst = root.join(SKILLS_DIR);
        fs_ops::mirror_dir(skills, &skills_dst)?;
        debug!(path = %skills_dst.display(), "skills mirrored");
        report.skills_dirs.push(skills_dst);
    }

    Ok(report)
}
