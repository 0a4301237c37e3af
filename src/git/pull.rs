//! Updating an existing clone
//!
//! A pull here is fetch + hard reset of the checked-out branch to its
//! remote-tracking branch. Cached upstream clones are never edited locally,
//! so there is nothing to merge.

use std::path::Path;

use git2::{Repository, ResetType};

use super::auth::fetch_options;
use super::error::interpret_git_error;
use crate::error::Result;
use crate::error::git::{fetch_failed, open_failed};

/// Remote every clone made by `clone()` has
const REMOTE: &str = "origin";

/// Open an existing repository
fn open(path: &Path) -> Result<Repository> {
    Repository::open(path)
        .map_err(|e| open_failed(path.display().to_string(), e.message().to_string()))
}

/// Fetch `origin` and move the working tree to the fetched head.
///
/// Returns the SHA the working tree now points at.
pub fn pull(path: &Path) -> Result<String> {
    let repo = open(path)?;
    let failed = |reason: String| fetch_failed(path.display().to_string(), reason);

    let mut remote = repo
        .find_remote(REMOTE)
        .map_err(|e| failed(e.message().to_string()))?;
    let mut options = fetch_options();
    remote
        .fetch(&[] as &[&str], Some(&mut options), None)
        .map_err(|e| failed(interpret_git_error(&e)))?;

    let upstream = upstream_reference(&repo);
    let commit = repo
        .find_reference(&upstream)
        .and_then(|r| r.peel_to_commit())
        .map_err(|e| failed(format!("{upstream}: {}", e.message())))?;

    repo.reset(commit.as_object(), ResetType::Hard, None)
        .map_err(|e| failed(e.message().to_string()))?;

    Ok(commit.id().to_string())
}

/// Remote-tracking reference of the checked-out branch, `FETCH_HEAD` when
/// HEAD is detached
fn upstream_reference(repo: &Repository) -> String {
    repo.head()
        .ok()
        .filter(git2::Reference::is_branch)
        .and_then(|head| head.shorthand().map(str::to_string))
        .map_or_else(
            || "FETCH_HEAD".to_string(),
            |branch| format!("refs/remotes/{REMOTE}/{branch}"),
        )
}
