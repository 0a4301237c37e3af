//! Repository cloning

use std::path::Path;

use git2::{Repository, build::RepoBuilder};

use super::auth::fetch_options;
use super::error::interpret_git_error;
use super::url::normalize_clone_url;
use crate::error::Result;
use crate::error::git::clone_failed;

/// Clone `url` into `target`.
///
/// Full clones only: cached upstream clones are pulled again later, and
/// fast-forwarding a shallow clone is unreliable with libgit2.
pub fn clone(url: &str, target: &Path) -> Result<Repository> {
    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options());

    let url_to_clone = normalize_clone_url(url);
    builder
        .clone(url_to_clone.as_ref(), target)
        .map_err(|e| clone_failed(url, interpret_git_error(&e)))
}
