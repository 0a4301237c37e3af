//! URL normalization for git operations
//!
//! libgit2 is picky about two URL shapes people commonly put in
//! `skillport.yaml`:
//! - SCP-style SSH (`git@host:owner/repo.git`) is rewritten to `ssh://`
//! - `file://` URLs without a leading slash are rewritten to `file:///`

use std::borrow::Cow;

/// Normalize a clone URL for libgit2
pub fn normalize_clone_url(url: &str) -> Cow<'_, str> {
    match normalize_ssh_url(url) {
        Cow::Borrowed(url) => normalize_file_url(url),
        Cow::Owned(url) => Cow::Owned(url),
    }
}

fn normalize_ssh_url(url: &str) -> Cow<'_, str> {
    if !url.starts_with("git@") {
        return Cow::Borrowed(url);
    }

    match url.split_once(':') {
        Some((host, path)) => {
            let path = path.strip_prefix('/').unwrap_or(path);
            Cow::Owned(format!("ssh://{host}/{path}"))
        }
        None => Cow::Borrowed(url),
    }
}

fn normalize_file_url(url: &str) -> Cow<'_, str> {
    let Some(rest) = url.strip_prefix("file://") else {
        return Cow::Borrowed(url);
    };

    if rest.contains('\\') {
        return Cow::Owned(format!("file:///{}", rest.replace('\\', "/").trim_start_matches('/')));
    }
    if !rest.is_empty() && !rest.starts_with('/') {
        return Cow::Owned(format!("file:///{rest}"));
    }
    Cow::Borrowed(url)
}
