//! File system primitives with unified error handling
//!
//! Everything that deploys files goes through these helpers:
//! - `copy_entry` copies a file, directory or symlink verbatim (symlinks stay
//!   symlinks, permission bits are kept)
//! - `mirror_dir` / `mirror_file` make a destination an exact copy of a source
//! - `remove_entry` unlinks symlinks instead of following them
//!
//! `mirror_dir` guarantees that after it returns `Ok`, the destination tree
//! contains exactly the entries of the source tree. The copy is staged in a
//! hidden sibling directory and renamed into place, so readers never observe
//! a half-copied tree.
//!
//! A destination that is the source itself is left alone. A destination
//! nested inside the source (or the other way round) is refused before
//! anything is written.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;
use crate::error::fs::{io_error, overlapping_paths, read_error, write_error};

/// Prefix of the temporary directory `mirror_dir` stages copies in
const STAGING_PREFIX: &str = ".skillport-staging-";

/// Whether anything (file, directory, symlink, even a dangling one) exists at `path`
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Whether `path` itself is a symlink
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    Ok(())
}

/// Remove whatever is at `path` without following symlinks.
///
/// Returns `false` when nothing was there.
pub fn remove_entry(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(read_error(path, e)),
    };

    let file_type = metadata.file_type();
    let result = if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else {
        remove_file_or_link(path)
    };
    result.map_err(|e| write_error(path, e))?;
    Ok(true)
}

#[cfg(unix)]
fn remove_file_or_link(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

#[cfg(windows)]
fn remove_file_or_link(path: &Path) -> io::Result<()> {
    // Directory symlinks must be removed with remove_dir on Windows
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

/// Create a symlink at `link` pointing to `original`
#[cfg(unix)]
pub fn create_symlink(original: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

/// Create a symlink at `link` pointing to `original`
#[cfg(windows)]
pub fn create_symlink(original: &Path, link: &Path) -> io::Result<()> {
    if original.is_dir() {
        std::os::windows::fs::symlink_dir(original, link)
    } else {
        std::os::windows::fs::symlink_file(original, link)
    }
}

/// Copy a single entry (file, directory tree or symlink) from `src` to `dst`.
///
/// `dst` must not exist yet. Symlinks are recreated with the same target
/// rather than followed.
pub fn copy_entry(src: &Path, dst: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(src).map_err(|e| read_error(src, e))?;
    let file_type = metadata.file_type();

    if file_type.is_symlink() {
        let target = fs::read_link(src).map_err(|e| read_error(src, e))?;
        ensure_parent_dir(dst)?;
        create_symlink(&target, dst).map_err(|e| write_error(dst, e))
    } else if file_type.is_dir() {
        fs::create_dir_all(dst).map_err(|e| write_error(dst, e))?;
        copy_dir_contents(src, dst)?;
        fs::set_permissions(dst, metadata.permissions()).map_err(|e| write_error(dst, e))
    } else {
        ensure_parent_dir(dst)?;
        fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| write_error(dst, e))
    }
}

/// Copy everything inside `src` into the existing directory `dst`.
pub fn copy_dir_contents(src: &Path, dst: &Path) -> Result<()> {
    let mut dirs: Vec<(PathBuf, fs::Permissions)> = Vec::new();

    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| io_error(format!("{}: {e}", src.display())))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io_error(e.to_string()))?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            let link_target = fs::read_link(entry.path()).map_err(|e| read_error(entry.path(), e))?;
            create_symlink(&link_target, &target).map_err(|e| write_error(&target, e))?;
        } else if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| write_error(&target, e))?;
            let metadata = entry.metadata().map_err(|e| io_error(e.to_string()))?;
            dirs.push((target, metadata.permissions()));
        } else {
            fs::copy(entry.path(), &target).map_err(|e| write_error(&target, e))?;
        }
    }

    // Applied after the walk so read-only directories can still be filled
    for (dir, permissions) in dirs.into_iter().rev() {
        fs::set_permissions(&dir, permissions).map_err(|e| write_error(&dir, e))?;
    }

    Ok(())
}

/// Where `path` lives on disk.
///
/// Symlinks among the parent directories are resolved, the final component
/// is not followed. Components that do not exist yet are kept as given.
fn resolved_location(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut tail: Vec<OsString> = Vec::new();
    let mut current = absolute.as_path();

    loop {
        if !tail.is_empty() {
            if let Ok(resolved) = fs::canonicalize(current) {
                return tail.iter().rev().fold(resolved, |acc, name| acc.join(name));
            }
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                current = parent;
            }
            _ => return absolute,
        }
    }
}

/// Whether `source` and the entry at `destination` (not followed) are one file
#[cfg(unix)]
fn same_inode(source: &Path, destination: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(source), fs::symlink_metadata(destination)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_inode(_source: &Path, _destination: &Path) -> bool {
    false
}

/// Check that mirroring `src` onto `dst` cannot destroy `src`.
///
/// Returns `true` when `dst` already is `src`, so there is nothing to copy.
/// Fails when one of them lies inside the other.
pub fn check_mirror(src: &Path, dst: &Path) -> Result<bool> {
    let source = fs::canonicalize(src).map_err(|e| read_error(src, e))?;
    let destination = resolved_location(dst);

    if source == destination || same_inode(&source, &destination) {
        return Ok(true);
    }
    if destination.starts_with(&source) || source.starts_with(&destination) {
        return Err(overlapping_paths(src, dst));
    }
    Ok(false)
}

/// Make `dst` an exact copy of the directory `src`.
///
/// A symlink at `dst` is unlinked (its target is left alone), a real
/// directory is removed recursively. Stale entries never survive.
pub fn mirror_dir(src: &Path, dst: &Path) -> Result<()> {
    if check_mirror(src, dst)? {
        debug!(path = %dst.display(), "destination is the source, nothing to mirror");
        return Ok(());
    }

    let parent = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(parent)
        .map_err(|e| write_error(parent, e))?;

    copy_dir_contents(src, staging.path())?;
    let permissions = fs::metadata(src).map_err(|e| read_error(src, e))?.permissions();
    fs::set_permissions(staging.path(), permissions).map_err(|e| write_error(dst, e))?;

    if remove_entry(dst)? {
        debug!(path = %dst.display(), "removed previous tree");
    }
    fs::rename(staging.path(), dst).map_err(|e| write_error(dst, e))?;

    // The staging path is gone after the rename; dropping only attempts a no-op cleanup
    drop(staging);
    Ok(())
}

/// Overwrite `dst` with the bytes of `src`.
///
/// A symlink at `dst` is unlinked first so the copy never writes through it.
pub fn mirror_file(src: &Path, dst: &Path) -> Result<()> {
    if check_mirror(src, dst)? {
        debug!(path = %dst.display(), "destination is the source, nothing to copy");
        return Ok(());
    }
    if is_symlink(dst) {
        remove_file_or_link(dst).map_err(|e| write_error(dst, e))?;
    }
    ensure_parent_dir(dst)?;
    fs::copy(src, dst)
        .map(|_| ())
        .map_err(|e| write_error(dst, e))
}

/// Add the executable bits to every regular file below `dir`.
///
/// Returns how many files were updated. No-op on platforms without mode bits.
pub fn make_executable(dir: &Path) -> Result<usize> {
    let mut count = 0;

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| io_error(format!("{}: {e}", dir.display())))?;
        if !entry.file_type().is_file() {
            continue;
        }
        set_executable(entry.path())?;
        count += 1;
    }

    Ok(count)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .map_err(|e| read_error(path, e))?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions).map_err(|e| write_error(path, e))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
