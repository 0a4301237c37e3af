//! Backup snapshots of an install target
//!
//! Before the install target is overwritten, every member that already
//! exists is copied verbatim into `<backup_root>/<YYYYMMDD-HHMMSS>`. The
//! snapshot directory is only created once the first existing member is
//! found, so an empty target never leaves an empty snapshot behind.
//! Snapshots are never pruned.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::error::fs::write_error;
use crate::fs_ops;

/// Format of snapshot directory names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Snapshot label for the current local time
pub fn timestamp_label() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Copy the existing `members` of `target_root` into a fresh snapshot
/// directory under `backup_root`.
///
/// Returns the snapshot path, or `None` when none of the members existed.
pub fn snapshot(
    target_root: &Path,
    members: &[&str],
    backup_root: &Path,
    label: &str,
) -> Result<Option<PathBuf>> {
    let mut snapshot_dir: Option<PathBuf> = None;

    for member in members {
        let source = target_root.join(member);
        if !fs_ops::entry_exists(&source) {
            continue;
        }

        let dir = match &snapshot_dir {
            Some(dir) => dir.clone(),
            None => {
                let dir = create_snapshot_dir(backup_root, label)?;
                snapshot_dir = Some(dir.clone());
                dir
            }
        };

        debug!(member, snapshot = %dir.display(), "backing up");
        fs_ops::copy_entry(&source, &dir.join(member))?;
    }

    Ok(snapshot_dir)
}

/// Create `<backup_root>/<label>`, adding `-1`, `-2`, ... when a snapshot
/// with the same label already exists.
fn create_snapshot_dir(backup_root: &Path, label: &str) -> Result<PathBuf> {
    fs::create_dir_all(backup_root).map_err(|e| write_error(backup_root, e))?;

    let mut candidate = backup_root.join(label);
    let mut suffix = 0;
    loop {
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                suffix += 1;
                candidate = backup_root.join(format!("{label}-{suffix}"));
            }
            Err(e) => return Err(write_error(&candidate, e)),
        }
    }
}
