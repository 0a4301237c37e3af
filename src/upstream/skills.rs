//! Importing skills from an upstream clone into the bundle

use std::fs;
use std::path::Path;

use tracing::debug;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::paths::SKILLS_DIR;
use crate::error::Result;
use crate::error::config::invalid_pattern;
use crate::error::fs::{read_error, write_error};
use crate::fs_ops;

/// Copy every entry of `<repo_dir>/skills` whose name matches `pattern` into
/// `bundle_skills`.
///
/// Additive: a matching entry replaces its own counterpart only, every other
/// skill in the bundle stays. Returns the imported names, sorted.
pub fn import_skills(repo_dir: &Path, pattern: &str, bundle_skills: &Path) -> Result<Vec<String>> {
    let glob = Glob::new(pattern).map_err(|e| invalid_pattern(pattern, e.to_string()))?;

    let source = repo_dir.join(SKILLS_DIR);
    if !source.is_dir() {
        debug!(repo = %repo_dir.display(), "no skills directory upstream");
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = fs::read_dir(&source)
        .map_err(|e| read_error(&source, e))?
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| glob.matched(&CandidatePath::from(name.as_str())).is_some())
        .collect();
    names.sort();

    if names.is_empty() {
        return Ok(names);
    }
    fs::create_dir_all(bundle_skills).map_err(|e| write_error(bundle_skills, e))?;

    for name in &names {
        let src = source.join(name);
        let dst = bundle_skills.join(name);
        debug!(skill = %name, "importing");

        if src.is_dir() && !fs_ops::is_symlink(&src) {
            fs_ops::mirror_dir(&src, &dst)?;
        } else {
            fs_ops::remove_entry(&dst)?;
            fs_ops::copy_entry(&src, &dst)?;
        }
    }

    Ok(names)
}
