//! Router symlink installation
//!
//! Links a single global file (normally `<target>/AGENTS.md`) into a project
//! directory under the same base name. An existing link to exactly the same
//! source is accepted as-is; anything else at that path is a conflict and is
//! left untouched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::error::bundle::{link_conflict, project_not_found, source_not_found};
use crate::error::fs::{read_error, write_error};
use crate::fs_ops;

/// What `link_into_project` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new symlink was created at the path
    Created(PathBuf),
    /// The path already was a symlink to the source
    AlreadyLinked(PathBuf),
}

/// Create `<project_dir>/<basename of source>` pointing at `source`.
pub fn link_into_project(source: &Path, project_dir: &Path) -> Result<LinkOutcome> {
    if !source.is_file() {
        return Err(source_not_found(source.display().to_string()));
    }
    if !project_dir.is_dir() {
        return Err(project_not_found(project_dir.display().to_string()));
    }

    let source = crate::config::paths::absolute(source)?;
    let file_name = source
        .file_name()
        .ok_or_else(|| source_not_found(source.display().to_string()))?;
    let link_path = project_dir.join(file_name);

    match fs::symlink_metadata(&link_path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            fs_ops::create_symlink(&source, &link_path).map_err(|e| write_error(&link_path, e))?;
            debug!(link = %link_path.display(), source = %source.display(), "symlink created");
            Ok(LinkOutcome::Created(link_path))
        }
        Err(e) => Err(read_error(&link_path, e)),
        Ok(metadata) if metadata.file_type().is_symlink() => {
            let current = fs::read_link(&link_path).map_err(|e| read_error(&link_path, e))?;
            if current == source {
                Ok(LinkOutcome::AlreadyLinked(link_path))
            } else {
                Err(link_conflict(
                    link_path.display().to_string(),
                    format!("it is a symlink to {}", current.display()),
                ))
            }
        }
        Ok(metadata) => {
            let kind = if metadata.is_dir() {
                "a directory"
            } else {
                "a regular file"
            };
            Err(link_conflict(
                link_path.display().to_string(),
                format!("{kind} is in the way"),
            ))
        }
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SkillportError;
    use crate::test_fixtures::{create_temp_dir, read_tree, write_file};

    fn setup() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let temp = create_temp_dir();
        let source = temp.path().join("opencode/AGENTS.md");
        write_file(&source, "# Router\n");
        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();
        (temp, source, project)
    }

    #[test]
    fn test_creates_symlink() {
        let (_temp, source, project) = setup();

        let outcome = link_into_project(&source, &project).unwrap();

        assert_eq!(outcome, LinkOutcome::Created(project.join("AGENTS.md")));
        assert_eq!(fs::read_link(project.join("AGENTS.md")).unwrap(), source);
        assert_eq!(
            fs::read_to_string(project.join("AGENTS.md")).unwrap(),
            "# Router\n"
        );
    }

    #[test]
    fn test_second_run_is_noop_success() {
        let (temp, source, project) = setup();

        link_into_project(&source, &project).unwrap();
        let before = read_tree(temp.path());
        let outcome = link_into_project(&source, &project).unwrap();

        assert_eq!(outcome, LinkOutcome::AlreadyLinked(project.join("AGENTS.md")));
        assert_eq!(read_tree(temp.path()), before);
    }

    #[test]
    fn test_refuses_regular_file() {
        let (_temp, source, project) = setup();
        write_file(&project.join("AGENTS.md"), "# project notes\n");

        let err = link_into_project(&source, &project).unwrap_err();

        assert!(matches!(err, SkillportError::LinkConflict { .. }));
        assert!(err.to_string().contains("regular file"));
        assert_eq!(
            fs::read_to_string(project.join("AGENTS.md")).unwrap(),
            "# project notes\n"
        );
        assert!(!fs_ops::is_symlink(&project.join("AGENTS.md")));
    }

    #[test]
    fn test_refuses_directory() {
        let (_temp, source, project) = setup();
        write_file(&project.join("AGENTS.md/inner.md"), "inner");

        let err = link_into_project(&source, &project).unwrap_err();

        assert!(matches!(err, SkillportError::LinkConflict { .. }));
        assert!(project.join("AGENTS.md/inner.md").exists());
    }

    #[test]
    fn test_refuses_symlink_to_other_target() {
        let (temp, source, project) = setup();
        let other = temp.path().join("other.md");
        write_file(&other, "other");
        fs_ops::create_symlink(&other, &project.join("AGENTS.md")).unwrap();

        let err = link_into_project(&source, &project).unwrap_err();

        assert!(matches!(err, SkillportError::LinkConflict { .. }));
        assert_eq!(fs::read_link(project.join("AGENTS.md")).unwrap(), other);
    }

    #[test]
    fn test_refuses_dangling_symlink() {
        let (temp, source, project) = setup();
        fs_ops::create_symlink(&temp.path().join("gone.md"), &project.join("AGENTS.md"))
            .unwrap();

        let err = link_into_project(&source, &project).unwrap_err();

        assert!(matches!(err, SkillportError::LinkConflict { .. }));
    }

    #[test]
    fn test_missing_source() {
        let (temp, _source, project) = setup();

        let err = link_into_project(&temp.path().join("nope/AGENTS.md"), &project).unwrap_err();

        assert!(matches!(err, SkillportError::SourceNotFound { .. }));
        assert!(fs::read_dir(&project).unwrap().next().is_none());
    }

    #[test]
    fn test_missing_project() {
        let (temp, source, _project) = setup();

        let err = link_into_project(&source, &temp.path().join("missing")).unwrap_err();

        assert!(matches!(err, SkillportError::ProjectNotFound { .. }));
    }
}
