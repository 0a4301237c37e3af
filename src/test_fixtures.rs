//! Test fixtures shared by the unit tests.
//!
//! Builds throwaway bundles, install targets and git repositories, and
//! provides `FakeSystem`, a scripted stand-in for both `ToolLocator` and
//! `CommandRunner` so tests never touch the real `PATH`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;
use crate::error::tool::command_failed;
use crate::tools::{CommandRunner, ToolLocator};

/// Absolute base for test temp directories.
///
/// A relative `TMPDIR` (e.g. `TMPDIR=tmp`) would otherwise put fixtures
/// inside the working tree.
fn temp_base() -> PathBuf {
    let base = std::env::temp_dir();
    if base.is_absolute() {
        return base;
    }
    #[cfg(windows)]
    {
        std::env::var_os("TEMP").map_or_else(|| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_base()).expect("Failed to create temp directory")
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Snapshot a directory tree as relative path -> contents.
///
/// Directories map to `"<dir>"`, symlinks to `"-> <target>"`, so two trees
/// compare equal only if they have identical shape and bytes.
#[must_use]
pub fn read_tree(root: &Path) -> BTreeMap<String, String> {
    let mut tree = BTreeMap::new();
    for entry in walkdir::WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = entry.expect("Failed to walk tree");
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        let value = if entry.file_type().is_symlink() {
            format!("-> {}", fs::read_link(entry.path()).unwrap().display())
        } else if entry.file_type().is_dir() {
            "<dir>".to_string()
        } else {
            String::from_utf8_lossy(&fs::read(entry.path()).unwrap()).into_owned()
        };
        tree.insert(relative, value);
    }
    tree
}

/// Create a complete bundle (router, two skills, one script) under `root`.
pub fn create_bundle(root: &Path) -> PathBuf {
    write_file(&root.join("AGENTS.md"), "# Router\n\nLoad skills/<name>/SKILL.md\n");
    write_file(
        &root.join("skills/react-19/SKILL.md"),
        "---\nname: react-19\n---\nUse the compiler.\n",
    );
    write_file(
        &root.join("skills/react-19/assets/component.tsx"),
        "export const A = () => null;\n",
    );
    write_file(
        &root.join("skills/pytest/SKILL.md"),
        "---\nname: pytest\n---\nPrefer fixtures.\n",
    );
    write_file(&root.join("scripts/setup.sh"), "#!/bin/sh\necho setup\n");
    root.to_path_buf()
}

/// Create a temp directory with a git repository initialized.
#[must_use]
pub fn create_git_repo() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().to_path_buf();
    git2::Repository::init(&path).expect("Failed to init git repository");
    (temp, path)
}

/// Write `relative` in the repository work tree and commit it on HEAD.
pub fn commit_file(repo_path: &Path, relative: &str, content: &str, message: &str) {
    let repo = git2::Repository::open(repo_path).expect("Failed to open repository");
    write_file(&repo_path.join(relative), content);

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(relative)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = git2::Signature::now("Skillport Test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap();
}

/// Scripted system: which tools exist, which commands fail, and what each
/// successful command installs.
#[derive(Default)]
pub struct FakeSystem {
    present: RefCell<HashSet<String>>,
    failing: HashSet<String>,
    installs: Vec<(String, String)>,
    calls: RefCell<Vec<String>>,
}

impl FakeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a tool as present on the fake `PATH`
    #[must_use]
    pub fn with_tool(self, name: &str) -> Self {
        self.present.borrow_mut().insert(name.to_string());
        self
    }

    /// Make every command whose rendered line starts with `prefix` fail
    #[must_use]
    pub fn failing(mut self, prefix: &str) -> Self {
        self.failing.insert(prefix.to_string());
        self
    }

    /// A successful command starting with `prefix` puts `tool` on the fake `PATH`
    #[must_use]
    pub fn installing(mut self, prefix: &str, tool: &str) -> Self {
        self.installs.push((prefix.to_string(), tool.to_string()));
        self
    }

    /// Rendered command lines in invocation order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ToolLocator for FakeSystem {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.present
            .borrow()
            .contains(name)
            .then(|| PathBuf::from("/fake/bin").join(name))
    }
}

impl CommandRunner for FakeSystem {
    fn run(&self, program: &Path, args: &[String]) -> Result<()> {
        let name = program
            .file_name()
            .map_or_else(|| program.display().to_string(), |n| n.to_string_lossy().into_owned());
        let line = std::iter::once(name)
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line.clone());

        if self.failing.iter().any(|prefix| line.starts_with(prefix)) {
            return Err(command_failed(line, "exit status: 1"));
        }
        for (prefix, tool) in &self.installs {
            if line.starts_with(prefix) {
                self.present.borrow_mut().insert(tool.clone());
            }
        }
        Ok(())
    }
}
