//! Common test utilities for Skillport integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated environment: fake home, install target, backup root, cache
/// and a copy of the fixture bundle, all inside one temp directory
pub struct TestEnv {
    pub temp: TempDir,
    pub home: PathBuf,
    pub target: PathBuf,
    pub backups: PathBuf,
    pub cache: PathBuf,
    pub bundle: PathBuf,
    pub bin: PathBuf,
}

impl TestEnv {
    /// Create an environment with the `opencode` fixture bundle copied in
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();

        let env = Self {
            home: root.join("home"),
            target: root.join("home/.config/opencode"),
            backups: root.join("backups"),
            cache: root.join("cache"),
            bundle: root.join("bundle"),
            bin: root.join("bin"),
            temp,
        };
        std::fs::create_dir_all(&env.home).expect("Failed to create home");
        std::fs::create_dir_all(&env.bin).expect("Failed to create bin");
        copy_dir_recursive(&fixture_bundle("opencode"), &env.bundle)
            .expect("Failed to copy fixture bundle");
        env
    }

    /// `skillport` with every location pointed into the environment.
    ///
    /// `PATH` only contains the environment's `bin/`, so no real memory tool
    /// is ever found or run.
    pub fn cmd(&self) -> Command {
        let mut cmd = skillport_cmd();
        cmd.current_dir(&self.bundle)
            .env("HOME", &self.home)
            .env("PATH", &self.bin)
            .env("SKILLPORT_TARGET_DIR", &self.target)
            .env("SKILLPORT_BACKUP_DIR", &self.backups)
            .env("SKILLPORT_CACHE_DIR", &self.cache)
            .env("NO_COLOR", "1")
            .env_remove("SKILLPORT_BUNDLE_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Create an empty project directory
    pub fn create_project(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        path
    }

    /// Write a file relative to the environment root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.temp.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Snapshot directories under the backup root
    pub fn snapshots(&self) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(&self.backups) else {
            return Vec::new();
        };
        let mut snapshots: Vec<PathBuf> = entries
            .map(|e| e.expect("Failed to read backup entry").path())
            .collect();
        snapshots.sort();
        snapshots
    }

    /// Put an executable shell script named `name` on the environment's `PATH`
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).expect("Failed to write tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
        path
    }

    /// Assert the install target is an exact copy of the bundle's members
    pub fn assert_target_mirrors_bundle(&self) {
        for dir in ["skills", "scripts"] {
            assert_eq!(
                read_tree(&self.target.join(dir)),
                read_tree(&self.bundle.join(dir)),
                "{dir}/ differs from the bundle"
            );
        }
        assert_eq!(
            std::fs::read(self.target.join("AGENTS.md")).expect("Failed to read target router"),
            std::fs::read(self.bundle.join("AGENTS.md")).expect("Failed to read bundle router")
        );
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(deprecated)]
pub fn skillport_cmd() -> Command {
    Command::cargo_bin("skillport").expect("skillport binary not built")
}

/// Path of a fixture bundle under `tests/common/fixtures/bundles`
pub fn fixture_bundle(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("bundles")
        .join(name)
}

/// Relative path -> contents for every entry below `root`
pub fn read_tree(root: &Path) -> BTreeMap<String, String> {
    walkdir::WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .map(|entry| {
            let entry = entry.expect("Failed to walk tree");
            let relative = entry
                .path()
                .strip_prefix(root)
                .expect("Entry outside root")
                .to_string_lossy()
                .replace('\\', "/");
            let value = if entry.file_type().is_symlink() {
                format!(
                    "-> {}",
                    std::fs::read_link(entry.path()).expect("Failed to read link").display()
                )
            } else if entry.file_type().is_dir() {
                "<dir>".to_string()
            } else {
                std::fs::read_to_string(entry.path()).expect("Failed to read file")
            };
            (relative, value)
        })
        .collect()
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
